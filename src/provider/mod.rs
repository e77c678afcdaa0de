//! Description providers turn an image file into text.

pub mod ollama;

pub use ollama::OllamaProvider;

use std::path::Path;
use thiserror::Error;

/// Default endpoint of a local Ollama server.
pub const DEFAULT_API_URL: &str = "http://localhost:11434/api/generate";
/// Default vision model asked for descriptions.
pub const DEFAULT_MODEL: &str = "llava";
/// Default prompt sent along with every image.
pub const DEFAULT_PROMPT: &str = "What is in this picture?";
/// Default cap, in seconds, on how long one description request may take.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Errors from a description provider.
#[derive(Error, Debug)]
pub enum ProviderError {
  #[error("failed to read image: {0}")]
  Io(#[from] std::io::Error),

  #[error("HTTP request failed: {0}")]
  Http(#[from] reqwest::Error),

  #[error("server returned {status}: {body}")]
  Status { status: u16, body: String },

  #[error("invalid JSON in response: {0}")]
  Json(#[from] serde_json::Error),

  #[error("no description in response")]
  NoContent,
}

/// Produces a natural-language description of an image.
///
/// Implementations wrap whatever multimodal service is in use. A call
/// either yields the description text or a [`ProviderError`]; an empty
/// description (`Ok("")`) is a valid success and is never conflated with
/// failure. Calls block until the service answers or the implementation's
/// timeout expires.
pub trait DescriptionProvider {
  /// Describes the image at `image` using the given model and prompt.
  fn describe(&self, image: &Path, model: &str, prompt: &str) -> Result<String, ProviderError>;
}
