//! Blocking client for an Ollama-style generate endpoint.

use super::{DescriptionProvider, ProviderError, DEFAULT_TIMEOUT_SECS};
use base64::Engine as _;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Talks to an Ollama `/api/generate` endpoint.
///
/// The image file is read from disk, Base64-encoded and posted as a
/// single non-streaming generate request. One blocking request is made
/// per image; the configured timeout bounds the whole exchange.
pub struct OllamaProvider {
  client: reqwest::blocking::Client,
  api_url: String,
}

/// The slice of the generate response this crate reads.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
  response: Option<String>,
}

impl OllamaProvider {
  /// Client for `api_url` with the default request timeout.
  pub fn new(api_url: impl Into<String>) -> Result<Self, ProviderError> {
    Self::with_timeout(api_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
  }

  /// Client for `api_url` with an explicit request timeout.
  pub fn with_timeout(api_url: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
    let client = reqwest::blocking::Client::builder()
      .timeout(timeout)
      .build()?;
    Ok(Self {
      client,
      api_url: api_url.into(),
    })
  }

  /// Builds the non-streaming generate request body.
  fn request_body(image_b64: &str, model: &str, prompt: &str) -> serde_json::Value {
    serde_json::json!({
      "model": model,
      "prompt": prompt,
      "stream": false,
      "images": [image_b64],
    })
  }

  /// Extracts the description from a generate response body.
  fn parse_response(body: &str) -> Result<String, ProviderError> {
    let parsed: GenerateResponse = serde_json::from_str(body)?;
    parsed.response.ok_or(ProviderError::NoContent)
  }
}

impl DescriptionProvider for OllamaProvider {
  fn describe(&self, image: &Path, model: &str, prompt: &str) -> Result<String, ProviderError> {
    let bytes = fs::read(image)?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    debug!(
      "asking {} to describe {} ({} encoded bytes)",
      self.api_url,
      image.display(),
      encoded.len()
    );

    let response = self
      .client
      .post(&self.api_url)
      .json(&Self::request_body(&encoded, model, prompt))
      .send()?;

    let status = response.status();
    let body = response.text()?;
    if !status.is_success() {
      return Err(ProviderError::Status {
        status: status.as_u16(),
        body,
      });
    }

    Self::parse_response(&body)
  }
}
