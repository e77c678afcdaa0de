//! Error types for scan runs.

use crate::provider::ProviderError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while orchestrating a scan.
///
/// Only `Config` is fatal to a run. The other variants are reported and
/// the scan moves on to the next file or directory.
#[derive(Error, Debug)]
pub enum ScanError {
  #[error("Config error: {0}")]
  Config(String),

  #[error("Directory does not exist: {}", .0.display())]
  DirectoryNotFound(PathBuf),

  #[error("Provider error: {0}")]
  Provider(#[from] ProviderError),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ScanError>;
