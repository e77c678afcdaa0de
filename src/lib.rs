//! Snapgrep - keyword search over AI-generated image descriptions.
//!
//! Snapgrep walks a directory of images, asks a vision model to describe each
//! one, and reports the images whose descriptions mention a keyword, whether
//! singular or plural, as a single word or a whole phrase.

pub mod types;
pub mod error;
pub mod tokenizer;
pub mod pluralize;
pub mod matcher;
pub mod highlight;
pub mod discovery;
pub mod provider;
pub mod scanner;

pub mod prelude {
  //! Convenient re-exports for common types and traits.

  pub use crate::discovery::*;
  pub use crate::error::ScanError;
  pub use crate::highlight::*;
  pub use crate::matcher::*;
  pub use crate::pluralize::*;
  pub use crate::provider::*;
  pub use crate::scanner::*;
  pub use crate::tokenizer::tokenize;
  pub use crate::types::*;
}
