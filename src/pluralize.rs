//! English pluralization behind a small trait seam.

/// Produces plural forms for keyword fallback matching.
///
/// Implementations must be total and deterministic: every input maps to
/// exactly one output, and the same input always maps to the same output.
/// An instance is handed to the matcher at construction time, so callers
/// can swap in their own rules without any global configuration.
pub trait Pluralize {
  /// Returns the plural form of `word`. The input may be a multi-word
  /// phrase, in which case the phrase is pluralized as a whole.
  fn pluralize(&self, word: &str) -> String;
}

/// The default English pluralizer.
///
/// Backed by the inflection rules of the `pluralizer` crate, which handles
/// regular suffixes as well as irregular nouns like `person` -> `people`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishPluralizer;

impl Pluralize for EnglishPluralizer {
  fn pluralize(&self, word: &str) -> String {
    pluralizer::pluralize(word, 2, false)
  }
}
