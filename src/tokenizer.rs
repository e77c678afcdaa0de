//! Text tokenization utilities.

use unicode_segmentation::UnicodeSegmentation;

/// Tokenize text into lower-cased words.
///
/// Words are split on runs of non-word characters. An apostrophe inside a
/// word is kept (`"can't"` stays one token) but a trailing possessive
/// marker is stripped, so `"cat's"` becomes `"cat"` and `"dogs'"` becomes
/// `"dogs"`. Empty tokens are discarded.
///
/// # Examples
///
/// ```rust
/// use snapgrep::tokenizer::tokenize;
///
/// assert_eq!(tokenize("Cat's, dogs!"), vec!["cat", "dogs"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
  text
    .unicode_words()
    .map(|word| strip_possessive(&word.to_lowercase()).to_string())
    .filter(|word| !word.is_empty())
    .collect()
}

/// Removes a trailing `'s` or a bare trailing apostrophe.
fn strip_possessive(word: &str) -> &str {
  for suffix in ["'s", "\u{2019}s"] {
    if let Some(stem) = word.strip_suffix(suffix) {
      return stem;
    }
  }
  word
    .trim_end_matches('\'')
    .trim_end_matches('\u{2019}')
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_tokenize() {
    let text = "Hello, World! This is a test.";
    let tokens = tokenize(text);
    assert_eq!(tokens, vec!["hello", "world", "this", "is", "a", "test"]);
  }

  #[test]
  fn test_possessive_is_stripped() {
    assert_eq!(tokenize("Cat's, dogs!"), vec!["cat", "dogs"]);
    assert_eq!(tokenize("the dogs' bowls"), vec!["the", "dogs", "bowls"]);
  }

  #[test]
  fn test_inner_apostrophe_survives() {
    assert_eq!(tokenize("I can't see"), vec!["i", "can't", "see"]);
  }

  #[test]
  fn test_curly_apostrophe_is_treated_like_ascii() {
    assert_eq!(tokenize("the person\u{2019}s keys"), vec!["the", "person", "keys"]);
  }

  #[test]
  fn test_digits_are_kept() {
    assert_eq!(tokenize("2 dogs"), vec!["2", "dogs"]);
  }

  #[test]
  fn test_empty_and_blank_input() {
    assert_eq!(tokenize(""), Vec::<String>::new());
    assert_eq!(tokenize("   \t\n"), Vec::<String>::new());
    assert_eq!(tokenize("!!! ... ---"), Vec::<String>::new());
  }

  #[test]
  fn test_tokenize_is_deterministic() {
    let text = "A dog chasing two cats.";
    assert_eq!(tokenize(text), tokenize(text));
  }

  #[test]
  fn test_retokenizing_joined_output_is_stable() {
    let tokens = tokenize("Cat's, dogs! I can't see.");
    assert_eq!(tokenize(&tokens.join(" ")), tokens);
  }
}
