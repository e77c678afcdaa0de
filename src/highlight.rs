//! Console highlighting for matched descriptions.

use crate::tokenizer::tokenize;

/// ANSI escape that switches the terminal to green text.
pub const GREEN: &str = "\x1b[32m";
/// ANSI escape that resets terminal colors.
pub const RESET: &str = "\x1b[0m";
/// Prefix for the line that echoes a matched description.
pub const MATCH_LINE_PREFIX: &str = "=> ";

/// Re-renders a description with the matched words wrapped in markers.
///
/// The description is split on whitespace so every display-word keeps its
/// original casing and punctuation. A display-word is marked when any of
/// its normalized tokens equals one of the words of the matched keyword
/// form, which is how `"Car."` gets marked for the target `car`. Words
/// are joined back together with single spaces.
pub struct Highlighter {
  start: String,
  reset: String,
}

impl Default for Highlighter {
  fn default() -> Self {
    Self::new()
  }
}

impl Highlighter {
  /// Highlighter using the default green console markers.
  pub fn new() -> Self {
    Self::with_markers(GREEN, RESET)
  }

  /// Highlighter with custom start and reset markers.
  ///
  /// Useful for tests and for consumers writing somewhere other than an
  /// ANSI terminal.
  pub fn with_markers(start: impl Into<String>, reset: impl Into<String>) -> Self {
    Self {
      start: start.into(),
      reset: reset.into(),
    }
  }

  /// Wraps a whole piece of text in the markers.
  ///
  /// Used for the match announcement line so it carries the same markers
  /// as the highlighted words.
  pub fn mark(&self, text: &str) -> String {
    format!("{}{}{}", self.start, text, self.reset)
  }

  /// Formats the match line for a description.
  ///
  /// Returns the line instead of printing it, prefixed with
  /// [`MATCH_LINE_PREFIX`]. `matched_form` is the keyword form reported
  /// by the matcher; comparison against it is case-insensitive.
  pub fn highlight(&self, description: &str, matched_form: &str) -> String {
    let targets = tokenize(matched_form);
    let rendered: Vec<String> = description
      .split_whitespace()
      .map(|word| {
        if is_target(word, &targets) {
          self.mark(word)
        } else {
          word.to_string()
        }
      })
      .collect();

    format!("{}{}", MATCH_LINE_PREFIX, rendered.join(" "))
  }
}

/// True when any normalized token of `word` is one of the target words.
fn is_target(word: &str, targets: &[String]) -> bool {
  tokenize(word)
    .iter()
    .any(|token| targets.contains(token))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn plain() -> Highlighter {
    Highlighter::with_markers("[", "]")
  }

  #[test]
  fn test_single_word_is_marked() {
    let line = plain().highlight("A cat sat down", "cat");
    assert_eq!(line, "=> A [cat] sat down");
  }

  #[test]
  fn test_punctuation_is_preserved_on_marked_words() {
    let line = plain().highlight("The Car. Is red", "car");
    assert_eq!(line, "=> The [Car.] Is red");
  }

  #[test]
  fn test_every_word_of_a_phrase_is_marked() {
    let line = plain().highlight("a big red car parked outside", "red car");
    assert_eq!(line, "=> a big [red] [car] parked outside");
  }

  #[test]
  fn test_phrase_marking_keeps_casing_and_punctuation() {
    let line = plain().highlight("A Red Car.", "red car");
    assert_eq!(line, "=> A [Red] [Car.]");
  }

  #[test]
  fn test_whitespace_runs_collapse_to_single_spaces() {
    let line = plain().highlight("a   cat\n\tsat", "cat");
    assert_eq!(line, "=> a [cat] sat");
  }

  #[test]
  fn test_comparison_is_case_insensitive() {
    let line = plain().highlight("CATS everywhere", "cats");
    assert_eq!(line, "=> [CATS] everywhere");
  }

  #[test]
  fn test_default_markers_are_ansi_green() {
    let line = Highlighter::new().highlight("one cat", "cat");
    assert!(line.starts_with("=> "));
    assert!(line.contains("\x1b[32mcat\x1b[0m"));
  }

  #[test]
  fn test_unmatched_words_are_left_alone() {
    let line = plain().highlight("no dogs here", "cat");
    assert_eq!(line, "=> no dogs here");
  }

  #[test]
  fn test_mark_wraps_whole_text() {
    assert_eq!(plain().mark("Match found!"), "[Match found!]");
  }
}
