//! Keyword matching over tokenized descriptions.

use crate::pluralize::Pluralize;
use crate::types::MatchResult;
use tracing::debug;

/// Matches a keyword against the tokens of a description.
///
/// The keyword may be a single word or a whitespace-delimited phrase.
/// Matching is case-insensitive and compares whole tokens only, so `cat`
/// does not match `catalog`. When the keyword as given is not found, the
/// matcher retries once with the plural form of the whole keyword.
///
/// Both forms are computed up front from the injected [`Pluralize`]
/// instance, which keeps [`KeywordMatcher::matches`] a pure function of
/// the token list.
pub struct KeywordMatcher {
  singular_form: String,
  singular_words: Vec<String>,
  plural_form: String,
  plural_words: Vec<String>,
}

impl KeywordMatcher {
  /// Builds a matcher for `keyword`, lower-casing it once for the run.
  ///
  /// # Arguments
  ///
  /// * `keyword` - The word or phrase to look for.
  /// * `pluralizer` - Supplies the fallback plural form of the keyword.
  pub fn new(keyword: &str, pluralizer: &dyn Pluralize) -> Self {
    let singular_words: Vec<String> = keyword
      .to_lowercase()
      .split_whitespace()
      .map(String::from)
      .collect();
    let singular_form = singular_words.join(" ");
    let plural_form = pluralizer.pluralize(&singular_form);
    let plural_words = plural_form.split_whitespace().map(String::from).collect();

    Self {
      singular_form,
      singular_words,
      plural_form,
      plural_words,
    }
  }

  /// Checks `tokens` for the keyword, falling back to the plural form.
  ///
  /// Never fails: a description without the keyword yields a result with
  /// `found == false` and an empty `matched_form`.
  pub fn matches(&self, tokens: &[String]) -> MatchResult {
    debug!("searching tokens for '{}'", self.singular_form);
    if self.find(&self.singular_words, tokens) {
      return MatchResult::hit(self.singular_form.clone(), false);
    }

    debug!(
      "no match for '{}', retrying with plural form '{}'",
      self.singular_form, self.plural_form
    );
    if self.find(&self.plural_words, tokens) {
      return MatchResult::hit(self.plural_form.clone(), true);
    }

    MatchResult::miss()
  }

  /// Looks for `words` in `tokens` as an exact, consecutive sequence.
  ///
  /// Multi-word keywords anchor at the first occurrence of their first
  /// word only. If the remaining words do not line up behind that anchor,
  /// the attempt fails; later occurrences of the first word are never
  /// tried.
  fn find(&self, words: &[String], tokens: &[String]) -> bool {
    if words.is_empty() {
      return false;
    }
    if words.len() == 1 {
      return tokens.contains(&words[0]);
    }

    let anchor = match tokens.iter().position(|token| *token == words[0]) {
      Some(index) => index,
      None => return false,
    };
    debug!("'{}' anchors the phrase at token {}", words[0], anchor);

    let rest = &words[1..];
    let tail = &tokens[anchor + 1..];
    if tail.len() < rest.len() {
      debug!("phrase anchored at {} runs past the end of the description", anchor);
      return false;
    }

    for (want, got) in rest.iter().zip(tail) {
      if want != got {
        debug!("phrase broken after anchor {}: wanted '{}', found '{}'", anchor, want, got);
        return false;
      }
    }
    true
  }
}
