//! Core data types for scan runs and match results.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The outcome of checking one description against the keyword.
///
/// A `MatchResult` is produced for every description the matcher sees.
/// Absence of a match is an ordinary value (`found == false`), never an
/// error. Once created it is not mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
  /// Whether the keyword, in any accepted form, occurred in the description.
  pub found: bool,
  /// Whether the match only succeeded after falling back to the plural form.
  pub plural_used: bool,
  /// The exact form that matched (singular or plural, lower-cased). Empty
  /// exactly when `found` is false.
  pub matched_form: String,
}

impl MatchResult {
  /// Creates a successful result for the form that matched.
  pub fn hit(matched_form: impl Into<String>, plural_used: bool) -> Self {
    Self {
      found: true,
      plural_used,
      matched_form: matched_form.into(),
    }
  }

  /// Creates the result for a description that did not contain the keyword.
  pub fn miss() -> Self {
    Self {
      found: false,
      plural_used: false,
      matched_form: String::new(),
    }
  }
}

/// Aggregate counters for one scan run.
///
/// Created when the scan starts, updated only by the scan orchestrator,
/// and returned to the caller once the run finishes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
  /// Total number of image files discovered across all scanned directories.
  pub images_found: usize,
  /// Number of descriptions that contained the keyword.
  pub matches_found: usize,
  /// Wall-clock duration of the whole run.
  pub elapsed: Duration,
}

impl ScanSummary {
  /// Renders the elapsed time for the end-of-run report.
  ///
  /// Runs shorter than a minute are shown as fractional seconds. Longer
  /// runs are broken into whole minutes and seconds, and the seconds
  /// clause is omitted when the remainder is zero.
  pub fn elapsed_display(&self) -> String {
    let secs = self.elapsed.as_secs_f64();
    if secs < 60.0 {
      return format!("{secs:.2} seconds");
    }
    let whole = self.elapsed.as_secs();
    let minutes = whole / 60;
    let seconds = whole % 60;
    let mut out = format!("{} {}", minutes, unit(minutes, "minute"));
    if seconds > 0 {
      out.push_str(&format!(", {} {}", seconds, unit(seconds, "second")));
    }
    out
  }
}

/// Picks the singular or plural unit word for a count.
fn unit(count: u64, word: &str) -> String {
  if count == 1 {
    word.to_string()
  } else {
    format!("{word}s")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn summary_with(elapsed: Duration) -> ScanSummary {
    ScanSummary {
      elapsed,
      ..ScanSummary::default()
    }
  }

  #[test]
  fn test_miss_has_empty_form() {
    let result = MatchResult::miss();
    assert!(!result.found);
    assert!(!result.plural_used);
    assert_eq!(result.matched_form, "");
  }

  #[test]
  fn test_sub_minute_runs_use_fractional_seconds() {
    assert_eq!(
      summary_with(Duration::from_millis(1500)).elapsed_display(),
      "1.50 seconds"
    );
    assert_eq!(
      summary_with(Duration::from_secs(59)).elapsed_display(),
      "59.00 seconds"
    );
  }

  #[test]
  fn test_sixty_seconds_switches_to_minutes() {
    assert_eq!(summary_with(Duration::from_secs(60)).elapsed_display(), "1 minute");
  }

  #[test]
  fn test_zero_second_remainder_is_omitted() {
    assert_eq!(summary_with(Duration::from_secs(120)).elapsed_display(), "2 minutes");
  }

  #[test]
  fn test_minutes_and_seconds_are_pluralized_separately() {
    assert_eq!(
      summary_with(Duration::from_secs(61)).elapsed_display(),
      "1 minute, 1 second"
    );
    assert_eq!(
      summary_with(Duration::from_secs(125)).elapsed_display(),
      "2 minutes, 5 seconds"
    );
  }
}
