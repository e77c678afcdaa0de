use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd() -> Command {
  Command::cargo_bin("snapgrep").unwrap()
}

#[test]
fn missing_arguments_show_usage() {
  cmd().assert().failure().stderr(contains("Usage"));
}

#[test]
fn help_lists_the_flags() {
  cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(contains("--recurse"))
    .stdout(contains("--debug"))
    .stdout(contains("--api-url"));
}

#[test]
fn missing_directory_is_not_fatal() {
  cmd()
    .args(["definitely/not/a/real/dir", "cat"])
    .assert()
    .success()
    .stdout(contains("started at:"))
    .stdout(contains("Total time taken:"))
    .stdout(contains("Matches found: 0"));
}

#[test]
fn blank_keyword_fails_before_scanning() {
  cmd()
    .args(["some-dir", "   "])
    .assert()
    .failure()
    .stderr(contains("keyword"));
}

#[test]
fn whitespace_directory_fails_before_scanning() {
  cmd()
    .args(["   ", "cat"])
    .assert()
    .failure()
    .stderr(contains("directory"));
}

#[test]
fn empty_directory_reports_zero_images() {
  let dir = TempDir::new().unwrap();
  cmd()
    .arg(dir.path())
    .arg("cat")
    .assert()
    .success()
    .stdout(contains("=== Number of image files found: 0 ==="))
    .stdout(contains("Matches found: 0"));
}
