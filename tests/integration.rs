//! Integration tests for bruteforge
//!
//! Each test runs the binary inside its own temp directory so that
//! output.txt and error.log never leak between tests.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn bruteforge(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bruteforge").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn lines_of(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_single_domain_alphabetic_length_one() {
    let dir = TempDir::new().unwrap();

    bruteforge(&dir)
        .args(["-a", "-l", "1", "-d", "http://[here].com"])
        .assert()
        .success();

    let lines = lines_of(&dir.path().join("output.txt"));
    assert_eq!(lines.len(), 26);
    assert_eq!(lines[0], "http://a.com");
    assert_eq!(lines[1], "http://b.com");
    assert_eq!(lines[25], "http://z.com");
}

#[test]
fn test_domain_file_interleaves_templates_per_combination() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("domains.txt"),
        "http://[here].com\nhttp://[here].org\n",
    )
    .unwrap();

    bruteforge(&dir)
        .args(["-a", "-l", "1", "-f", "domains.txt"])
        .assert()
        .success();

    let lines = lines_of(&dir.path().join("output.txt"));
    assert_eq!(lines.len(), 52);
    // Templates in load order for each combination, combinations in charset order
    assert_eq!(
        &lines[..4],
        &[
            "http://a.com",
            "http://a.org",
            "http://b.com",
            "http://b.org"
        ]
    );
}

#[test]
fn test_placeholder_replaced_everywhere() {
    let dir = TempDir::new().unwrap();

    bruteforge(&dir)
        .args(["-a", "-l", "1", "-d", "http://[here].[here].com"])
        .assert()
        .success();

    let lines = lines_of(&dir.path().join("output.txt"));
    assert_eq!(lines[0], "http://a.a.com");
}

#[test]
fn test_alphanumeric_charset_covers_digits() {
    let dir = TempDir::new().unwrap();

    bruteforge(&dir)
        .args(["-ad", "-l", "1", "-d", "[here]"])
        .assert()
        .success();

    let lines = lines_of(&dir.path().join("output.txt"));
    assert_eq!(lines.len(), 36);
    assert_eq!(lines[0], "a");
    assert_eq!(lines[26], "0");
    assert_eq!(lines[35], "9");
}

#[test]
fn test_output_appends_across_runs() {
    let dir = TempDir::new().unwrap();
    let args = ["-a", "-l", "1", "-d", "http://[here].com"];

    bruteforge(&dir).args(args).assert().success();
    bruteforge(&dir).args(args).assert().success();

    let lines = lines_of(&dir.path().join("output.txt"));
    assert_eq!(lines.len(), 52);
    assert_eq!(lines[0], "http://a.com");
    assert_eq!(lines[26], "http://a.com");
}

#[test]
fn test_custom_output_file() {
    let dir = TempDir::new().unwrap();

    bruteforge(&dir)
        .args(["-a", "-l", "1", "-d", "[here]", "-o", "urls.txt"])
        .assert()
        .success();

    assert!(dir.path().join("urls.txt").exists());
    assert!(!dir.path().join("output.txt").exists());
}

#[test]
fn test_empty_output_flag_writes_to_stdout() {
    let dir = TempDir::new().unwrap();

    bruteforge(&dir)
        .args(["-a", "-l", "1", "-d", "http://[here].com", "-o", ""])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("http://a.com\n"))
        .stdout(predicate::str::contains("http://z.com\n"));

    assert!(!dir.path().join("output.txt").exists());
}

#[test]
fn test_silent_mode_suppresses_console_output() {
    let dir = TempDir::new().unwrap();

    bruteforge(&dir)
        .args(["-a", "-l", "1", "-d", "http://[here].com", "-o", "", "-silent"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_invalid_length_exits_one_and_logs() {
    let dir = TempDir::new().unwrap();

    for bad in ["0", "-3", "abc"] {
        bruteforge(&dir)
            .args(["-a", "-d", "[here]", "-l", bad])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("Invalid length"));
    }

    let log = fs::read_to_string(dir.path().join("error.log")).unwrap();
    assert_eq!(log.lines().count(), 3);
    assert!(log.contains("invalid length"));
}

#[test]
fn test_missing_mode_prints_usage_without_logging() {
    let dir = TempDir::new().unwrap();

    bruteforge(&dir)
        .args(["-d", "http://[here].com"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("-ad"));

    assert!(!dir.path().join("error.log").exists());
}

#[test]
fn test_missing_domain_source_exits_without_logging() {
    let dir = TempDir::new().unwrap();

    bruteforge(&dir)
        .args(["-a"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("single domain"));

    assert!(!dir.path().join("error.log").exists());
}

#[test]
fn test_unreadable_domain_file_exits_one_and_logs() {
    let dir = TempDir::new().unwrap();

    bruteforge(&dir)
        .args(["-a", "-f", "no-such-file.txt"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Error reading domains"));

    let log = fs::read_to_string(dir.path().join("error.log")).unwrap();
    assert!(log.contains("error reading domains from file"));
}

#[test]
fn test_silent_as_domain_value_does_not_silence_run() {
    let dir = TempDir::new().unwrap();

    // "-silent" here is the -d value, so the run stays audible
    bruteforge(&dir)
        .args(["-a", "-l", "1", "-d", "-silent", "-o", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("-silent"));
}

#[test]
fn test_silent_mode_suppresses_usage_errors() {
    let dir = TempDir::new().unwrap();

    bruteforge(&dir)
        .args(["-silent"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty());
}
