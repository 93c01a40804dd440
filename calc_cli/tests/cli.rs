//! Integration tests for the calc_cli binary
//!
//! Runs the real binary with key strings as arguments or on stdin and checks
//! what ends up on the display.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a calc_cli command
fn calc() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("calc_cli").unwrap()
}

// =============================================================================
// ONE-SHOT MODE
// =============================================================================

#[test]
fn test_chained_addition() {
    calc().arg("5+3+2=").assert().success().stdout("10\n");
}

#[test]
fn test_left_to_right() {
    calc().arg("3 + 4 * 2 =").assert().success().stdout("14\n");
}

#[test]
fn test_division_by_zero_then_digit() {
    calc().arg("5/0=").assert().success().stdout("Error\n");
    calc().arg("5/0=7").assert().success().stdout("7\n");
}

#[test]
fn test_leading_minus_is_a_key() {
    // A leading minus is the subtract key, not a flag
    calc().arg("-4=").assert().success().stdout("-4\n");
}

#[test]
fn test_trace_prints_every_key() {
    calc()
        .args(["--trace", "123ccc"])
        .assert()
        .success()
        .stdout("1 -> 1\n2 -> 12\n3 -> 123\n\u{2190} -> 12\n\u{2190} -> 1\n\u{2190} -> 0\n");
}

#[test]
fn test_json_state() {
    calc()
        .args(["--json", "12+3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"display\": \"3\""))
        .stdout(predicate::str::contains("\"pending_operator\": \"Add\""))
        .stdout(predicate::str::contains("\"accumulator\": 12.0"));
}

#[test]
fn test_unknown_key_fails() {
    calc()
        .arg("2^3")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized key"));
}

// =============================================================================
// SETTINGS
// =============================================================================

#[test]
fn test_settings_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "significant_digits": 3 }"#).unwrap();

    calc()
        .arg("--settings")
        .arg(&path)
        .arg("2/3=")
        .assert()
        .success()
        .stdout("0.667\n");
}

#[test]
fn test_invalid_settings_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "max_input_len": 0 }"#).unwrap();

    calc()
        .arg("--settings")
        .arg(&path)
        .arg("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_input_len"));
}

#[test]
fn test_missing_settings_file() {
    calc()
        .args(["--settings", "does-not-exist.json", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading settings"));
}

// =============================================================================
// INTERACTIVE MODE
// =============================================================================

#[test]
fn test_session_over_stdin() {
    calc()
        .write_stdin("12\n+8\n=\n")
        .assert()
        .success()
        .stdout("12\n8\n20\n");
}

#[test]
fn test_session_survives_bad_key() {
    calc()
        .write_stdin("4x5\n+1=\nq\n9\n")
        .assert()
        .success()
        .stdout("4\n5\n")
        .stderr(predicate::str::contains("Unrecognized key"));
}
