//! Smoke tests for the nectar binary

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a command for the nectar binary
fn nectar() -> Command {
    let mut cmd = Command::cargo_bin("nectar").expect("nectar binary should exist");
    cmd.env_remove("RUST_LOG").arg("--color").arg("never");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    nectar()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    nectar()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("repl"))
        .stdout(predicate::str::contains("keypad"));
}

#[test]
fn test_no_args_fails() {
    nectar().assert().failure();
}

// ============================================================================
// eval
// ============================================================================

#[test]
fn test_eval_addition() {
    nectar()
        .args(["eval", "3", "+", "4", "="])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_eval_chained() {
    nectar()
        .args(["eval", "3", "+", "4", "+", "5", "="])
        .assert()
        .success()
        .stdout("12\n");
}

#[test]
fn test_eval_subtraction_key() {
    nectar()
        .args(["eval", "10", "-", "4", "="])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn test_eval_division_by_zero_shows_error_marker() {
    nectar()
        .args(["eval", "10", "/", "0", "="])
        .assert()
        .success()
        .stdout("Error\n");
}

#[test]
fn test_eval_unknown_key_fails() {
    nectar()
        .args(["eval", "2", "^", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_eval_malformed_numeral_fails() {
    nectar()
        .args(["eval", "1.2.3", "+", "1", "="])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1.2.3"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_auto_color_logs_have_no_escapes_when_piped() {
    Command::cargo_bin("nectar")
        .expect("nectar binary should exist")
        .env_remove("RUST_LOG")
        .args(["-vv", "eval", "1", "+", "1", "="])
        .assert()
        .success()
        .stderr(predicate::str::contains("key pressed"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_eval_json() {
    nectar()
        .args(["--format", "json", "eval", "6", "*"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"display\":\"6\""))
        .stdout(predicate::str::contains("\"pending_operator\":\"Multiply\""));
}

#[test]
fn test_eval_show_history() {
    nectar()
        .args(["--show-history", "eval", "2", "*", "3", "+", "1", "="])
        .assert()
        .success()
        .stdout("2 × 3 = 6\n6 + 1 = 7\n7\n");
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    nectar()
        .args(["-vv", "eval", "1", "+", "1", "="])
        .assert()
        .success()
        .stdout("2\n")
        .stderr(predicate::str::contains("key pressed"));
}

// ============================================================================
// repl / keypad
// ============================================================================

#[test]
fn test_repl_reads_stdin() {
    nectar()
        .arg("repl")
        .write_stdin("12 +\n30 =\nquit\n")
        .assert()
        .success()
        .stdout("12\n42\n");
}

#[test]
fn test_repl_reports_bad_line_and_continues() {
    nectar()
        .arg("repl")
        .write_stdin("oops\n5 =\n")
        .assert()
        .success()
        .stdout("5\n")
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn test_keypad_layout() {
    nectar()
        .arg("keypad")
        .assert()
        .success()
        .stdout(predicate::str::contains("[ 7 ] [ 8 ] [ 9 ] [ × ]"));
}
