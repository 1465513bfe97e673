//! Tests for error reporting and CLI flags.

use crate::support::*;

#[test]
fn test_help_flag() {
    let t = Test::new();

    let output = t.run(&["--help"]);
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("awsenv") || out.contains("Usage"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.run(&["--version"]);
    assert_success(&output);
    assert!(stdout(&output).contains("awsenv"));
}

#[test]
fn test_extra_positional_rejected() {
    let t = Test::new();

    let output = t.run(&["prod", "test"]);
    assert_failure(&output);
}

#[test]
fn test_errors_exit_with_status_one() {
    let t = Test::new();

    let output = t.run(&["nowhere"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_error_is_marked_on_stderr() {
    let t = Test::new();

    let output = t.run(&["nowhere"]);
    assert_stderr_contains(&output, "✗ unknown environment: nowhere");
    assert_stderr_contains(&output, "→ ");
}
