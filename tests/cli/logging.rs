//! Logging tests.
//!
//! Logs must never reach stdout, which callers `eval`.

use crate::support::*;

#[test]
fn test_verbose_logs_go_to_stderr() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--verbose", "prod"])
        .env("IDENTITYORACLE_ENV", SIMPLE_PAYLOAD)
        .output()
        .unwrap();
    assert_exports(&output, SIMPLE_EXPORTS);
    assert_stderr_contains(&output, "using injected secret payload");
}

#[test]
fn test_default_no_log_output() {
    let t = Test::new();

    let output = t.with_override(SIMPLE_PAYLOAD, None);
    assert_success(&output);

    let err = stderr(&output);
    assert!(
        !err.contains("DEBUG") && !err.contains("INFO"),
        "Default mode should not show debug/info output, got: {}",
        err
    );
}

#[test]
fn test_log_env_var() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("AWSENV_LOG", "awsenv=debug")
        .env("IDENTITYORACLE_ENV", SIMPLE_PAYLOAD)
        .output()
        .unwrap();
    assert_exports(&output, SIMPLE_EXPORTS);
    assert_stderr_contains(&output, "environment resolved");
}

#[test]
fn test_secret_values_are_not_logged() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("AWSENV_LOG", "awsenv=trace")
        .env("IDENTITYORACLE_ENV", r#"{"TOKEN":"s3cr3t-value"}"#)
        .output()
        .unwrap();
    assert_exports(&output, "export TOKEN=s3cr3t-value");
    assert!(!stderr(&output).contains("s3cr3t-value"));
}
