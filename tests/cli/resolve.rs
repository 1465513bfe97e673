//! Tests for environment argument handling.

use crate::support::*;

#[test]
fn test_known_environments_resolve() {
    let t = Test::new();

    for env in ["prod", "test", "dev", "default"] {
        let output = t.with_override(SIMPLE_PAYLOAD, Some(env));
        assert_exports(&output, SIMPLE_EXPORTS);
    }
}

#[test]
fn test_quoted_environment_matches_plain() {
    let t = Test::new();

    let quoted = t.with_override(SIMPLE_PAYLOAD, Some("\"prod\""));
    let plain = t.with_override(SIMPLE_PAYLOAD, Some("prod"));
    assert_success(&quoted);
    assert_eq!(stdout(&quoted), stdout(&plain));
}

#[test]
fn test_empty_environment_uses_default() {
    let t = Test::new();

    let output = t.with_override(SIMPLE_PAYLOAD, Some(""));
    assert_exports(&output, SIMPLE_EXPORTS);
}

#[test]
fn test_unknown_environment_fails_before_fetch() {
    let t = Test::new();

    // No override and no credentials: reaching the store would fail with a
    // fetch error, so the message proves the lookup failed first.
    let output = t.run(&["staging"]);
    assert_failure(&output);
    assert_stdout_empty(&output);
    assert_stderr_contains(&output, "unknown environment: staging");
    assert!(!stderr(&output).contains("secret fetch failed"));
}

#[test]
fn test_environment_is_case_sensitive() {
    let t = Test::new();

    let output = t.run(&["PROD"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown environment: PROD");
}
