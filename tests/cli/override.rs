//! Tests for the injected payload path.

use crate::support::*;

#[test]
fn test_override_prints_exports_in_order() {
    let t = Test::new();

    let output = t.with_override(SIMPLE_PAYLOAD, None);
    assert_exports(&output, SIMPLE_EXPORTS);
}

#[test]
fn test_override_realistic_bundle() {
    let t = Test::new();

    let output = t.with_override(SERVICE_PAYLOAD, Some("prod"));
    assert_exports(&output, SERVICE_EXPORTS);
}

#[test]
fn test_override_preserves_source_order() {
    let t = Test::new();

    let output = t.with_override(r#"{"ZED":"z","ALPHA":"a"}"#, Some("dev"));
    assert_exports(&output, "export ZED=z\nexport ALPHA=a");
}

#[test]
fn test_override_values_are_not_escaped() {
    let t = Test::new();

    let output = t.with_override(r#"{"GREETING":"hello world"}"#, None);
    assert_exports(&output, "export GREETING=hello world");
}

#[test]
fn test_override_empty_mapping_prints_blank_line() {
    let t = Test::new();

    let output = t.with_override("{}", None);
    assert_success(&output);
    assert_eq!(stdout(&output), "\n");
}

#[test]
fn test_override_malformed_json_fails() {
    let t = Test::new();

    let output = t.with_override("{not json", None);
    assert_failure(&output);
    assert_stdout_empty(&output);
    assert_stderr_contains(&output, "malformed secret payload");
}

#[test]
fn test_override_non_object_fails() {
    let t = Test::new();

    let output = t.with_override("[1, 2, 3]", None);
    assert_failure(&output);
    assert_stderr_contains(&output, "expected a JSON object, found an array");
}

#[test]
fn test_override_does_not_bypass_environment_lookup() {
    let t = Test::new();

    let output = t.with_override(SIMPLE_PAYLOAD, Some("staging"));
    assert_failure(&output);
    assert_stdout_empty(&output);
}
