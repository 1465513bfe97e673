//! Shell export formatting.
//!
//! Values are written verbatim: no quoting or escaping is applied, so values
//! containing whitespace, quotes or newlines are not safe to source.
//!
//! String values are written without their JSON quotes. Every other value is
//! rendered as compact JSON: `true`, `null`, `5432`, `[1,2]`, `{"a":1}`.

use serde_json::Value;

use crate::core::payload::SecretMap;

/// Format a single `export KEY=VALUE` line.
pub fn export_line(key: &str, value: &Value) -> String {
    format!("export {}={}", key, render_value(value))
}

/// Format every entry of `secrets` as export lines, newline-joined.
///
/// Entries appear in the mapping's iteration order. No trailing newline.
pub fn export_block(secrets: &SecretMap) -> String {
    secrets
        .iter()
        .map(|(key, value)| export_line(key, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// String values print raw; everything else in compact JSON form.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
