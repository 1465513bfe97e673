//! Secret payloads.
//!
//! A payload reaches us in one of two shapes: JSON text that still needs a
//! decode step (the override variable, or a store value that was itself a
//! JSON string), or an already-structured mapping (a store value whose JSON
//! document was an object). Both normalize to the same flat mapping.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// A flat, string-keyed mapping in source order.
pub type SecretMap = Map<String, Value>;

/// Secret content before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum SecretPayload {
    /// JSON text requiring one decode step.
    Text(String),
    /// An already-decoded mapping.
    Structured(SecretMap),
}

impl SecretPayload {
    /// Build a payload from the raw content field of a store response.
    ///
    /// The content is decoded once. An object becomes `Structured`; a JSON
    /// string becomes `Text` and is decoded again during normalization.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedPayload` if the content is not valid JSON or
    /// is neither an object nor a string.
    pub fn from_store_content(content: &str) -> Result<Self> {
        match decode(content)? {
            Value::Object(map) => Ok(Self::Structured(map)),
            Value::String(text) => Ok(Self::Text(text)),
            other => Err(not_a_mapping(&other)),
        }
    }

    /// Normalize into a flat mapping.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedPayload` if text content is not a JSON object.
    pub fn into_map(self) -> Result<SecretMap> {
        match self {
            Self::Structured(map) => Ok(map),
            Self::Text(text) => match decode(&text)? {
                Value::Object(map) => Ok(map),
                other => Err(not_a_mapping(&other)),
            },
        }
    }
}

fn decode(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| Error::MalformedPayload(e.to_string()))
}

fn not_a_mapping(value: &Value) -> Error {
    let kind = match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    Error::MalformedPayload(format!("expected a JSON object, found {}", kind))
}
