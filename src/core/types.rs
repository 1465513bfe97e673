//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A caller-supplied environment token (e.g. prod, test, dev).
///
/// Free-form; only checked by lookup in the environment map.
pub type EnvironmentId = String;

/// Name of a secret bundle in the remote store.
pub type SecretId = String;

/// An AWS region name (e.g. eu-west-2).
pub type Region = String;
