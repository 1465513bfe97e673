//! Error types for awsenv.
//!
//! Every variant is fatal: nothing is recovered locally, and the binary
//! reports the error on stderr before exiting non-zero.

use thiserror::Error;

use crate::core::store::FetchError;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// The environment identifier has no entry in the environment map.
    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),

    /// The secret store rejected or failed the request.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Secret content is present but not a JSON object.
    #[error("malformed secret payload: {0}")]
    MalformedPayload(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The environment map has no entry for the default token.
    #[error("environment map has no entry for default environment '{0}'")]
    MissingDefault(String),

    #[error("region must not be empty")]
    EmptyRegion,
}

pub type Result<T> = std::result::Result<T, Error>;
