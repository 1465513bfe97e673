//! Secret store backends.
//!
//! A store answers one question: what is the content of secret `id` in
//! `region`. Every failure is reported as a [`FetchError`] whose kind is
//! drawn from a closed set; callers never retry.
//!
//! ## Backends
//!
//! - **aws**: AWS Secrets Manager via the AWS SDK.

use std::fmt;
use thiserror::Error;

pub mod aws;

pub use aws::SecretsManager;

/// Successful response from a secret store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretResponse {
    /// String-form secret content, if the secret has one.
    pub secret_string: Option<String>,
}

impl SecretResponse {
    /// Response carrying string content.
    pub fn with_string(content: impl Into<String>) -> Self {
        Self {
            secret_string: Some(content.into()),
        }
    }
}

/// Remote secret store.
pub trait SecretStore {
    /// Fetch the secret `secret_id` from `region`.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` for every failure, classified by kind.
    fn fetch(&self, secret_id: &str, region: &str) -> Result<SecretResponse, FetchError>;

    /// Backend name for logging.
    fn name(&self) -> &'static str;
}

/// Failure classes a store fetch can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    /// The store could not decrypt the secret with its key.
    DecryptionFailure,
    /// Server-side failure.
    InternalServiceError,
    /// A request parameter had an invalid value.
    InvalidParameter,
    /// A parameter is not valid for the current state of the resource.
    InvalidRequestState,
    /// The secret does not exist.
    ResourceNotFound,
    /// The credentials were not recognized.
    InvalidCredentials,
    /// Anything else, including transport failures.
    Unclassified,
}

impl FetchErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [FetchErrorKind; 7] = [
        Self::DecryptionFailure,
        Self::InternalServiceError,
        Self::InvalidParameter,
        Self::InvalidRequestState,
        Self::ResourceNotFound,
        Self::InvalidCredentials,
        Self::Unclassified,
    ];

    /// Classify a service error code.
    ///
    /// Both the bare and the `Exception`-suffixed spellings are accepted
    /// where the service has used both.
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("DecryptionFailure" | "DecryptionFailureException") => Self::DecryptionFailure,
            Some("InternalServiceError" | "InternalServiceErrorException") => {
                Self::InternalServiceError
            }
            Some("InvalidParameterException") => Self::InvalidParameter,
            Some("InvalidRequestException") => Self::InvalidRequestState,
            Some("ResourceNotFoundException") => Self::ResourceNotFound,
            Some("UnrecognizedClientException") => Self::InvalidCredentials,
            _ => Self::Unclassified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DecryptionFailure => "decryption failure",
            Self::InternalServiceError => "internal service error",
            Self::InvalidParameter => "invalid parameter",
            Self::InvalidRequestState => "invalid request for current resource state",
            Self::ResourceNotFound => "resource not found",
            Self::InvalidCredentials => "invalid credentials",
            Self::Unclassified => "unclassified error",
        }
    }
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed fetch, carrying the store's own code and message unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("secret fetch failed ({kind}){}: {message}", code_suffix(.code))]
pub struct FetchError {
    pub kind: FetchErrorKind,
    /// Service error code, when the store returned one.
    pub code: Option<String>,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FetchErrorKind, code: Option<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code,
            message: message.into(),
        }
    }

    /// Build an error from a service code, classifying it.
    pub fn from_code(code: Option<&str>, message: impl Into<String>) -> Self {
        Self::new(
            FetchErrorKind::from_code(code),
            code.map(str::to_string),
            message,
        )
    }
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_deref()
        .map(|c| format!(" [{}]", c))
        .unwrap_or_default()
}
