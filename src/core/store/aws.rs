//! AWS Secrets Manager backend.
//!
//! Each fetch opens its own session. When both `AWS_ACCESS_KEY_ID` and
//! `AWS_SECRET_ACCESS_KEY` are set they are used as static credentials;
//! otherwise the SDK's default provider chain (profiles, instance roles,
//! etc.) decides whether a request can be authenticated.

use aws_sdk_secretsmanager::config::{Credentials, Region};
use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;
use tracing::{debug, trace};

use super::{FetchError, FetchErrorKind, SecretResponse, SecretStore};
use crate::core::constants;

const CREDENTIALS_PROVIDER: &str = "awsenv-environment";

/// AWS Secrets Manager client.
pub struct SecretsManager {
    credentials: Option<StaticCredentials>,
}

struct StaticCredentials {
    access_key_id: String,
    secret_access_key: String,
}

impl std::fmt::Debug for SecretsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretsManager")
            .field(
                "credentials",
                &if self.credentials.is_some() {
                    "static"
                } else {
                    "default-chain"
                },
            )
            .finish()
    }
}

impl SecretsManager {
    /// Create a client using credentials from the process environment.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(constants::ACCESS_KEY_ID_VAR).ok(),
            std::env::var(constants::SECRET_ACCESS_KEY_VAR).ok(),
        )
    }

    /// Create a client from an optional key pair.
    ///
    /// Static credentials are only used when both halves are present.
    pub fn new(access_key_id: Option<String>, secret_access_key: Option<String>) -> Self {
        let credentials = match (access_key_id, secret_access_key) {
            (Some(access_key_id), Some(secret_access_key)) => Some(StaticCredentials {
                access_key_id,
                secret_access_key,
            }),
            _ => None,
        };
        Self { credentials }
    }

    /// Whether static credentials will be used.
    pub fn has_static_credentials(&self) -> bool {
        self.credentials.is_some()
    }
}

impl SecretStore for SecretsManager {
    fn name(&self) -> &'static str {
        "aws-secretsmanager"
    }

    fn fetch(&self, secret_id: &str, region: &str) -> Result<SecretResponse, FetchError> {
        trace!(secret_id, region, "fetching secret from AWS Secrets Manager");

        // Create a tokio runtime for the async AWS SDK
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                FetchError::new(
                    FetchErrorKind::Unclassified,
                    None,
                    format!("failed to create runtime: {}", e),
                )
            })?;

        rt.block_on(async {
            let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(Region::new(region.to_string()));

            if let Some(creds) = &self.credentials {
                debug!("using static credentials from environment");
                loader = loader.credentials_provider(Credentials::new(
                    creds.access_key_id.clone(),
                    creds.secret_access_key.clone(),
                    None,
                    None,
                    CREDENTIALS_PROVIDER,
                ));
            }

            let config = loader.load().await;
            let client = aws_sdk_secretsmanager::Client::new(&config);

            let response = client
                .get_secret_value()
                .secret_id(secret_id)
                .send()
                .await
                .map_err(classify)?;

            debug!(
                has_string = response.secret_string().is_some(),
                version = response.version_id().unwrap_or("-"),
                "secret fetched"
            );

            Ok(SecretResponse {
                secret_string: response.secret_string().map(str::to_string),
            })
        })
    }
}

/// Map an SDK failure onto the fetch taxonomy.
fn classify(err: SdkError<GetSecretValueError>) -> FetchError {
    let message = err
        .message()
        .map(str::to_string)
        .unwrap_or_else(|| DisplayErrorContext(&err).to_string());
    let error = FetchError::from_code(err.code(), message);
    debug!(kind = ?error.kind, code = ?error.code, "secret fetch failed");
    error
}
