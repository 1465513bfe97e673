//! Constants used throughout awsenv.
//!
//! Centralizes built-in defaults and environment variable names.

/// Token used when no environment identifier is given.
pub const DEFAULT_ENVIRONMENT: &str = "default";

/// Region used for every secret lookup unless the config file overrides it.
pub const DEFAULT_REGION: &str = "eu-west-2";

/// Secret bundle shared by all built-in environments.
pub const DEFAULT_SECRET_ID: &str = "identityoracle-config";

/// Built-in environment table.
pub const BUILTIN_ENVIRONMENTS: &[(&str, &str)] = &[
    ("prod", DEFAULT_SECRET_ID),
    ("test", DEFAULT_SECRET_ID),
    ("dev", DEFAULT_SECRET_ID),
    (DEFAULT_ENVIRONMENT, DEFAULT_SECRET_ID),
];

/// Variable holding a pre-injected secret payload.
pub const OVERRIDE_VAR: &str = "IDENTITYORACLE_ENV";

/// AWS access key id variable.
pub const ACCESS_KEY_ID_VAR: &str = "AWS_ACCESS_KEY_ID";

/// AWS secret access key variable.
pub const SECRET_ACCESS_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";

/// Path to a TOML config file replacing the built-in table.
pub const CONFIG_VAR: &str = "AWSENV_CONFIG";

/// Tracing filter directive.
pub const LOG_VAR: &str = "AWSENV_LOG";
