//! Configuration management.
//!
//! The configuration is built once at startup, either from the built-in
//! table or from a TOML file, validated, and never mutated afterwards.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::core::constants;
use crate::core::types::{EnvironmentId, Region, SecretId};
use crate::error::{ConfigError, Result};

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Region used for every secret lookup
    #[serde(default = "default_region")]
    pub region: Region,
    /// Token used when no environment identifier is given
    #[serde(default = "default_environment")]
    pub default_environment: EnvironmentId,
    /// Variable holding a pre-injected secret payload
    #[serde(default = "default_override_var")]
    pub override_var: String,
    /// Map of environment identifiers to secret identifiers
    #[serde(default = "builtin_environments")]
    pub environments: BTreeMap<EnvironmentId, SecretId>,
}

fn default_region() -> Region {
    constants::DEFAULT_REGION.to_string()
}

fn default_environment() -> EnvironmentId {
    constants::DEFAULT_ENVIRONMENT.to_string()
}

fn default_override_var() -> String {
    constants::OVERRIDE_VAR.to_string()
}

fn builtin_environments() -> BTreeMap<EnvironmentId, SecretId> {
    constants::BUILTIN_ENVIRONMENTS
        .iter()
        .map(|(env, secret)| (env.to_string(), secret.to_string()))
        .collect()
}

impl Config {
    /// The built-in configuration.
    pub fn builtin() -> Self {
        Self {
            region: default_region(),
            default_environment: default_environment(),
            override_var: default_override_var(),
            environments: builtin_environments(),
        }
    }

    /// Load configuration from `path`, or the built-in table when `None`.
    ///
    /// Fields omitted from the file take their built-in values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse` if the file
    /// cannot be read or parsed, and a validation error if the result is
    /// inconsistent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
                Self::parse(&contents)?
            }
            None => {
                debug!("using built-in config");
                Self::builtin()
            }
        };

        config.validate()?;

        debug!(
            environments = config.environments.len(),
            region = %config.region,
            "config loaded"
        );

        Ok(config)
    }

    /// Parse configuration from TOML text without validating it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Checks:
    /// - The default token has an entry in the environment map
    /// - The region is not empty
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingDefault` or `ConfigError::EmptyRegion`.
    pub fn validate(&self) -> Result<()> {
        if !self.environments.contains_key(&self.default_environment) {
            return Err(ConfigError::MissingDefault(self.default_environment.clone()).into());
        }

        if self.region.trim().is_empty() {
            return Err(ConfigError::EmptyRegion.into());
        }

        Ok(())
    }
}
