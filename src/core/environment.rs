//! Environment resolution.
//!
//! Maps a caller-supplied environment identifier to the secret bundle that
//! holds its configuration.

use std::collections::BTreeMap;
use tracing::{debug, trace};

use crate::core::config::Config;
use crate::core::types::{EnvironmentId, SecretId};
use crate::error::{Error, Result};

/// Resolves environment identifiers against an immutable environment map.
#[derive(Debug, Clone)]
pub struct Resolver {
    environments: BTreeMap<EnvironmentId, SecretId>,
    default_environment: EnvironmentId,
}

impl Resolver {
    /// Create a resolver from a validated configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            environments: config.environments.clone(),
            default_environment: config.default_environment.clone(),
        }
    }

    /// Resolve an environment identifier to its secret identifier.
    ///
    /// Double-quote characters are stripped first, so `"prod"` and `prod`
    /// resolve identically. An absent or empty identifier selects the
    /// default environment.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownEnvironment` if the identifier is not mapped.
    pub fn resolve(&self, arg: Option<&str>) -> Result<&SecretId> {
        let token = normalize(arg).unwrap_or_else(|| self.default_environment.clone());
        trace!(environment = %token, "resolving environment");

        let secret_id = self
            .environments
            .get(&token)
            .ok_or_else(|| Error::UnknownEnvironment(token.clone()))?;

        debug!(environment = %token, secret_id = %secret_id, "environment resolved");
        Ok(secret_id)
    }

    /// Known environment identifiers, sorted.
    pub fn environments(&self) -> impl Iterator<Item = &str> {
        self.environments.keys().map(String::as_str)
    }
}

/// Strip quote artifacts; `None` when nothing usable remains.
fn normalize(arg: Option<&str>) -> Option<EnvironmentId> {
    let token = arg?.replace('"', "");
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
