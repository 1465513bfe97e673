//! Secret materialization.
//!
//! Turns a secret identifier into a block of shell export statements,
//! either from a pre-injected payload or from one store fetch.

use tracing::{debug, info};

use crate::core::export;
use crate::core::payload::SecretPayload;
use crate::core::store::SecretStore;
use crate::error::Result;

/// Produces export blocks for secret identifiers.
pub struct Materializer<S> {
    store: S,
    override_var: String,
}

impl<S: SecretStore> Materializer<S> {
    /// Create a materializer backed by `store`, honouring `override_var`.
    pub fn new(store: S, override_var: impl Into<String>) -> Self {
        Self {
            store,
            override_var: override_var.into(),
        }
    }

    /// Materialize `secret_id` from `region` as newline-joined export lines.
    ///
    /// If the override variable is set and non-empty its value is used as
    /// the payload and the store is not contacted. Returns `None` when the
    /// store's response has no string content.
    ///
    /// # Errors
    ///
    /// Returns `Error::Fetch` if the store fails, or
    /// `Error::MalformedPayload` if the content is not a JSON object.
    pub fn materialize(&self, secret_id: &str, region: &str) -> Result<Option<String>> {
        let payload = match self.override_payload() {
            Some(payload) => {
                info!(var = %self.override_var, "using injected secret payload");
                payload
            }
            None => {
                debug!(store = self.store.name(), secret_id, region, "fetching secret");
                let response = self.store.fetch(secret_id, region)?;
                match response.secret_string {
                    Some(content) => SecretPayload::from_store_content(&content)?,
                    None => {
                        debug!(secret_id, "secret has no string content, nothing to export");
                        return Ok(None);
                    }
                }
            }
        };

        let secrets = payload.into_map()?;
        debug!(count = secrets.len(), "secret decoded");

        Ok(Some(export::export_block(&secrets)))
    }

    fn override_payload(&self) -> Option<SecretPayload> {
        std::env::var(&self.override_var)
            .ok()
            .filter(|value| !value.is_empty())
            .map(SecretPayload::Text)
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
