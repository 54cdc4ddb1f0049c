//! Persisted MCP configuration store.
//!
//! Wraps a storage backend with the load/save/reset cycle for the
//! single `"mcp"` record. Load never fails: missing or malformed
//! storage falls back to the default record. Save parses before it
//! writes, so invalid text can never clobber the persisted record.

use thiserror::Error;
use tracing::warn;

use crate::config::types::McpConfig;
use crate::storage::{Storage, StorageError};

/// Storage key for the persisted record.
pub const CONFIG_KEY: &str = "mcp";

/// Errors that can occur when saving or resetting the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The edit buffer is not a valid serialized record.
    #[error("Invalid JSON format")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// The storage backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Store for the persisted MCP server record.
///
/// The record is replaced wholesale on save or reset, never partially
/// mutated.
pub struct ConfigStore<S> {
    storage: S,
}

impl<S: Storage> ConfigStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the persisted record.
    ///
    /// Falls back to `McpConfig::default()` when the key is missing,
    /// the backend fails to read, or the stored value does not parse.
    /// Recovered failures are logged at warn level; none reach the
    /// caller.
    pub fn load(&self) -> McpConfig {
        let stored = match self.storage.get(CONFIG_KEY) {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Error loading MCP config: {e}");
                return McpConfig::default();
            }
        };
        let Some(text) = stored else {
            return McpConfig::default();
        };
        match serde_json::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                warn!("Error loading MCP config: {e}");
                McpConfig::default()
            }
        }
    }

    /// Parse `text` as a record and persist it.
    ///
    /// On success the normalized serialization of the parsed record is
    /// written and the record returned. On parse failure the previously
    /// persisted record is left untouched.
    pub fn save(&mut self, text: &str) -> Result<McpConfig, ConfigError> {
        let config: McpConfig =
            serde_json::from_str(text).map_err(|e| ConfigError::Parse { source: e })?;
        self.storage.set(CONFIG_KEY, &config.to_json())?;
        Ok(config)
    }

    /// Clear the persisted record and return the defaults.
    pub fn reset(&mut self) -> Result<McpConfig, ConfigError> {
        self.storage.remove(CONFIG_KEY)?;
        Ok(McpConfig::default())
    }

    /// Access the underlying storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
