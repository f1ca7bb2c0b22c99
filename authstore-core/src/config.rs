//! Store configuration
//!
//! Selects which store the application's session uses.
//!
//! ```yaml
//! kind: ephemeral   # or: base
//! logging:          # optional
//!   level: debug
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::logging::LoggingConfig;
use crate::store::{BaseStore, EphemeralStore, Store};

/// Which store implementation to build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    /// Persists nothing
    Base,
    /// Keeps data in memory
    #[default]
    Ephemeral,
}

/// Configuration for the session store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Store implementation
    pub kind: StoreKind,
    /// Logging setup, if the application wants this crate to install it
    pub logging: Option<LoggingConfig>,
}

impl StoreConfig {
    /// Create config for a store kind
    pub fn new(kind: StoreKind) -> Self {
        Self { kind, logging: None }
    }

    /// Parse config from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse store config: {}", e)))
    }

    /// Load config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!("Loaded store config from {:?}: {:?}", path, config.kind);
        Ok(config)
    }

    /// Build the configured store
    pub fn build(&self) -> Box<dyn Store> {
        match self.kind {
            StoreKind::Base => Box::new(BaseStore::new()),
            StoreKind::Ephemeral => Box::new(EphemeralStore::new()),
        }
    }
}
