//! Logging configuration with rotation support
//!
//! Usually driven from the `logging` section of
//! [`StoreConfig`](crate::config::StoreConfig):
//!
//! ```yaml
//! logging:
//!   directory: logs
//!   filename_prefix: authstore.log
//!   level: debug
//! ```
//!
//! # Example
//!
//! ```no_run
//! use authstore_core::logging::init_logging;
//!
//! init_logging("logs", "authstore.log", "info").unwrap();
//! ```

use serde::{Deserialize, Serialize};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Where and how verbosely store activity is logged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Directory for rotated log files
    pub directory: String,
    /// Log file prefix
    pub filename_prefix: String,
    /// Default level when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: "logs".to_string(),
            filename_prefix: "authstore.log".to_string(),
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Install the global subscriber described by this config
    pub fn init(&self) -> Result<()> {
        init_logging(&self.directory, &self.filename_prefix, &self.level)
    }
}

/// Install a global subscriber logging to stdout and a daily rotated file
///
/// Fails if a global subscriber is already set.
pub fn init_logging(directory: &str, filename_prefix: &str, level: &str) -> Result<()> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(filename_prefix)
        .build(directory)
        .map_err(|e| Error::Internal(format!("Failed to create log appender in {}: {}", directory, e)))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .with(fmt::layer().with_writer(file_appender).with_ansi(false))
        .try_init()
        .map_err(|e| Error::Internal(format!("Failed to init tracing: {}", e)))?;

    tracing::debug!(directory, filename_prefix, "Store logging initialized");
    Ok(())
}
