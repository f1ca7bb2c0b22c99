//! Error types for authstore

use thiserror::Error;

/// Result type alias using authstore's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for authstore
///
/// The base store contract never produces any of these; they exist so that
/// concrete media can surface their own failures through `replace` and friends.
#[derive(Debug, Error)]
pub enum Error {
    // ============ Medium Errors ============
    /// The backing medium rejected an operation (quota exceeded, unavailable, ...)
    #[error("Store medium error: {0}")]
    Medium(String),

    // ============ Notification Errors ============
    /// An observer failed while handling a store event
    #[error("Store observer error: {0}")]
    Observer(String),

    // ============ Configuration Errors ============
    /// Store configuration could not be parsed or is invalid
    #[error("Store configuration error: {0}")]
    Config(String),

    /// Store data could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // ============ System Errors ============
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new medium error
    pub fn medium(msg: impl Into<String>) -> Self {
        Self::Medium(msg.into())
    }

    /// Create a new observer error
    pub fn observer(msg: impl Into<String>) -> Self {
        Self::Observer(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Check if this error came from the backing medium
    pub fn is_medium(&self) -> bool {
        matches!(self, Self::Medium(_) | Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medium_error_display() {
        let err = Error::medium("quota exceeded");
        assert_eq!(err.to_string(), "Store medium error: quota exceeded");
        assert!(err.is_medium());
        assert!(!Error::config("bad kind").is_medium());
    }
}
