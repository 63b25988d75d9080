//! Error types for the PMS core
//!
//! The core itself never errors for "not found" or "not yet computable"
//! conditions; those are signaled with absent results. Errors are reserved
//! for configuration, I/O, and serialization failures at the boundary.

use thiserror::Error;

/// Errors raised at the configuration and I/O boundary
#[derive(Debug, Error)]
pub enum PmsError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    Configuration(String),

    /// Configuration file does not exist
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file has an unsupported extension
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PmsError {
    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

impl From<String> for PmsError {
    fn from(s: String) -> Self {
        PmsError::Configuration(s)
    }
}

/// Result type for PMS boundary operations
pub type PmsResult<T> = Result<T, PmsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PmsError::configuration("bad percentage");
        assert_eq!(err.to_string(), "Configuration validation failed: bad percentage");

        let err = PmsError::FileNotFound("missing.json".to_string());
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_from_string() {
        let err: PmsError = "discount out of range".to_string().into();
        assert!(matches!(err, PmsError::Configuration(_)));
    }
}
