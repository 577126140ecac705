//! Error types for configuration operations.
//!
//! This module defines the error types that can occur during configuration
//! loading, parsing, and validation.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a configuration file.
    #[error("failed to write config file at {path}: {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON5 configuration.
    #[error("failed to parse config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// Failed to serialize configuration to JSON.
    #[error("failed to serialize config: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// Table settings are out of range.
    #[error("invalid table settings: {reason}")]
    InvalidTable {
        /// What is wrong with the settings.
        reason: String,
    },

    /// Guide settings are out of range.
    #[error("invalid guide settings: {reason}")]
    InvalidGuide {
        /// What is wrong with the settings.
        reason: String,
    },
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = ConfigError::InvalidTable {
            reason: "hours must be between 1 and 48, got 0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid table settings: hours must be between 1 and 48, got 0"
        );

        let err = ConfigError::ReadFile {
            path: PathBuf::from("tvgrid.json5"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("failed to read config file at tvgrid.json5"));
    }
}
