//! Error types for the tvgrid-protocol crate.
//!
//! This module defines all error types that can occur when working with
//! protocol types, including serialization failures and validation errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::channel::ChannelId;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Failed to serialize a protocol type to JSON.
    #[error("failed to serialize to JSON: {0}")]
    SerializationFailed(#[source] serde_json::Error),

    /// Failed to deserialize a protocol type from JSON.
    #[error("failed to deserialize from JSON: {0}")]
    DeserializationFailed(#[source] serde_json::Error),

    /// Failed to read a schedule file.
    #[error("failed to read schedule file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a schedule file.
    #[error("failed to write schedule file at {path}: {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A programme refers to a channel the schedule does not know.
    #[error("programme {title:?} refers to unknown channel {channel}")]
    UnknownChannel {
        /// Title of the offending programme.
        title: String,
        /// The unknown channel id.
        channel: ChannelId,
    },

    /// A programme is malformed.
    #[error("invalid programme {title:?}: {reason}")]
    InvalidProgramme {
        /// Title of the offending programme.
        title: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A time of day could not be parsed.
    #[error("invalid time of day {0:?}: expected HH:MM")]
    InvalidTimeOfDay(String),
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ProtocolError::InvalidTimeOfDay("25:99".to_string());
        assert_eq!(err.to_string(), "invalid time of day \"25:99\": expected HH:MM");

        let err = ProtocolError::UnknownChannel {
            title: "News".to_string(),
            channel: 42,
        };
        assert!(err.to_string().contains("unknown channel 42"));
    }
}
