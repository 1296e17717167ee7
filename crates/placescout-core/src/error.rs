//! Error types for placescout.

use thiserror::Error;

/// Result type alias using placescout's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for placescout operations.
#[derive(Error, Debug)]
pub enum Error {
    /// An upstream location source failed: network error, non-2xx status,
    /// or a payload that did not match the expected shape.
    #[error("Source unavailable ({source_name}): {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Build a `SourceUnavailable` error for the named source.
    pub fn source_unavailable(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::SourceUnavailable {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// The source name carried by a `SourceUnavailable` error, if any.
    pub fn failed_source(&self) -> Option<&str> {
        match self {
            Error::SourceUnavailable { source_name, .. } => Some(source_name),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
