//! Error types for perfumario-core

use thiserror::Error;

/// Result type alias using perfumario-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in perfumario-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid construction-time or runtime configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// libSQL error
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Offline mode requested data that was never cached
    #[error("No cached data available offline for {0}")]
    Offline(String),
}

impl Error {
    /// Whether a failed request is worth retrying.
    ///
    /// Transport failures and server-side (5xx) responses are transient;
    /// client errors are not.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(error) => !error.is_builder() && !error.is_decode(),
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
