//! Error types for the upload step.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an upload.
///
/// A non-success HTTP status is not one of them; it is reported through
/// [`UploadOutcome`](crate::UploadOutcome).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UploadError {
    /// No response arrived within the configured time bound.
    #[error("request timed out after {timeout_secs} seconds")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Connection failed or the response could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// Envelope could not be encoded as JSON.
    #[error("failed to serialize import envelope: {0}")]
    Serialize(String),

    /// Endpoint is not an absolute http(s) URL.
    #[error("invalid endpoint '{url}': {reason}")]
    InvalidEndpoint {
        /// Configured endpoint text.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Upload configuration file could not be loaded.
    #[error("invalid upload config {path}: {message}")]
    Config {
        /// Config file path.
        path: PathBuf,
        /// Read or parse failure.
        message: String,
    },
}

impl UploadError {
    /// Returns a short operator-facing message.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Timeout { .. } => {
                "The import server did not answer in time. The import may still be running remotely."
            }
            Self::Network(_) => "Could not reach the import server. Check the endpoint and network.",
            Self::Serialize(_) => "The records could not be encoded for upload.",
            Self::InvalidEndpoint { .. } | Self::Config { .. } => {
                "The upload configuration is invalid."
            }
        }
    }

    /// Whether the failure happened on the wire.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Network(_))
    }
}

impl From<serde_json::Error> for UploadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}

/// Result type alias for upload operations.
pub type Result<T> = std::result::Result<T, UploadError>;
