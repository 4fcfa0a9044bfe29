//! Error types for the records file.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// Records file does not exist.
    #[error("records file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read or write the file.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not a valid record array.
    #[error("invalid records JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for records file operations.
pub type Result<T> = std::result::Result<T, OutputError>;
