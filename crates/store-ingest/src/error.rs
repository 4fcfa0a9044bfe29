//! Error types for workbook ingestion.

use std::path::PathBuf;
use thiserror::Error;

use crate::layout::HeaderMismatch;

/// Errors that can occur while reading a workbook.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Workbook file does not exist.
    #[error("workbook not found: {path}")]
    FileNotFound { path: PathBuf },

    /// File exists but is not a readable workbook.
    #[error("failed to open workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    // === Sheet Errors ===
    /// Requested sheet is not in the workbook.
    #[error("sheet '{sheet}' not found (available: {})", .available.join(", "))]
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },

    /// Sheet exists but its cells could not be read.
    #[error("failed to read sheet '{sheet}': {message}")]
    SheetRead { sheet: String, message: String },

    // === Layout Errors ===
    /// Sheet has no first row to read headers from.
    #[error("sheet '{sheet}' has no header row")]
    MissingHeaderRow { sheet: String },

    /// Header row does not match the declared column layout.
    #[error(
        "header row of sheet '{sheet}' does not match the store layout: {}",
        describe_mismatches(.mismatches)
    )]
    HeaderMismatch {
        sheet: String,
        mismatches: Vec<HeaderMismatch>,
    },
}

fn describe_mismatches(mismatches: &[HeaderMismatch]) -> String {
    mismatches
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
