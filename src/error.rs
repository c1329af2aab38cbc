//! Error types for secaudit
//!
//! This module defines custom error types using `thiserror` for better error handling
//! and more descriptive error messages throughout the application.
//!
//! Per-file read failures during a scan are deliberately *not* represented here:
//! the scanner skips unreadable files and keeps going. The only fatal conditions
//! are failing to serialize or write an output document.

use thiserror::Error;

/// Main error type for secaudit
#[derive(Error, Debug)]
pub enum SecAuditError {
    /// Failed to write a report or registry document
    #[error("Failed to write report '{path}': {source}")]
    ReportWrite {
        /// Path that could not be written
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to serialize or parse a JSON document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read an SDL state file
    #[error("Failed to read state file '{path}': {source}")]
    StateRead {
        /// Path to the state file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
}
