//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers all error
//! cases in the library. Malformed chat lines are *not* errors: the parser
//! drops them silently and parsing never fails outright. The variants here
//! cover the boundaries where something genuinely has to be reported — I/O,
//! serialization, and the "no data at all" state.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Record;
///
/// fn my_function() -> Result<Vec<Record>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - The file is not valid UTF-8
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Zero records came out of parsing.
    ///
    /// This is the reportable "no data" state: either the input was empty or
    /// no line matched the expected `DD/MM/YYYY, HH:MM - Sender: Body`
    /// format. It is surfaced at the API boundary, never from the parser
    /// itself.
    #[error("no messages found{}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    NoMessages {
        /// The input file path, if the text came from a file
        path: Option<PathBuf>,
    },

    /// JSON serialization error.
    ///
    /// This can occur when writing the report as JSON.
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a "no messages" error, optionally tagged with the input path.
    pub fn no_messages(path: Option<PathBuf>) -> Self {
        ChatlensError::NoMessages { path }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is the empty-result state.
    pub fn is_no_messages(&self) -> bool {
        matches!(self, ChatlensError::NoMessages { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
