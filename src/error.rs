//! Unified error types for chatscope.
//!
//! This module provides a single [`ChatscopeError`] enum that covers all error
//! cases in the library. This design follows the pattern used by popular crates
//! like `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - A malformed timestamp is always fatal: the parser never silently
//!   returns a partial record set

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatscope operations.
///
/// # Example
///
/// ```rust
/// use chatscope::error::Result;
/// use chatscope::ParsedMessage;
///
/// fn my_function() -> Result<Vec<ParsedMessage>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatscopeError>;

/// The error type for all chatscope operations.
///
/// Each variant contains context about what went wrong and, where applicable,
/// the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatscopeError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A substring matched the timestamp pattern but is not a real
    /// date/time (for example month 13).
    ///
    /// Parsing stops at the first such line: the caller gets the whole
    /// record set or nothing.
    #[error("Invalid timestamp '{input}'. Expected layout: {expected}")]
    InvalidTimestamp {
        /// The matched timestamp text that failed to parse
        input: String,
        /// Human-readable description of the expected layout
        expected: &'static str,
    },

    /// A format name or file extension is not usable.
    ///
    /// This occurs when:
    /// - An output path has an unknown extension
    /// - A timestamp format name doesn't match any known layout
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected (e.g. "output", "timestamp")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// A regular expression failed to build.
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error while converting writer output to a string.
    #[cfg(feature = "csv-output")]
    #[error("UTF-8 error in output conversion: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatscopeError {
    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(input: impl Into<String>, expected: &'static str) -> Self {
        ChatscopeError::InvalidTimestamp {
            input: input.into(),
            expected,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatscopeError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates a pattern error.
    pub fn pattern(message: impl Into<String>) -> Self {
        ChatscopeError::Pattern(message.into())
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatscopeError::Io(_))
    }

    /// Returns `true` if this is an invalid timestamp error.
    pub fn is_invalid_timestamp(&self) -> bool {
        matches!(self, ChatscopeError::InvalidTimestamp { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatscopeError::InvalidFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
