//! Unified error types for chatscan.
//!
//! Two layers of failure exist:
//!
//! - [`ChatscanError`] is returned from fallible library calls (reading a
//!   file, decoding the buffer, writing output, building a flagger).
//! - [`TimestampError`] is never returned with `?`. It is attached to the
//!   single [`ChatEvent`](crate::ChatEvent) whose header could not be dated,
//!   so one malformed line never aborts the rest of the transcript.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatscan operations.
///
/// # Example
///
/// ```rust
/// use chatscan::error::Result;
/// use chatscan::ChatEvent;
///
/// fn my_function() -> Result<Vec<ChatEvent>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatscanError>;

/// The error type for all chatscan operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatscanError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The transcript or a word list doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input buffer is not valid UTF-8.
    ///
    /// This is the only way a transcript itself can fail to parse.
    #[error("UTF-8 encoding error in {context}{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The file path, if available
        path: Option<PathBuf>,
        /// The underlying UTF-8 error
        #[source]
        source: std::str::Utf8Error,
    },

    /// A value doesn't match the expected structure.
    ///
    /// Raised for unknown output file extensions and disabled output features.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date in a selector.
    ///
    /// Date ranges expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A word list could not be compiled into a matcher.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ChatscanError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatscanError::Utf8 {
            context: "output conversion".to_string(),
            path: None,
            source: err.utf8_error(),
        }
    }
}

impl ChatscanError {
    /// Creates a decode error for a transcript buffer.
    pub fn transcript_utf8(source: std::str::Utf8Error, path: Option<PathBuf>) -> Self {
        ChatscanError::Utf8 {
            context: "transcript".to_string(),
            path,
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatscanError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatscanError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatscanError::Io(_))
    }

    /// Returns `true` if the input could not be decoded.
    pub fn is_utf8(&self) -> bool {
        matches!(self, ChatscanError::Utf8 { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatscanError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatscanError::InvalidDate { .. })
    }
}

/// A header matched the lexical pattern but is not a real calendar instant.
///
/// Carries the original header text and chrono's description of what went
/// wrong, e.g. `31/04/24, 10:00 am - ` → "input is out of range".
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize)]
#[error("unparsable timestamp '{}': {reason}", header.trim_end())]
pub struct TimestampError {
    /// The header exactly as it appeared in the transcript.
    pub header: String,
    /// Parser description of the failure.
    pub reason: String,
}

impl TimestampError {
    pub fn new(header: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            reason: reason.into(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
