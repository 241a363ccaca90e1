//! Unified error types for chatexport.
//!
//! Every fallible operation in the crate returns [`ExportError`]. The three
//! domain conditions ([`EmptyInput`](ExportError::EmptyInput),
//! [`MalformedInput`](ExportError::MalformedInput) and
//! [`InvalidSelection`](ExportError::InvalidSelection)) are distinct variants
//! so callers can tell them apart; I/O and JSON failures are wrapped
//! unchanged.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatexport operations.
///
/// # Example
///
/// ```rust
/// use chatexport::error::Result;
/// use chatexport::Conversation;
///
/// fn load() -> Result<Conversation> {
///     Ok(Conversation::new("Empty", Vec::new()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ExportError>;

/// The error type for all chatexport operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    /// The transcript has no content at all, not even a name line.
    #[error("Transcript is empty: expected a conversation name on the first line")]
    EmptyInput,

    /// A message line could not be split into timestamp, sender and content.
    #[error("Malformed transcript line {line}: {reason}")]
    MalformedInput {
        /// 1-based line number within the transcript (the name is line 1).
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// The requested combination of transformation modes is contradictory
    /// or one of its parameters is unusable.
    #[error("Invalid selection: {reason}")]
    InvalidSelection {
        /// Description of the rejected combination.
        reason: String,
    },

    /// The output destination does not have a `.json` extension.
    #[error("Incorrect file extension for output '{path}': expected '.json'")]
    InvalidOutputPath {
        /// The rejected path.
        path: String,
    },

    /// An I/O error occurred while reading the transcript or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ExportError {
    /// Creates a malformed-line error.
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        ExportError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    /// Creates an invalid selection error.
    pub fn invalid_selection(reason: impl Into<String>) -> Self {
        ExportError::InvalidSelection {
            reason: reason.into(),
        }
    }

    /// Creates an invalid output path error.
    pub fn invalid_output_path(path: impl Into<String>) -> Self {
        ExportError::InvalidOutputPath { path: path.into() }
    }

    /// Returns `true` if the transcript had no name line.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, ExportError::EmptyInput)
    }

    /// Returns `true` if a transcript line could not be parsed.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ExportError::MalformedInput { .. })
    }

    /// Returns `true` if the mode selection was rejected.
    pub fn is_invalid_selection(&self) -> bool {
        matches!(self, ExportError::InvalidSelection { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ExportError::Io(_))
    }
}
