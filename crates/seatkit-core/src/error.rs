//! Error handling for SeatKit.
//!
//! Two failure families exist in this subsystem:
//! - Validation errors: recoverable, surfaced to the operator as inline
//!   messages (bad category ids, empty canvas, blank venue name).
//! - Layout errors: a persisted layout record that cannot be parsed;
//!   callers recover by falling back to an empty layout.
//!
//! All error types use `thiserror`. Nothing in this taxonomy is fatal.

use thiserror::Error;

/// Validation error type
///
/// Raised by category and save-time validation. Always recoverable:
/// the in-memory state is untouched when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Category id does not match `^[A-Z_][A-Z0-9_]*$`
    #[error("Invalid category id '{id}': use uppercase letters, digits, and underscores")]
    InvalidCategoryId {
        /// The rejected id.
        id: String,
    },

    /// Category id already exists
    #[error("Category '{id}' already exists")]
    DuplicateCategoryId {
        /// The conflicting id.
        id: String,
    },

    /// Referenced category does not exist
    #[error("Unknown category '{id}'")]
    UnknownCategory {
        /// The missing id.
        id: String,
    },

    /// Refusing to save a layout with no elements
    #[error("Cannot save an empty layout: place at least one element")]
    EmptyCanvas,

    /// Refusing to save without a venue display name
    #[error("Venue name must not be blank")]
    BlankVenueName,
}

/// Layout parse error type
///
/// Represents a persisted layout record that could not be decoded.
/// Callers log and fall back to an empty layout rather than failing.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The stored string was not valid JSON
    #[error("Malformed layout JSON: {source}")]
    MalformedJson {
        /// The underlying decode error.
        #[from]
        source: serde_json::Error,
    },

    /// The JSON decoded but did not have the layout record shape
    #[error("Layout record has unexpected shape: {reason}")]
    UnexpectedShape {
        /// What was wrong with the record.
        reason: String,
    },
}

/// Main error type for SeatKit
///
/// A unified error type covering both families plus I/O at the file
/// boundary. This is the error used in public fallible APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Layout parse error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a recoverable validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
