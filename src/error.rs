//! Error types for the Jargon library.
//!
//! All fallible operations return [`Result`], whose error type is
//! [`JargonError`].
//!
//! # Examples
//!
//! ```
//! use jargon::error::{JargonError, Result};
//!
//! fn build() -> Result<()> {
//!     Err(JargonError::dictionary("the synonym \"--\" is empty when normalized"))
//! }
//!
//! assert!(build().is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Jargon operations.
#[derive(Error, Debug)]
pub enum JargonError {
    /// I/O errors raised by the underlying text source or output sink.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dictionary construction errors (ambiguous mappings, unreadable files, etc.)
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with JargonError.
pub type Result<T> = std::result::Result<T, JargonError>;

impl JargonError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        JargonError::Dictionary(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        JargonError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        JargonError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        JargonError::Other(msg.into())
    }
}
