//! Error types for the huelio console.
//!
//! This module defines the centralized error type [`ConsoleError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented with the
//! `thiserror` crate.
//!
//! Query and submission failures are never fatal: the application layer logs them
//! and keeps the current search state, so the user can recover with the next
//! keystroke or selection.

use thiserror::Error;

/// The main error type for console operations.
///
/// # Examples
///
/// ```
/// use huelio_console::ConsoleError;
///
/// fn validate_base_url(url: &str) -> Result<(), ConsoleError> {
///     if url.is_empty() {
///         return Err(ConsoleError::Config("base URL is empty".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_base_url("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Network or connectivity failure while talking to the backend.
    ///
    /// Raised for both the query and the command endpoint. A query that comes
    /// back with a non-success status is also reported here.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The query endpoint returned a body that is not a valid candidate list.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The command endpoint answered with a non-success status.
    #[error("Submission rejected ({status}): {message}")]
    SubmissionRejected {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Message from the backend error body, or the status reason.
        message: String,
    },

    /// Persisted client state could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or terminal I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

impl From<reqwest::Error> for ConsoleError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// A specialized `Result` type for console operations.
pub type Result<T> = std::result::Result<T, ConsoleError>;
