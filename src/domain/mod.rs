//! Domain layer for the huelio console.
//!
//! This module contains the core domain types, independent of the terminal,
//! the HTTP transport, or storage concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`candidate`]: Candidate actions returned by the backend and the result set
//!   that holds them
//!
//! # Examples
//!
//! ```
//! use huelio_console::domain::{ResultSet, Result};
//!
//! fn parse_response(body: &[u8]) -> Result<ResultSet> {
//!     ResultSet::from_json(body)
//! }
//!
//! assert!(parse_response(b"[]").unwrap().is_empty());
//! ```

pub mod candidate;
pub mod error;

pub use candidate::{ActionPayload, Candidate, CandidateKind, Directive, ResultSet, Subject, Toggle};
pub use error::{ConsoleError, Result};
