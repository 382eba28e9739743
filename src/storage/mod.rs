//! Storage layer for persisted client state.
//!
//! The console persists a single preference: whether the welcome banner has
//! been dismissed. It is read once at startup and written at most once per
//! session, from the submission-success path.
//!
//! # Modules
//!
//! - `backend`: [`ClientStore`] trait abstraction
//! - `json`: JSON file implementation with atomic writes
//! - `memory`: In-memory implementation for tests and for runs without a data directory
//! - `models`: Storage record types

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::ClientStore;
pub use json::JsonStore;
pub use memory::MemoryStore;
pub use models::ClientStateRecord;
