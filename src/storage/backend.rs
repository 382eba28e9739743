//! Storage backend abstraction.
//!
//! [`ClientStore`] is deliberately tiny: it maps one-to-one onto what the
//! runtime needs at startup and after the third successful submission.

use crate::domain::error::Result;
use crate::storage::models::ClientStateRecord;

/// Abstraction over persisted client state.
///
/// # Implementations
///
/// - [`JsonStore`](crate::storage::JsonStore): JSON file with atomic writes (default)
/// - [`MemoryStore`](crate::storage::MemoryStore): process-local, for tests
///
/// # Examples
///
/// ```no_run
/// use huelio_console::storage::{ClientStore, JsonStore};
/// use std::path::PathBuf;
///
/// let mut store = JsonStore::new(PathBuf::from("/tmp/huelio/state.json"));
/// if !store.load()?.hide_welcome {
///     store.set_welcome_dismissed(chrono::Utc::now().timestamp())?;
/// }
/// # Ok::<(), huelio_console::ConsoleError>(())
/// ```
pub trait ClientStore: Send {
    /// Reads the persisted state, or the defaults if nothing was stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if stored state exists but cannot be read or parsed.
    fn load(&self) -> Result<ClientStateRecord>;

    /// Persists that the welcome banner was dismissed at unix time `at`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn set_welcome_dismissed(&mut self, at: i64) -> Result<()>;
}
