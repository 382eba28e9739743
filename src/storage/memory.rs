//! In-memory storage backend.

use crate::domain::error::Result;
use crate::storage::backend::ClientStore;
use crate::storage::models::ClientStateRecord;
use std::sync::{Arc, Mutex, PoisonError};

/// Keeps client state in memory only.
///
/// Clones share the same record, so a test can hand one clone to the runtime
/// and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Arc<Mutex<ClientStateRecord>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current record.
    #[must_use]
    pub fn snapshot(&self) -> ClientStateRecord {
        self.record.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl ClientStore for MemoryStore {
    fn load(&self) -> Result<ClientStateRecord> {
        Ok(self.snapshot())
    }

    fn set_welcome_dismissed(&mut self, at: i64) -> Result<()> {
        let mut record = self.record.lock().unwrap_or_else(PoisonError::into_inner);
        record.hide_welcome = true;
        record.dismissed_at = Some(at);
        Ok(())
    }
}
