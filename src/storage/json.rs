//! JSON file-based storage backend.
//!
//! A small, human-readable file using atomic writes (write-to-temp + rename) to
//! prevent corruption on crashes. The file and its parent directory are created
//! lazily on the first write, so a console that never dismisses the banner
//! leaves no trace on disk.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "hide_welcome": true,
//!   "dismissed_at": 1718000000
//! }
//! ```

use crate::domain::error::{ConsoleError, Result};
use crate::storage::backend::ClientStore;
use crate::storage::models::ClientStateRecord;
use std::path::{Path, PathBuf};

/// JSON file storage backend.
#[derive(Debug, Clone)]
pub struct JsonStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,
}

impl JsonStore {
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Saves `record` using an atomic write.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// temporary file cannot be written or renamed.
    fn save(&self, record: &ClientStateRecord) -> Result<()> {
        tracing::debug!(path = ?self.file_path, "saving client state");

        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| ConsoleError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("client state saved");
        Ok(())
    }
}

impl ClientStore for JsonStore {
    fn load(&self) -> Result<ClientStateRecord> {
        let _span = tracing::debug_span!("json_load", path = ?self.file_path).entered();

        if !self.file_path.exists() {
            tracing::debug!("no stored state, using defaults");
            return Ok(ClientStateRecord::default());
        }

        let contents = std::fs::read_to_string(&self.file_path)?;
        let record: ClientStateRecord = serde_json::from_str(&contents)
            .map_err(|e| ConsoleError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = record.version,
            hide_welcome = record.hide_welcome,
            "loaded client state"
        );
        Ok(record)
    }

    fn set_welcome_dismissed(&mut self, at: i64) -> Result<()> {
        let _span = tracing::debug_span!("json_set_welcome_dismissed", at).entered();

        let mut record = self.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "stored state unreadable, overwriting");
            ClientStateRecord::default()
        });
        record.hide_welcome = true;
        record.dismissed_at = Some(at);
        self.save(&record)
    }
}
