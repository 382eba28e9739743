//! Storage record models for the persistence layer.

use serde::{Deserialize, Serialize};

/// Current on-disk format version.
pub const CURRENT_VERSION: u32 = 1;

/// Persisted client preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientStateRecord {
    /// Version of the storage format for future migrations.
    pub version: u32,

    /// Whether the welcome banner has been dismissed.
    #[serde(default)]
    pub hide_welcome: bool,

    /// Unix timestamp of the dismissal, `None` while the banner is shown.
    #[serde(default)]
    pub dismissed_at: Option<i64>,
}

impl Default for ClientStateRecord {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            hide_welcome: false,
            dismissed_at: None,
        }
    }
}

impl ClientStateRecord {
    /// Returns the dismissal time as a UTC datetime, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use huelio_console::storage::ClientStateRecord;
    ///
    /// let record = ClientStateRecord {
    ///     hide_welcome: true,
    ///     dismissed_at: Some(0),
    ///     ..ClientStateRecord::default()
    /// };
    /// assert_eq!(record.dismissed_at_utc().unwrap().to_rfc3339(), "1970-01-01T00:00:00+00:00");
    /// ```
    #[must_use]
    pub fn dismissed_at_utc(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.dismissed_at
            .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
    }
}
