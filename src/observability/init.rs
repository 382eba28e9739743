//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "huelio-console.log";

/// Resolves the filter directive from `RUST_LOG`, the config, or the default.
#[must_use]
pub fn filter_directive(rust_log: Option<String>, config: &Config) -> String {
    rust_log
        .filter(|v| !v.trim().is_empty())
        .or_else(|| config.trace_level.clone())
        .unwrap_or_else(|| "info".to_string())
}

/// Initializes the tracing subscriber writing to `<log_dir>/huelio-console.log`.
///
/// # Returns
///
/// The log file path, or `None` if the directory could not be created or a
/// global subscriber was already installed. Logging is optional: the console
/// runs without it.
///
/// # Example
///
/// ```rust,no_run
/// use huelio_console::observability::init_tracing;
/// use huelio_console::Config;
///
/// let config = Config { trace_level: Some("debug".to_string()), ..Default::default() };
/// if let Some(path) = init_tracing(&config, std::path::Path::new("/tmp/huelio")) {
///     tracing::debug!(path = %path.display(), "tracing is now active");
/// }
/// ```
pub fn init_tracing(config: &Config, log_dir: &Path) -> Option<PathBuf> {
    if std::fs::create_dir_all(log_dir).is_err() {
        return None;
    }

    let directive = filter_directive(std::env::var("RUST_LOG").ok(), config);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let log_file = log_dir.join(LOG_FILE_NAME);
    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(FileWriter::new(log_file.clone()));

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .ok()?;

    Some(log_file)
}
