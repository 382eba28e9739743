//! Terminal entry point.
//!
//! This is the thin integration layer between the huelio-console library and
//! the terminal: it loads configuration, installs logging, opens the persisted
//! client state, puts the terminal into raw mode and hands over to the
//! [`Console`] loop.
//!
//! # Lifecycle
//!
//! 1. **Configure**: Load `config.toml` and `HUELIO_*` overrides
//! 2. **Log**: Install the tracing subscriber writing to the data directory
//! 3. **Open**: Read the welcome flag from the client store
//! 4. **Run**: Enter raw mode and the alternate screen, run the event loop
//! 5. **Restore**: Leave the alternate screen, even on error
//!
//! # Keybindings
//!
//! - Any printable key: edit the search
//! - `Backspace`: delete a character
//! - `Ctrl+u`: clear the search
//! - `Up` / `Down`: move the selection
//! - `Enter`: run the selected candidate
//! - `Esc`: clear the search, or quit when it is empty
//! - `Ctrl+c`: quit

#![allow(clippy::multiple_crate_versions)]

use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use huelio_console::client::HttpBackend;
use huelio_console::infrastructure::get_data_dir;
use huelio_console::runtime::Console;
use huelio_console::storage::{ClientStore, JsonStore, MemoryStore};
use huelio_console::{observability, Config, ConsoleError};
use std::io::{self, Stdout};

/// Restores the terminal when dropped.
struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        Ok(Self { stdout })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, LeaveAlternateScreen, Show);
        let _ = disable_raw_mode();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ConsoleError> {
    let config = Config::load()?;

    let data_dir = get_data_dir();
    if let Some(dir) = &data_dir {
        if let Some(log_file) = observability::init_tracing(&config, dir) {
            tracing::debug!(path = %log_file.display(), "logging to file");
        }
    }

    let backend = HttpBackend::new(&config.base_url, config.request_timeout())?;
    tracing::info!(base_url = %backend.base_url(), "using huelio service");

    match config.state_path() {
        Some(path) => run(&config, backend, JsonStore::new(path)).await,
        None => {
            tracing::warn!("no data directory, welcome banner state will not persist");
            run(&config, backend, MemoryStore::new()).await
        }
    }
}

async fn run<S: ClientStore>(config: &Config, backend: HttpBackend, store: S) -> Result<(), ConsoleError> {
    let record = store.load().unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to read client state, using defaults");
        Default::default()
    });
    if let Some(at) = record.dismissed_at_utc() {
        tracing::debug!(dismissed_at = %at.to_rfc3339(), "welcome banner dismissed earlier");
    }

    let state = huelio_console::initialize(config, record.hide_welcome);
    let mut console = Console::new(state, backend, store);

    let mut guard = TerminalGuard::enter()?;
    let result = console.run(&mut guard.stdout).await;
    drop(guard);

    if let Err(e) = &result {
        tracing::error!(error = %e, "console exited with error");
    }
    result
}
