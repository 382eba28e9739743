//! huelio-console: an incremental-search terminal console for the huelio
//! home-lighting service.
//!
//! Type a few letters, pick a candidate, press Enter:
//! - Keystrokes are debounced into at most one search request
//! - Candidates (light/group + on/off, color or scene) are shown as colored crumbs
//! - Arrow keys move a clamped selection, Enter posts the candidate back verbatim
//! - Late responses from superseded searches are discarded
//! - A welcome banner stays until the third successful command

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary (main.rs)                                   │  ← Terminal setup
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime (runtime/)                                 │  ← Event loop
//! │  - Key mapping, debounce timer, spawned requests    │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action emission                                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Client Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (client/)     │
//! │ - Rendering   │   │ - JSON I/O    │   │ - HTTP        │
//! │ - Theming     │   │ - Welcome flag│   │ - Backend API │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Candidate model, errors (domain/)                │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber, rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Read from `$HUELIO_CONFIG` or `<config dir>/huelio/config.toml`
//! (`~/.config/huelio/config.toml` on Linux), all keys optional:
//!
//! ```toml
//! base_url = "http://hue-pi.local:8080/api/"
//! debounce_ms = 150
//! theme = "catppuccin-latte"
//! # theme_file = "~/.config/huelio/theme.toml"
//! trace_level = "debug"
//! state_file = "~/.local/share/huelio/state.json"
//! request_timeout_ms = 5000
//! ```
//!
//! `HUELIO_SERVER_URL`, `HUELIO_THEME` and `HUELIO_LOG` override the file.
//!
//! # Example
//!
//! ```rust
//! use huelio_console::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default(), true);
//! for event in [Event::Char('o'), Event::Char('f'), Event::Char('f')] {
//!     let (_render, actions) = handle_event(&mut state, &event)?;
//!     // Hand actions to the runtime...
//!     assert_eq!(actions.len(), 1);
//! }
//! # Ok::<(), huelio_console::ConsoleError>(())
//! ```

pub mod app;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod runtime;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, ConsoleMode, Event};
pub use domain::{Candidate, ConsoleError, Result, ResultSet};
pub use ui::Theme;

use crate::infrastructure::{expand_tilde, get_config_dir, get_data_dir};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default API root, matching the service's default bind address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/";

/// Default debounce delay in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 150;

/// Console configuration.
///
/// Sources, lowest precedence first: built-in defaults, the TOML file, then
/// `HUELIO_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root URL for both the query and the command endpoint.
    pub base_url: String,

    /// Quiet period after the last keystroke before searching.
    pub debounce_ms: u64,

    /// Built-in theme name.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Log filter directive, e.g. `debug` or `huelio_console=trace`.
    ///
    /// `RUST_LOG` wins when set. Default: `"info"`
    pub trace_level: Option<String>,

    /// Location of the persisted client state.
    ///
    /// Default: `<data dir>/state.json`.
    pub state_file: Option<String>,

    /// Per-request timeout. Unset means no timeout.
    pub request_timeout_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            state_file: None,
            request_timeout_ms: None,
        }
    }
}

impl Config {
    /// Parses a TOML configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Config`] on invalid TOML or unknown keys.
    ///
    /// # Example
    ///
    /// ```rust
    /// use huelio_console::Config;
    ///
    /// let config = Config::from_toml("base_url = \"http://hue-pi:8080/api/\"\ndebounce_ms = 80")?;
    /// assert_eq!(config.debounce_ms, 80);
    /// assert!(config.theme_name.is_none());
    /// # Ok::<(), huelio_console::ConsoleError>(())
    /// ```
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ConsoleError::Config(format!("invalid config: {e}")))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Config`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConsoleError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml(&text)
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `$HUELIO_CONFIG` points at a missing or invalid file,
    /// or if the default config file exists but is invalid.
    pub fn load() -> Result<Self> {
        Self::load_from(|name| std::env::var(name).ok())
    }

    /// [`Config::load`] with an injectable environment lookup.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Self::load_with(lookup, get_config_dir().as_deref())
    }

    fn load_with(lookup: impl Fn(&str) -> Option<String>, config_dir: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(explicit) = lookup("HUELIO_CONFIG").filter(|p| !p.is_empty()) {
            Self::from_file(&expand_tilde(&explicit))?
        } else {
            match config_dir.map(|dir| dir.join("config.toml")) {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => Self::default(),
            }
        };

        config.apply_env(&lookup);
        Ok(config)
    }

    /// Applies `HUELIO_SERVER_URL`, `HUELIO_THEME` and `HUELIO_LOG`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let set = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(url) = set("HUELIO_SERVER_URL") {
            self.base_url = url;
        }
        if let Some(theme) = set("HUELIO_THEME") {
            self.theme_name = Some(theme);
            self.theme_file = None;
        }
        if let Some(level) = set("HUELIO_LOG") {
            self.trace_level = Some(level);
        }
    }

    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }

    /// Resolves where client state is persisted.
    ///
    /// `None` when no `state_file` is configured and the platform has no data
    /// directory.
    #[must_use]
    pub fn state_path(&self) -> Option<PathBuf> {
        match &self.state_file {
            Some(file) => Some(expand_tilde(file)),
            None => get_data_dir().map(|dir| dir.join("state.json")),
        }
    }
}

/// Resolves the configured theme, falling back to the default on any failure.
#[must_use]
pub fn resolve_theme(config: &Config) -> Theme {
    config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    )
}

/// Builds the initial application state.
///
/// `hide_welcome` comes from the persisted client state.
#[must_use]
pub fn initialize(config: &Config, hide_welcome: bool) -> AppState {
    tracing::debug!(base_url = %config.base_url, debounce_ms = config.debounce_ms, "initializing console");

    AppState::new(resolve_theme(config), config.debounce(), hide_welcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_without_any_source() {
        let config = Config::load_with(env(&[]), None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.debounce(), Duration::from_millis(150));
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn file_then_env_precedence() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "base_url = \"http://file:1/api/\"\ntheme = \"catppuccin-latte\"\nrequest_timeout_ms = 2500\n",
        )
        .unwrap();

        let from_file = Config::load_with(env(&[]), Some(dir.path())).unwrap();
        assert_eq!(from_file.base_url, "http://file:1/api/");
        assert_eq!(from_file.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(from_file.request_timeout(), Some(Duration::from_millis(2500)));

        let overridden = Config::load_with(
            env(&[("HUELIO_SERVER_URL", "http://env:2/api/"), ("HUELIO_LOG", "debug")]),
            Some(dir.path()),
        )
        .unwrap();
        assert_eq!(overridden.base_url, "http://env:2/api/");
        assert_eq!(overridden.trace_level.as_deref(), Some("debug"));
        assert_eq!(overridden.theme_name.as_deref(), Some("catppuccin-latte"));
    }

    #[test]
    fn explicit_config_path_must_exist() {
        let err = Config::load_from(env(&[("HUELIO_CONFIG", "/nonexistent/huelio.toml")])).unwrap_err();
        assert!(matches!(err, ConsoleError::Config(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(Config::from_toml("scan_depth = 4"), Err(ConsoleError::Config(_))));
    }

    #[test]
    fn env_theme_replaces_theme_file() {
        let mut config = Config {
            theme_file: Some("/tmp/custom.toml".into()),
            ..Config::default()
        };
        config.apply_env(env(&[("HUELIO_THEME", "catppuccin-latte"), ("HUELIO_LOG", " ")]));
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert!(config.theme_file.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn explicit_config_path_wins_over_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "debounce_ms = 10").unwrap();
        let explicit = dir.path().join("other.toml");
        std::fs::write(&explicit, "debounce_ms = 20").unwrap();

        let config = Config::load_with(env(&[("HUELIO_CONFIG", explicit.to_str().unwrap())]), Some(dir.path())).unwrap();
        assert_eq!(config.debounce_ms, 20);
    }

    #[test]
    fn state_path_resolution() {
        assert_eq!(
            Config::default().state_path(),
            get_data_dir().map(|dir| dir.join("state.json"))
        );

        let custom = Config {
            state_file: Some("/srv/huelio/state.json".into()),
            ..Config::default()
        };
        assert_eq!(custom.state_path(), Some(PathBuf::from("/srv/huelio/state.json")));
    }

    #[test]
    fn theme_resolution_falls_back() {
        let unknown = Config {
            theme_name: Some("solarized".into()),
            ..Config::default()
        };
        assert_eq!(resolve_theme(&unknown).name, Theme::default().name);

        let latte = Config {
            theme_name: Some("catppuccin-latte".into()),
            ..Config::default()
        };
        assert_eq!(resolve_theme(&latte).name, "catppuccin-latte");

        let missing_file = Config {
            theme_file: Some("/nonexistent/theme.toml".into()),
            ..latte
        };
        assert_eq!(resolve_theme(&missing_file).name, Theme::default().name);
    }
}
