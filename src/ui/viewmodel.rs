//! View model types representing renderable UI state.
//!
//! View models are immutable snapshots computed from application state. They
//! contain no business logic, only display-ready data such as crumb text,
//! colors, highlight ranges and the visible window of result rows.
//!
//! # Example
//!
//! ```rust
//! use huelio_console::ui::viewmodel::{Crumb, CrumbColor, ResultRow};
//!
//! let row = ResultRow {
//!     crumbs: vec![
//!         Crumb::plain("●", "Kitchen Ceiling", CrumbColor::Light),
//!         Crumb::plain("→", "", CrumbColor::Arrow),
//!         Crumb::plain("◉", "On", CrumbColor::On),
//!     ],
//!     is_selected: true,
//! };
//! assert_eq!(row.crumbs.len(), 3);
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Search input contents.
    pub search_bar: SearchBarInfo,

    /// First-run banner, until dismissed.
    pub welcome: Option<WelcomeBanner>,

    /// Result rows inside the visible window.
    pub rows: Vec<ResultRow>,

    /// Index of the selected row within `rows`.
    pub selected_index: Option<usize>,

    /// Rows scrolled out above the window.
    pub hidden_above: usize,

    /// Rows scrolled out below the window.
    pub hidden_below: usize,

    /// Shown when the latest query returned nothing.
    pub empty_state: Option<EmptyState>,

    /// Keybinding hints and the last failure.
    pub footer: FooterInfo,
}

/// One candidate, rendered as a sequence of crumbs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub crumbs: Vec<Crumb>,
    pub is_selected: bool,
}

/// A colored, icon-prefixed fragment of a result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    /// Leading glyph; empty for none.
    pub icon: &'static str,

    /// Display text; empty for icon-only crumbs such as the arrow.
    pub text: String,

    pub color: CrumbColor,

    /// Character ranges of `text` matched by the search, `(start, end)` with
    /// exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

impl Crumb {
    /// Creates a crumb without highlights.
    #[must_use]
    pub fn plain(icon: &'static str, text: &str, color: CrumbColor) -> Self {
        Self {
            icon,
            text: text.to_string(),
            color,
            highlight_ranges: Vec::new(),
        }
    }
}

/// Semantic crumb color, resolved against the theme at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrumbColor {
    /// Light subject (yellow).
    Light,
    /// Group subject (orange).
    Group,
    /// Toggle on (green).
    On,
    /// Toggle off (red).
    Off,
    /// Color directive: white crumb whose text is drawn in the CSS color itself.
    Swatch(String),
    /// Scene directive (blue).
    Scene,
    /// Informational message (purple).
    Special,
    /// Neutral separator between subject and directive.
    Arrow,
    /// Backend diagnostics.
    Debug,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, including version and status.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,

    /// Last failure, shown instead of the keybindings while set.
    pub status: Option<String>,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search text.
    pub query: String,

    /// Hint shown while the query is empty.
    pub placeholder: String,
}

/// Welcome banner display information.
#[derive(Debug, Clone)]
pub struct WelcomeBanner {
    pub message: String,
}
