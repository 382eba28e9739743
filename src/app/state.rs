//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! console, along with view model generation. It serves as the single source of
//! truth for all transient UI state.
//!
//! # State Components
//!
//! - **Search text**: The live contents of the input field
//! - **Results**: The displayed candidates and the selection cursor
//! - **Mode**: Idle / Searching / `ResultsShown`
//! - **Debouncer**: Pending timer ticket and in-flight query generation
//! - **Session**: Submission counter, in-flight submission, welcome flag
//!
//! # View Model Computation
//!
//! The `compute_viewmodel` method transforms state into a renderable UI
//! representation: one row of crumbs per candidate, a window of rows that keeps
//! the selection in view, and fuzzy-match highlight ranges inside crumb text.
//!
//! # Example
//!
//! ```rust
//! use huelio_console::app::AppState;
//! use huelio_console::ui::Theme;
//! use std::time::Duration;
//!
//! let state = AppState::new(Theme::default(), Duration::from_millis(150), false);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.rows.is_empty());
//! ```

use super::debounce::QueryDebouncer;
use super::modes::ConsoleMode;
use super::results::ResultList;
use super::session::SessionState;
use crate::domain::{Candidate, CandidateKind, Directive, Subject, Toggle};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Crumb, CrumbColor, EmptyState, FooterInfo, HeaderInfo, ResultRow, SearchBarInfo, UIViewModel,
    WelcomeBanner,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use std::time::Duration;

/// Hints cycled through the empty search field.
pub const PLACEHOLDERS: [&str; 8] = [
    "link",
    "<room> <scene>",
    "<room> <color>",
    "<scene>",
    "<room> on",
    "<room> off",
    "off",
    "on",
];

const WELCOME_MESSAGE: &str =
    "Welcome to huelio! Type a room, light or scene name, pick a row with Up/Down and press Enter.";

/// Longest crumb text shown before truncation.
const MAX_CRUMB_TEXT: usize = 32;

/// Central application state container.
///
/// Mutated by the event handler in response to input, timers and backend
/// completions. View models are computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Live contents of the search input.
    ///
    /// The debounce timer reads this at expiry, never a snapshot taken when
    /// the timer was armed.
    pub search_text: String,

    /// Candidates on screen and the active row.
    pub results: ResultList,

    /// Current phase of the search interaction.
    pub mode: ConsoleMode,

    /// Debounce tickets and query generations.
    pub debouncer: QueryDebouncer,

    /// Submission bookkeeping and the welcome banner flag.
    pub session: SessionState,

    /// Last submission failure, shown in the footer until the next edit.
    pub status: Option<String>,

    /// Whether the latest accepted query failed. An empty list then means
    /// "unknown", not "no matches".
    pub query_failed: bool,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    placeholder_index: usize,
}

impl AppState {
    /// Creates an idle console state.
    ///
    /// # Parameters
    ///
    /// * `theme` - Color scheme for UI rendering
    /// * `debounce` - Delay between the last keystroke and the query
    /// * `hide_welcome` - Persisted "welcome banner dismissed" flag
    #[must_use]
    pub fn new(theme: Theme, debounce: Duration, hide_welcome: bool) -> Self {
        Self {
            search_text: String::new(),
            results: ResultList::new(),
            mode: ConsoleMode::Idle,
            debouncer: QueryDebouncer::new(debounce),
            session: SessionState::new(hide_welcome),
            status: None,
            query_failed: false,
            theme,
            placeholder_index: 0,
        }
    }

    /// Placeholder currently shown in the empty search field.
    #[must_use]
    pub fn placeholder(&self) -> &'static str {
        PLACEHOLDERS[self.placeholder_index % PLACEHOLDERS.len()]
    }

    /// Advances to the next placeholder hint.
    pub fn rotate_placeholder(&mut self) {
        self.placeholder_index = (self.placeholder_index + 1) % PLACEHOLDERS.len();
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate available rows after subtracting UI chrome
    /// 2. Center the window around the selected row
    /// 3. Shift the window back if it runs past the end of the list
    /// 4. Compute the selection index relative to the window
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let welcome = self.session.show_welcome().then(|| WelcomeBanner {
            message: WELCOME_MESSAGE.to_string(),
        });

        let available_rows = Self::calculate_available_rows(rows, welcome.is_some());
        let total = self.results.len();
        let selected = self.results.selected_index();

        let (visible_start, visible_end) = Self::visible_window(selected.unwrap_or(0), total, available_rows);

        let matcher = if self.search_text.trim().is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        let result_rows: Vec<ResultRow> = self.results.results().as_slice()[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, candidate)| {
                let absolute_idx = visible_start + relative_idx;
                ResultRow {
                    crumbs: self.compute_crumbs(candidate, matcher.as_ref()),
                    is_selected: selected == Some(absolute_idx),
                }
            })
            .collect();

        UIViewModel {
            header: self.compute_header(cols),
            search_bar: SearchBarInfo {
                query: self.search_text.clone(),
                placeholder: self.placeholder().to_string(),
            },
            welcome,
            selected_index: selected.map(|s| s - visible_start),
            rows: result_rows,
            hidden_above: visible_start,
            hidden_below: total - visible_end,
            empty_state: self.compute_empty_state(),
            footer: self.compute_footer(),
        }
    }

    /// Returns the `[start, end)` slice of the list to show.
    fn visible_window(selected: usize, total: usize, available_rows: usize) -> (usize, usize) {
        if total <= available_rows {
            return (0, total);
        }
        let mut start = selected.saturating_sub(available_rows / 2);
        let end = (start + available_rows).min(total);
        if end - start < available_rows {
            start = end.saturating_sub(available_rows);
        }
        (start, end)
    }

    /// Builds the crumbs for one candidate.
    ///
    /// Specials render as a single purple crumb. Actions render the subject,
    /// then an arrow and the directive when one is present, then the debug
    /// payload if the backend attached one.
    fn compute_crumbs(&self, candidate: &Candidate, matcher: Option<&SkimMatcherV2>) -> Vec<Crumb> {
        let mut crumbs = Vec::with_capacity(4);

        match &candidate.kind {
            CandidateKind::Special { message } => {
                crumbs.push(self.crumb("◆", message, CrumbColor::Special, matcher));
                return crumbs;
            }
            CandidateKind::Action { subject, directive } => {
                crumbs.push(match subject {
                    Subject::Light { name } => self.crumb("●", name, CrumbColor::Light, matcher),
                    Subject::Group { name } => self.crumb("▣", name, CrumbColor::Group, matcher),
                });

                if let Some(directive) = directive {
                    crumbs.push(Crumb::plain("→", "", CrumbColor::Arrow));
                    crumbs.push(match directive {
                        Directive::Toggle(Toggle::On) => Crumb::plain("◉", "On", CrumbColor::On),
                        Directive::Toggle(Toggle::Off) => Crumb::plain("○", "Off", CrumbColor::Off),
                        Directive::Color(color) => {
                            self.crumb("■", color, CrumbColor::Swatch(color.clone()), matcher)
                        }
                        Directive::Scene { name } => self.crumb("✦", name, CrumbColor::Scene, matcher),
                    });
                }
            }
        }

        if let Some(debug) = &candidate.debug {
            crumbs.push(Crumb::plain("", &debug.to_string(), CrumbColor::Debug));
        }

        crumbs
    }

    fn crumb(&self, icon: &'static str, text: &str, color: CrumbColor, matcher: Option<&SkimMatcherV2>) -> Crumb {
        let text = truncate(text, MAX_CRUMB_TEXT);
        let highlight_ranges = matcher.map_or_else(Vec::new, |m| self.compute_highlight_ranges(&text, m));
        Crumb {
            icon,
            text,
            color,
            highlight_ranges,
        }
    }

    /// Computes character index ranges to highlight for fuzzy match visualization.
    ///
    /// Each whitespace-separated word of the search is matched on its own, since
    /// a query like `kitchen on` spans several crumbs. Consecutive indices are
    /// coalesced into `(start, end)` ranges (exclusive end).
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let mut indices: Vec<usize> = self
            .search_text
            .split_whitespace()
            .filter_map(|word| matcher.fuzzy_indices(text, word))
            .flat_map(|(_score, idx)| idx)
            .collect();
        indices.sort_unstable();
        indices.dedup();

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }

    fn compute_header(&self, cols: usize) -> HeaderInfo {
        let detail = match self.mode {
            ConsoleMode::Idle => String::new(),
            ConsoleMode::Searching => " · searching".to_string(),
            ConsoleMode::ResultsShown => match self.results.len() {
                1 => " · 1 result".to_string(),
                n => format!(" · {n} results"),
            },
        };
        let submitting = if self.session.is_submitting() { " · sending" } else { "" };

        let title = format!(" huelio console v{}{detail}{submitting} ", env!("CARGO_PKG_VERSION"));
        HeaderInfo {
            title: truncate(&title, cols),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if self.mode == ConsoleMode::ResultsShown && self.results.is_empty() && !self.query_failed {
            Some(EmptyState {
                message: "No matching lights, groups or scenes".to_string(),
                subtitle: "Try a room name, a scene, or 'on' / 'off'".to_string(),
            })
        } else {
            None
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.results.is_empty() {
            "Type to search  Ctrl+U: clear  Esc: clear/quit  Ctrl+C: quit"
        } else {
            "Up/Down: select  Enter: run  Ctrl+U: clear  Esc: clear/quit"
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
            status: self.status.clone(),
        }
    }

    /// Rows available for results after subtracting UI chrome.
    ///
    /// Accounts for the top blank line, header, border, search bar (3 rows),
    /// the bottom border and footer, plus the welcome banner when shown.
    const fn calculate_available_rows(total_rows: usize, welcome: bool) -> usize {
        let chrome = if welcome { 9 } else { 8 };
        total_rows.saturating_sub(chrome)
    }
}

/// Shortens `text` to at most `max` characters, ending in `...` when cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}
