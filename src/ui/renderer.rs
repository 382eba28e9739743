//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the components, collecting the
//!    output in a [`Frame`]
//!
//! The runtime clears the screen and writes the frame in one piece, then moves
//! the terminal cursor into the search field.
//!
//! # Example
//!
//! ```rust
//! use huelio_console::app::AppState;
//! use huelio_console::ui::{render, Theme};
//! use std::time::Duration;
//!
//! let state = AppState::new(Theme::default(), Duration::from_millis(150), false);
//! let frame = render(&state, 24, 80);
//! assert!(frame.text.contains("huelio console"));
//! assert_eq!(frame.cursor, (5, 7));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// One rendered screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// ANSI-styled output with absolute cursor positioning.
    pub text: String,

    /// 1-indexed `(row, col)` of the text cursor in the search field.
    pub cursor: (usize, usize),
}

/// Renders the console for a terminal of `rows` x `cols` cells.
#[must_use]
pub fn render(state: &AppState, rows: usize, cols: usize) -> Frame {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols)
}

/// Renders a pre-computed view model.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> Frame {
    let mut text = String::with_capacity(rows * cols * 2);
    let cursor = components::render_console(&mut text, vm, theme, cols, rows);
    Frame { text, cursor }
}
