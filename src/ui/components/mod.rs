//! Composable UI component renderers.
//!
//! Each component renders one part of the screen into the frame buffer and
//! returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with version and status
//! - [`search`]: Search input box with placeholder
//! - [`welcome`]: First-run banner
//! - [`results`]: Result rows made of colored crumbs
//! - [`empty`]: Message for a query without matches
//! - [`footer`]: Keybinding hints or the last failure
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Welcome banner, until dismissed]
//! [Result rows or empty state]
//! [Blank padding to fill screen]
//! [Border with scroll hints]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod results;
mod search;
mod welcome;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use results::render_result_rows;
use search::render_search_bar;
use welcome::render_welcome;

/// Renders a horizontal border line at `row`, optionally with a label.
///
/// Returns the next free row.
fn render_border(out: &mut String, row: usize, color: &str, label: Option<&str>, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    match label {
        Some(label) if label.chars().count() + 4 <= cols => {
            let len = label.chars().count();
            out.push_str("──");
            out.push_str(label);
            out.push_str(&"─".repeat(cols - len - 2));
        }
        _ => out.push_str(&"─".repeat(cols)),
    }
    out.push_str(Theme::reset());
    row + 1
}

fn scroll_hint(vm: &UIViewModel) -> Option<String> {
    match (vm.hidden_above, vm.hidden_below) {
        (0, 0) => None,
        (above, 0) => Some(format!(" ↑ {above} more ")),
        (0, below) => Some(format!(" ↓ {below} more ")),
        (above, below) => Some(format!(" ↑ {above} more · ↓ {below} more ")),
    }
}

/// Renders the whole console layout.
///
/// Returns the 1-indexed `(row, col)` where the text cursor belongs.
pub fn render_console(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) -> (usize, usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, None, cols);

    let search_row = current_row + 1;
    let (next_row, cursor_col) = render_search_bar(out, current_row, &vm.search_bar, theme, cols);
    current_row = next_row;

    if let Some(banner) = &vm.welcome {
        current_row = render_welcome(out, current_row, banner, theme, cols);
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, current_row, empty, theme, cols);
    } else {
        render_result_rows(out, current_row, &vm.rows, theme, cols);
    }

    let footer_row = rows.saturating_sub(1).max(current_row + 1);
    let border_row = footer_row - 1;

    let hint = scroll_hint(vm);
    render_border(out, border_row, &theme.colors.border, hint.as_deref(), cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);

    (search_row, cursor_col)
}
