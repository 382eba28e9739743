//! Search bar component renderer.
//!
//! Renders the search input box with a bordered frame, the query text, and the
//! rotating placeholder while the query is empty.

use crate::ui::helpers::{pad, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Prompt drawn before the query.
const PROMPT: &str = " › ";

/// Renders the search input box at `row`.
///
/// # Returns
///
/// The next free row (`row + 3`) and the 1-indexed column where the text
/// cursor belongs, right after the last query character.
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────┐ [margin]
/// [margin] │ › query      │ [margin]
/// [margin] └──────────────┘ [margin]
/// ```
///
/// A query wider than the box shows its tail, so the cursor stays visible.
pub fn render_search_bar(out: &mut String, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> (usize, usize) {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let text_width = inner_width.saturating_sub(width(PROMPT) + 1);

    position_cursor(out, row, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&Theme::fg(&theme.colors.search_bar_border));
    out.push_str(&format!("┌{}┐", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    position_cursor(out, row + 1, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&Theme::fg(&theme.colors.search_bar_border));
    out.push('│');
    out.push_str(PROMPT);

    let shown = if search.query.is_empty() {
        out.push_str(Theme::dim());
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        let placeholder: String = search.placeholder.chars().take(text_width).collect();
        out.push_str(&placeholder);
        out.push_str(Theme::reset());
        width(&placeholder)
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        let skip = width(&search.query).saturating_sub(text_width);
        let tail: String = search.query.chars().skip(skip).collect();
        out.push_str(&tail);
        width(&tail)
    };

    pad(out, inner_width.saturating_sub(width(PROMPT) + shown));
    out.push_str(&Theme::fg(&theme.colors.search_bar_border));
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&Theme::fg(&theme.colors.search_bar_border));
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    let typed = if search.query.is_empty() { 0 } else { shown };
    let cursor_col = SEARCH_BOX_MARGIN + 1 + width(PROMPT) + typed + 1;
    (row + 3, cursor_col)
}
