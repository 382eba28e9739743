//! Empty state component renderer.
//!
//! Shown in the results area when the latest query matched nothing.

use crate::ui::helpers::{clip, pad, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message starting one line below `row`.
///
/// Returns the next free row.
pub fn render_empty_state(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let message = clip(&empty.message, cols);
    let msg_len = width(&message);
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    position_cursor(out, row + 1, 1);
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    pad(out, msg_padding);
    out.push_str(&message);
    out.push_str(Theme::reset());

    let subtitle = clip(&empty.subtitle, cols);
    let sub_padding = cols.saturating_sub(width(&subtitle)) / 2;

    position_cursor(out, row + 2, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    pad(out, sub_padding);
    out.push_str(&subtitle);
    out.push_str(Theme::reset());

    row + 3
}
