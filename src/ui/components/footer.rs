//! Footer component renderer.
//!
//! Renders the help bar with centered keybinding hints, or the last failure
//! while one is recorded.

use crate::ui::helpers::{clip, pad, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer at `row` and returns the next free row.
///
/// Text wider than the terminal is clipped to prevent layout corruption on
/// narrow terminals.
pub fn render_footer(out: &mut String, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let (text, color) = match &footer.status {
        Some(status) => (format!("! {status}"), &theme.colors.error_fg),
        None => (footer.keybindings.clone(), &theme.colors.text_dim),
    };
    let text = clip(&text, cols);
    let text_len = width(&text);
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    pad(out, padding);
    out.push_str(&text);
    pad(out, cols.saturating_sub(padding + text_len));
    out.push_str(Theme::reset());
    row + 1
}
