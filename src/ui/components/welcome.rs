//! Welcome banner renderer.

use crate::ui::helpers::{clip, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::WelcomeBanner;

/// Renders the one-line welcome banner at `row` and returns the next free row.
pub fn render_welcome(out: &mut String, row: usize, banner: &WelcomeBanner, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.welcome_fg));
    out.push(' ');
    out.push_str(&clip(&banner.message, cols.saturating_sub(2)));
    out.push_str(Theme::reset());
    row + 1
}
