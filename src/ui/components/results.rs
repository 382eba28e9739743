//! Result list renderer.
//!
//! Renders each candidate as a row of colored crumbs. The selected row gets
//! the selection background across the full width and a marker in the gutter.

use crate::ui::helpers::{self, clip, pad, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Crumb, CrumbColor, ResultRow};

/// Gutter drawn before every row.
const MARKER_SELECTED: &str = " ▌ ";
const MARKER_NORMAL: &str = "   ";

/// Space between crumbs.
const CRUMB_GAP: usize = 2;

/// Renders all rows starting at `row` and returns the next free row.
pub fn render_result_rows(out: &mut String, row: usize, rows: &[ResultRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for result in rows {
        current_row = render_result_row(out, current_row, result, theme, cols);
    }
    current_row
}

/// Renders a single row.
///
/// Crumbs are laid out left to right until the width runs out; the crumb that
/// no longer fits is clipped and the rest are dropped.
fn render_result_row(out: &mut String, row: usize, result: &ResultRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    let base = if result.is_selected {
        format!("{}{}", Theme::bg(&theme.colors.selection_bg), Theme::bold())
    } else {
        String::new()
    };

    out.push_str(&base);
    out.push_str(&Theme::fg(&theme.colors.selection_fg));
    let marker = if result.is_selected { MARKER_SELECTED } else { MARKER_NORMAL };
    out.push_str(marker);

    let mut used = width(marker);
    for (i, crumb) in result.crumbs.iter().enumerate() {
        let gap = if i == 0 { 0 } else { CRUMB_GAP };
        let remaining = cols.saturating_sub(used + gap);
        if remaining == 0 {
            break;
        }
        pad(out, gap);
        used += gap + render_crumb(out, crumb, theme, &base, remaining);
    }

    pad(out, cols.saturating_sub(used));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders one crumb within `budget` columns and returns the columns used.
fn render_crumb(out: &mut String, crumb: &Crumb, theme: &Theme, base: &str, budget: usize) -> usize {
    let color = match &crumb.color {
        CrumbColor::Swatch(css) => Theme::css_color(css)
            .map_or_else(|| Theme::fg(theme.crumb_hex(&crumb.color)), |(r, g, b)| Theme::fg_rgb(r, g, b)),
        other => Theme::fg(theme.crumb_hex(other)),
    };
    let style = format!("{base}{color}");
    out.push_str(&style);
    if crumb.color == CrumbColor::Debug {
        out.push_str(Theme::dim());
    }

    let mut used = 0;
    if !crumb.icon.is_empty() {
        let icon = clip(crumb.icon, budget);
        used += width(&icon);
        out.push_str(&icon);
        if !crumb.text.is_empty() && used < budget {
            out.push(' ');
            used += 1;
        }
    }

    if !crumb.text.is_empty() && used < budget {
        let text = clip(&crumb.text, budget - used);
        used += width(&text);
        helpers::render_highlighted_text(out, &text, &crumb.highlight_ranges, theme, &style);
    }

    out.push_str(Theme::reset());
    out.push_str(base);
    used
}
