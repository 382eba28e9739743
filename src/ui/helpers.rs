//! Shared rendering utilities and helpers.
//!
//! Low-level text helpers used across components: cursor positioning, padding,
//! and fuzzy match highlighting with proper ANSI escape sequence management.
//! All helpers append to a frame buffer instead of printing, so a whole screen
//! is written to the terminal in one go.
//!
//! Widths are counted in `char`s; the glyphs used by the console are all single
//! width.
//!
//! # Example
//!
//! ```rust
//! use huelio_console::ui::helpers::render_highlighted_text;
//! use huelio_console::ui::Theme;
//!
//! let theme = Theme::default();
//! let mut out = String::new();
//! render_highlighted_text(&mut out, "Kitchen", &[(0, 3)], &theme, "");
//! assert!(out.contains("Kit"));
//! assert!(out.ends_with("chen"));
//! ```

use crate::ui::theme::Theme;

/// Appends an escape sequence moving the cursor to `row`, `col` (1-indexed).
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Appends `n` spaces.
pub fn pad(out: &mut String, n: usize) {
    out.extend(std::iter::repeat(' ').take(n));
}

/// Display width of `text`.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Returns at most `max` leading characters of `text`.
#[must_use]
pub fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Appends text with highlighted character ranges for fuzzy matches.
///
/// Highlighted sections use the theme's match colors. After each highlight the
/// `restore` sequence is re-applied so the surrounding crumb or selection style
/// continues.
///
/// Ranges are character indices `(start, end)`, exclusive end, sorted and
/// non-overlapping. Ranges past the end of `text` are clipped.
pub fn render_highlighted_text(out: &mut String, text: &str, ranges: &[(usize, usize)], theme: &Theme, restore: &str) {
    if ranges.is_empty() {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(restore);

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
}
