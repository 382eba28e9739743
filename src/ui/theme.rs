//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the console, supporting both
//! built-in themes (Catppuccin variants) and custom themes loaded from TOML files.
//! It provides utilities for converting hex and CSS colors to ANSI escape
//! sequences.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#cdd6f4"
//! selection_bg = "#313244"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! error_fg = "#f38ba8"
//! welcome_fg = "#94e2d5"
//!
//! [crumbs]
//! light = "#f9e2af"
//! group = "#fab387"
//! on = "#a6e3a1"
//! off = "#f38ba8"
//! swatch = "#ffffff"
//! scene = "#89b4fa"
//! special = "#cba6f7"
//! arrow = "#7f849c"
//! debug = "#6c7086"
//! ```
//!
//! # Example
//!
//! ```rust
//! use huelio_console::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! let line = format!("{}Bold{}", Theme::bold(), Theme::reset());
//! assert!(line.starts_with("\u{1b}[1m"));
//! # let _ = Theme::fg(&theme.colors.header_fg);
//! ```

use crate::domain::error::{ConsoleError, Result};
use crate::ui::viewmodel::CrumbColor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for the chrome.
    pub colors: ThemeColors,
    /// Color palette for result crumbs.
    pub crumbs: CrumbColors,
}

/// Color definitions for the console chrome.
///
/// All colors are hex strings (e.g. "#cdd6f4").
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, placeholder, scroll hints).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,
    /// Fuzzy match highlight foreground.
    pub match_highlight_fg: String,
    /// Fuzzy match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Footer color for failures.
    pub error_fg: String,

    /// Welcome banner color.
    pub welcome_fg: String,
}

/// Crumb colors, one per [`CrumbColor`] role.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CrumbColors {
    pub light: String,
    pub group: String,
    pub on: String,
    pub off: String,
    /// Frame color of the color directive; its text uses the color itself.
    pub swatch: String,
    pub scene: String,
    pub special: String,
    pub arrow: String,
    pub debug: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `catppuccin-mocha`, `catppuccin-latte`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Theme`] if the file cannot be read or the TOML
    /// content cannot be parsed (invalid syntax, missing fields, type
    /// mismatches).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).map_err(|e| {
            ConsoleError::Theme(format!("failed to read theme file {}: {e}", path.as_ref().display()))
        })?;

        toml::from_str(&contents).map_err(|e| ConsoleError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Returns the hex color for a crumb role.
    ///
    /// For [`CrumbColor::Swatch`] this is the frame color; use
    /// [`Theme::css_color`] for the swatch text itself.
    #[must_use]
    pub fn crumb_hex(&self, color: &CrumbColor) -> &str {
        let c = &self.crumbs;
        match color {
            CrumbColor::Light => &c.light,
            CrumbColor::Group => &c.group,
            CrumbColor::On => &c.on,
            CrumbColor::Off => &c.off,
            CrumbColor::Swatch(_) => &c.swatch,
            CrumbColor::Scene => &c.scene,
            CrumbColor::Special => &c.special,
            CrumbColor::Arrow => &c.arrow,
            CrumbColor::Debug => &c.debug,
        }
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Accepts `#rrggbb` and `#rgb`. Returns `None` on parse errors.
    fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
        let hex = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            6 => Some((
                u8::from_str_radix(&hex[0..2], 16).ok()?,
                u8::from_str_radix(&hex[2..4], 16).ok()?,
                u8::from_str_radix(&hex[4..6], 16).ok()?,
            )),
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
                Some((digit(0)?, digit(1)?, digit(2)?))
            }
            _ => None,
        }
    }

    /// Converts a hex color to RGB, falling back to white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        Self::parse_hex(hex).unwrap_or((255, 255, 255))
    }

    /// Resolves a CSS color string as sent by the backend.
    ///
    /// Accepts any CSS color the service accepts: named colors, hex with or
    /// without alpha, `rgb()`/`rgba()`, `hsl()`/`hsla()` and `hwb()`. Alpha is
    /// dropped. Returns `None` for anything else.
    ///
    /// # Example
    ///
    /// ```rust
    /// use huelio_console::ui::Theme;
    ///
    /// assert_eq!(Theme::css_color("#ff8800"), Some((255, 136, 0)));
    /// assert_eq!(Theme::css_color("HotPink"), Some((255, 105, 180)));
    /// assert_eq!(Theme::css_color("hsl(0, 100%, 50%)"), Some((255, 0, 0)));
    /// assert_eq!(Theme::css_color("sparkly"), None);
    /// ```
    #[must_use]
    pub fn css_color(css: &str) -> Option<(u8, u8, u8)> {
        let [r, g, b, _] = csscolorparser::parse(css.trim()).ok()?.to_rgba8();
        Some((r, g, b))
    }

    /// Generates an ANSI 24-bit foreground color escape sequence from a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        Self::fg_rgb(r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg_rgb(r: u8, g: u8, b: u8) -> String {
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence from a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("catppuccin-mocha").expect("Built-in catppuccin-mocha theme should always parse")
    }
}
