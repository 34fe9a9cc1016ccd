//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions for easy customization.
//! Provides both ratatui styles (for TUI) and ANSI escape codes (for CLI).

use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeName;
use crate::reveal::LineCategory;
use crate::scoring::ScoreTier;

/// Theme configuration for the TUI.
///
/// All colors and styles are defined here for easy customization.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Bright text for commands and headings
    pub text_strong: Color,
    /// Accent color for the Arbiter mark, prompts and highlights
    pub accent: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
    /// Middle score band
    pub warning: Color,
    /// Panel borders and inactive tracks
    pub surface: Color,
    /// Background color (usually default/transparent)
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::arbiter()
    }
}

impl Theme {
    /// Arbiter theme - slate text with emerald accent.
    /// Uses standard ANSI colors for consistent terminal rendering.
    pub fn arbiter() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            text_strong: Color::White,
            accent: Color::Green,
            error: Color::Red,
            success: Color::Green,
            warning: Color::Yellow,
            surface: Color::DarkGray,
            background: Color::Reset,
        }
    }

    /// Classic terminal theme - white text.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            text_strong: Color::White,
            accent: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            warning: Color::Yellow,
            surface: Color::Gray,
            background: Color::Reset,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            text_strong: Color::White,
            accent: Color::LightCyan,
            error: Color::Red,
            success: Color::Green,
            warning: Color::Yellow,
            surface: Color::Blue,
            background: Color::Reset,
        }
    }

    pub fn by_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Arbiter => Self::arbiter(),
            ThemeName::Classic => Self::classic(),
            ThemeName::Ocean => Self::ocean(),
        }
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented/highlighted text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (keybindings, etc).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for error text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for success text.
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for panel borders.
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.surface)
    }

    /// Style for a revealed terminal line of the given category.
    pub fn line_style(&self, category: LineCategory) -> Style {
        match category {
            LineCategory::Command => Style::default()
                .fg(self.text_strong)
                .add_modifier(Modifier::BOLD),
            LineCategory::Output | LineCategory::Blank => self.text_style(),
            LineCategory::Success => self.accent_style(),
            LineCategory::Error => self.error_style(),
            LineCategory::Header => Style::default()
                .fg(self.text_strong)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Colour for a score band.
    pub fn tier_color(&self, tier: ScoreTier) -> Color {
        match tier {
            ScoreTier::Good => self.success,
            ScoreTier::Fair => self.warning,
            ScoreTier::Poor => self.error,
        }
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.accent), text, ANSI_RESET)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_primary), text, ANSI_RESET)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        format!(
            "{}{}{}",
            color_to_ansi(self.text_secondary),
            text,
            ANSI_RESET
        )
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.error), text, ANSI_RESET)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.success), text, ANSI_RESET)
    }

    /// Format a terminal line for plain stdout playback.
    ///
    /// Commands get an accent `$ ` prompt; headers and commands are bold.
    pub fn line_text(&self, category: LineCategory, text: &str) -> String {
        match category {
            LineCategory::Command => format!(
                "{}$ {}{}{}{}",
                color_to_ansi(self.accent),
                ANSI_BOLD,
                color_to_ansi(self.text_strong),
                text,
                ANSI_RESET
            ),
            LineCategory::Header => format!(
                "{}{}{}{}",
                ANSI_BOLD,
                color_to_ansi(self.text_strong),
                text,
                ANSI_RESET
            ),
            LineCategory::Success => self.accent_text(text),
            LineCategory::Error => self.error_text(text),
            LineCategory::Output => self.primary_text(text),
            LineCategory::Blank => String::new(),
        }
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";
const ANSI_BOLD: &str = "\x1b[1m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

/// Select the process-wide theme. Only the first call has any effect.
pub fn init_theme(name: ThemeName) {
    let _ = THEME.set(Theme::by_name(name));
}

/// Global theme instance (the default until [`init_theme`] runs).
pub fn current_theme() -> Theme {
    THEME.get().cloned().unwrap_or_default()
}
