//! Status line and footer rendering shared by both pages
//!
//! The status line shows where the user is (section, step, playback state);
//! the footer shows the key hints for the current page.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::pages::Route;
use crate::theme::{current_theme, Theme};

/// Render a status line with the given text.
///
/// Displays the text in the secondary text color of the current theme.
pub fn render_status_line(frame: &mut Frame, area: Rect, text: &str) {
    let theme = current_theme();
    let status = Paragraph::new(text.to_string()).style(Style::default().fg(theme.text_secondary));
    frame.render_widget(status, area);
}

/// Render a centered footer with keybinding hints.
///
/// Example: `&[("q", "quit"), ("?", "help")]` renders as `"q: quit | ?: help"`.
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)]) {
    let theme = current_theme();
    let spans = build_footer_spans(keys, &theme);
    let footer = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(theme.text_secondary))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Key hints shown on `route`.
pub fn footer_keys(route: Route) -> &'static [(&'static str, &'static str)] {
    match route {
        Route::Landing => &[
            ("\u{2191}\u{2193}", "scroll"),
            ("s", "skip"),
            ("d", "demo"),
            ("?", "help"),
            ("q", "quit"),
        ],
        Route::Demo => &[
            ("\u{2190}\u{2192}", "step"),
            ("f", "function"),
            ("g/b", "good/bad"),
            ("v", "verify"),
            ("Esc", "back"),
            ("?", "help"),
        ],
    }
}

/// Plain-text form of the footer, as rendered.
pub fn footer_text(keys: &[(&str, &str)]) -> String {
    keys.iter()
        .map(|(key, desc)| format!("{}: {}", key, desc))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Build styled spans for footer keybinding hints.
///
/// Each key is highlighted with the theme accent color, descriptions use
/// the secondary text color, and entries are separated by " | ".
fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " | ".to_string(),
                Style::default().fg(theme.text_secondary),
            ));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(theme.accent),
        ));
        spans.push(Span::styled(
            format!(": {}", desc),
            Style::default().fg(theme.text_secondary),
        ));
    }
    spans
}
