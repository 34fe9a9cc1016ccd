//! Modal overlays.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::pages::Route;
use crate::theme::{current_theme, Theme};
use crate::tui::ui::modal_rect;

/// Render the help modal for `route`.
pub fn render_help_modal(frame: &mut Frame, area: Rect, route: Route) {
    let theme = current_theme();
    let lines = build_help_text(route, &theme);
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let modal_area = modal_rect(52, height, area);

    frame.render_widget(Clear, modal_area);

    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, modal_area);
}

fn key_line(theme: &Theme, key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<12}", key), Style::default().fg(theme.accent)),
        Span::raw(desc),
    ])
}

fn heading(theme: &Theme, text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(theme.text_secondary)))
}

/// Build the help text lines for `route`.
fn build_help_text(route: Route, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    match route {
        Route::Landing => {
            lines.push(heading(theme, "Navigation"));
            lines.push(key_line(theme, "\u{2191}/\u{2193} j/k", "Previous/next section"));
            lines.push(key_line(theme, "PgUp/Dn", "Jump three sections"));
            lines.push(key_line(theme, "Home/End", "First/last section"));
            lines.push(Line::from(""));
            lines.push(heading(theme, "Actions"));
            lines.push(key_line(theme, "s", "Skip terminal playback"));
            lines.push(key_line(theme, "d / Enter", "Open the walkthrough"));
        }
        Route::Demo => {
            lines.push(heading(theme, "Steps"));
            lines.push(key_line(theme, "\u{2190}/\u{2192} h/l", "Previous/next step"));
            lines.push(key_line(theme, "1-4", "Jump to step"));
            lines.push(Line::from(""));
            lines.push(heading(theme, "Actions"));
            lines.push(key_line(theme, "f", "Next function"));
            lines.push(key_line(theme, "g / b", "Good / bad submission"));
            lines.push(key_line(theme, "v", "Run verification"));
            lines.push(key_line(theme, "s", "Skip terminal playback"));
            lines.push(key_line(theme, "Esc", "Back to landing"));
        }
    }

    lines.push(Line::from(""));
    lines.push(key_line(theme, "?", "This help"));
    lines.push(key_line(theme, "q", "Quit"));
    lines.push(Line::from(""));
    lines.push(heading(theme, "Press any key to close"));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn landing_help_lists_landing_keys() {
        let text = plain(&build_help_text(Route::Landing, &Theme::default()));
        assert!(text.iter().any(|l| l.contains("Open the walkthrough")));
        assert!(!text.iter().any(|l| l.contains("Run verification")));
    }

    #[test]
    fn demo_help_lists_demo_keys() {
        let text = plain(&build_help_text(Route::Demo, &Theme::default()));
        assert!(text.iter().any(|l| l.contains("Run verification")));
        assert!(text.iter().any(|l| l.contains("Back to landing")));
    }

    #[test]
    fn help_modal_renders_centered() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| render_help_modal(frame, frame.area(), Route::Landing))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let rows: Vec<String> = (0..30)
            .map(|y| (0..80).map(|x| buffer[(x, y)].symbol()).collect())
            .collect();
        assert!(rows.iter().any(|r| r.contains(" Help ")));
        assert!(rows.iter().any(|r| r.contains("Keyboard Shortcuts")));
    }
}
