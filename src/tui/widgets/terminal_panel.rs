//! Simulated terminal panel.
//!
//! Renders the observable state of a [`LineRevealer`]: committed lines,
//! the line being typed with a trailing cursor, and an idle cursor while
//! playback is running. The view follows the newest output, the way a real
//! terminal scrolls.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line as TextLine, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::reveal::{Clock, Line, LineCategory, LineRevealer};
use crate::tui::theme::Theme;

/// Cursor glyph shown after typed text and while idle.
pub const CURSOR: &str = "▌";
/// Default title in the chrome bar.
pub const DEFAULT_TITLE: &str = "arbiter-validator ~ terminal";

/// Terminal-style panel over a revealer's observables.
pub struct TerminalPanel<'a> {
    title: &'a str,
    revealed: &'a [Line],
    typing: &'a str,
    active: bool,
    finished: bool,
    theme: Theme,
}

impl<'a> TerminalPanel<'a> {
    pub fn new(revealed: &'a [Line], typing: &'a str) -> Self {
        Self {
            title: DEFAULT_TITLE,
            revealed,
            typing,
            active: false,
            finished: false,
            theme: Theme::default(),
        }
    }

    /// Panel showing the current state of `revealer`.
    pub fn from_revealer<C: Clock>(revealer: &'a LineRevealer<C>) -> Self {
        Self::new(revealer.revealed_lines(), revealer.typing_buffer())
            .active(revealer.is_active() || revealer.is_running())
            .finished(revealer.is_finished())
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn finished(mut self, finished: bool) -> Self {
        self.finished = finished;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Whether the skip hint is offered.
    pub fn shows_skip(&self) -> bool {
        self.active && !self.finished
    }

    /// Content rows, before scrolling.
    pub fn content_lines(&self) -> Vec<TextLine<'a>> {
        let theme = &self.theme;
        let mut lines: Vec<TextLine<'a>> = self
            .revealed
            .iter()
            .map(|line| render_line(line, theme))
            .collect();

        if !self.typing.is_empty() {
            lines.push(TextLine::from(vec![
                Span::styled("$ ", theme.accent_style()),
                Span::styled(self.typing, theme.line_style(LineCategory::Command)),
                Span::styled(CURSOR, theme.accent_style()),
            ]));
        } else if self.active && !self.finished {
            lines.push(TextLine::from(Span::styled(CURSOR, theme.accent_style())));
        }

        lines
    }
}

fn render_line<'a>(line: &'a Line, theme: &Theme) -> TextLine<'a> {
    let style = theme.line_style(line.category);
    match line.category {
        LineCategory::Command => TextLine::from(vec![
            Span::styled("$ ", theme.accent_style()),
            Span::styled(line.text.as_str(), style),
        ]),
        LineCategory::Blank => TextLine::default(),
        _ => TextLine::from(Span::styled(line.text.as_str(), style)),
    }
}

impl Widget for TerminalPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme.clone();

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(TextLine::from(vec![
                Span::styled(" ● ", theme.error_style()),
                Span::styled("● ", Style::default().fg(theme.warning)),
                Span::styled("● ", theme.success_style()),
                Span::styled(format!("{} ", self.title), theme.text_secondary_style()),
            ]));
        if self.shows_skip() {
            block = block.title(
                TextLine::from(Span::styled(" Skip → (s) ", theme.text_secondary_style()))
                    .right_aligned(),
            );
        }

        let inner = block.inner(area);
        let lines = self.content_lines();
        let overflow = lines.len().saturating_sub(inner.height as usize);
        let scroll = u16::try_from(overflow).unwrap_or(u16::MAX);

        block.render(area, buf);
        Paragraph::new(lines)
            .scroll((scroll, 0))
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::{ManualClock, RevealTiming};
    use crate::tui::widgets::buffer_lines;

    fn render(panel: TerminalPanel, width: u16, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);
        buffer_lines(&buf)
    }

    #[test]
    fn commands_get_prompt_and_blank_lines_stay_empty() {
        let lines = vec![Line::command("ls"), Line::blank(), Line::output("a.txt")];
        let rows = render(TerminalPanel::new(&lines, "").finished(true), 30, 6);

        assert!(rows[1].starts_with("│$ ls"));
        assert_eq!(rows[2].trim_matches(|c| c == '│' || c == ' '), "");
        assert!(rows[3].starts_with("│a.txt"));
    }

    #[test]
    fn typing_line_has_trailing_cursor() {
        let rows = render(TerminalPanel::new(&[], "pip ins").active(true), 30, 4);
        assert!(rows[1].starts_with("│$ pip ins▌"));
    }

    #[test]
    fn idle_cursor_only_while_running() {
        let lines = vec![Line::output("x")];
        let running = render(TerminalPanel::new(&lines, "").active(true), 20, 5);
        assert!(running[2].starts_with("│▌"));

        let done = render(TerminalPanel::new(&lines, "").active(true).finished(true), 20, 5);
        assert!(!done[2].contains(CURSOR));
    }

    #[test]
    fn skip_hint_only_while_active_and_unfinished() {
        let panel = TerminalPanel::new(&[], "").active(true);
        assert!(panel.shows_skip());
        let rows = render(panel, 60, 3);
        assert!(rows[0].contains("Skip →"));

        let rows = render(TerminalPanel::new(&[], "").active(true).finished(true), 60, 3);
        assert!(!rows[0].contains("Skip"));
        assert!(rows[0].contains(DEFAULT_TITLE));
    }

    #[test]
    fn overflow_scrolls_to_newest_line() {
        let lines: Vec<Line> = (0..10).map(|i| Line::output(format!("line {i}"))).collect();
        let rows = render(TerminalPanel::new(&lines, "").finished(true), 20, 5);
        // 3 inner rows show the last three lines
        assert!(rows[1].starts_with("│line 7"));
        assert!(rows[3].starts_with("│line 9"));
    }

    #[test]
    fn from_revealer_reflects_session() {
        let clock = ManualClock::new();
        let mut revealer = LineRevealer::new(clock.clone(), RevealTiming::from_millis(50, 10));
        revealer.start(vec![Line::command("ab")]);
        clock.advance_ms(10);
        revealer.tick();

        let panel = TerminalPanel::from_revealer(&revealer);
        assert!(panel.shows_skip());
        let rows = render(panel, 30, 4);
        assert!(rows[1].starts_with("│$ a▌"));

        revealer.skip();
        let panel = TerminalPanel::from_revealer(&revealer);
        assert!(!panel.shows_skip());
        let rows = render(panel, 30, 4);
        assert!(rows[1].starts_with("│$ ab "));
    }
}
