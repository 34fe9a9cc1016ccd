//! Editor-style code panel.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::tui::theme::Theme;

pub struct CodeBlock<'a> {
    title: &'a str,
    code: &'a str,
    scroll: u16,
    theme: Theme,
}

impl<'a> CodeBlock<'a> {
    pub fn new(title: &'a str, code: &'a str) -> Self {
        Self {
            title,
            code,
            scroll: 0,
            theme: Theme::default(),
        }
    }

    /// Vertical scroll offset in lines.
    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Height needed to show the whole snippet including borders.
    pub fn required_height(&self) -> u16 {
        let lines = self.code.lines().count().max(1);
        u16::try_from(lines + 2).unwrap_or(u16::MAX)
    }
}

impl Widget for CodeBlock<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = &self.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(Line::from(vec![
                Span::styled(" ● ", theme.error_style()),
                Span::styled("● ", Style::default().fg(theme.warning)),
                Span::styled("● ", theme.success_style()),
                Span::styled(format!("{} ", self.title), theme.text_secondary_style()),
            ]));

        Paragraph::new(Text::raw(self.code))
            .style(theme.text_style())
            .block(block)
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
