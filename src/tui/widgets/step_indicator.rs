//! Numbered progress through the walkthrough steps.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};

use crate::tui::theme::Theme;

const CONNECTOR: &str = " ── ";

pub struct StepIndicator<'a> {
    steps: &'a [&'a str],
    current: usize,
    theme: Theme,
}

impl<'a> StepIndicator<'a> {
    pub fn new(steps: &'a [&'a str], current: usize) -> Self {
        Self {
            steps,
            current,
            theme: Theme::default(),
        }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Styled spans, with or without the step labels.
    pub fn spans(&self, with_labels: bool) -> Vec<Span<'a>> {
        let theme = &self.theme;
        let mut spans = Vec::with_capacity(self.steps.len() * 3);

        for (i, step) in self.steps.iter().enumerate() {
            let reached = i <= self.current;
            let circle_style = if reached {
                theme.accent_bold_style().add_modifier(Modifier::REVERSED)
            } else {
                theme.text_secondary_style()
            };
            spans.push(Span::styled(format!(" {} ", i + 1), circle_style));

            if with_labels {
                let label_style = if reached {
                    theme.text_style()
                } else {
                    theme.text_secondary_style()
                };
                spans.push(Span::styled(format!(" {}", step), label_style));
            }

            if i + 1 < self.steps.len() {
                let connector_style = if i < self.current {
                    theme.accent_style()
                } else {
                    theme.border_style()
                };
                spans.push(Span::styled(CONNECTOR, connector_style));
            }
        }

        spans
    }
}

impl Widget for StepIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let full = Line::from(self.spans(true));
        // Labels are dropped on narrow terminals
        let line = if full.width() <= area.width as usize {
            full
        } else {
            Line::from(self.spans(false))
        };
        line.render(area, buf);
    }
}
