//! Horizontal score bar.
//!
//! Two rows: the dimension label with its weight and score on the right,
//! then a track that fills to the score once `animate` is set.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::scoring::{format_score, percentage, ScoreTier};
use crate::tui::theme::Theme;

const FILLED: &str = "█";
const TRACK: &str = "░";

pub struct ScoreBar<'a> {
    label: &'a str,
    weight: &'a str,
    score: f64,
    animate: bool,
    theme: Theme,
}

impl<'a> ScoreBar<'a> {
    pub fn new(label: &'a str, weight: &'a str, score: f64) -> Self {
        Self {
            label,
            weight,
            score,
            animate: false,
            theme: Theme::default(),
        }
    }

    pub fn animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Rows the bar occupies.
    pub const HEIGHT: u16 = 2;

    /// Number of filled cells for a track `width` wide.
    pub fn filled_cells(&self, width: u16) -> u16 {
        if !self.animate {
            return 0;
        }
        (u32::from(width) * u32::from(percentage(self.score)) / 100) as u16
    }
}

impl Widget for ScoreBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let theme = &self.theme;
        let tier_color = theme.tier_color(ScoreTier::of(self.score));

        buf.set_string(area.x, area.y, self.label, theme.text_style());

        let score = format_score(self.score);
        let right_width = (self.weight.width() + 2 + score.width()) as u16;
        if right_width <= area.width {
            let x = area.x + area.width - right_width;
            buf.set_string(x, area.y, self.weight, theme.text_secondary_style());
            buf.set_string(
                x + self.weight.width() as u16 + 2,
                area.y,
                &score,
                Style::default()
                    .fg(tier_color)
                    .add_modifier(Modifier::BOLD),
            );
        }

        if area.height < Self::HEIGHT {
            return;
        }
        let filled = self.filled_cells(area.width);
        let y = area.y + 1;
        for i in 0..area.width {
            let (symbol, style) = if i < filled {
                (FILLED, Style::default().fg(tier_color))
            } else {
                (TRACK, theme.border_style())
            };
            buf.set_string(area.x + i, y, symbol, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_lines;

    fn render(bar: ScoreBar, width: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, ScoreBar::HEIGHT);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        buffer_lines(&buf)
    }

    #[test]
    fn header_shows_label_weight_and_score() {
        let rows = render(ScoreBar::new("Type Accuracy", "30%", 1.0), 40);
        assert!(rows[0].starts_with("Type Accuracy"));
        assert!(rows[0].ends_with("30%  1.00"));
    }

    #[test]
    fn track_stays_empty_until_animated() {
        let rows = render(ScoreBar::new("x", "40%", 1.0), 10);
        assert_eq!(rows[1], "░".repeat(10));
    }

    #[test]
    fn animated_track_fills_to_score() {
        let rows = render(ScoreBar::new("x", "20%", 0.5).animate(true), 10);
        assert_eq!(rows[1], format!("{}{}", "█".repeat(5), "░".repeat(5)));
    }

    #[test]
    fn filled_cells_rounds_down() {
        let bar = ScoreBar::new("x", "20%", 0.33).animate(true);
        assert_eq!(bar.filled_cells(10), 3);
        assert_eq!(bar.filled_cells(0), 0);
    }

    #[test]
    fn score_color_follows_tier() {
        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);
        ScoreBar::new("x", "40%", 0.2).animate(true).render(area, &mut buf);
        assert_eq!(buf[(0, 1)].fg, Theme::default().error);
    }
}
