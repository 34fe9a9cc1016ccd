//! Screen layout shared by both pages.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::pages::Route;
use crate::theme::current_theme;

/// Header height: title row plus a rule.
pub const HEADER_HEIGHT: u16 = 2;

/// Split the screen into header, body, status line and footer.
pub fn build_page_layout(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Split `area` into two columns, left taking `left_percent`.
pub fn split_columns(area: Rect, left_percent: u16) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(left_percent),
            Constraint::Percentage(100 - left_percent.min(100)),
        ])
        .split(area);
    [chunks[0], chunks[1]]
}

/// Title row with the current route on the right.
pub fn render_header(frame: &mut Frame, area: Rect, route: Route) {
    let theme = current_theme();
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border_style());
    let title = Line::from(vec![
        Span::styled("\u{25b2} ", theme.accent_bold_style()),
        Span::styled("Arbiter", theme.accent_bold_style()),
        Span::styled("  verified documentation", theme.text_secondary_style()),
    ]);
    let path = Line::from(Span::styled(
        format!("{} ", route),
        theme.text_secondary_style(),
    ))
    .right_aligned();

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(title), inner);
    frame.render_widget(Paragraph::new(path), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_layout_reserves_chrome() {
        let [header, body, status, footer] = build_page_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, HEADER_HEIGHT);
        assert_eq!(status.height, 1);
        assert_eq!(footer.height, 1);
        assert_eq!(body.height, 24 - HEADER_HEIGHT - 2);
        assert_eq!(footer.y, 23);
    }

    #[test]
    fn columns_cover_width() {
        let [left, right] = split_columns(Rect::new(0, 0, 100, 10), 40);
        assert_eq!(left.width, 40);
        assert_eq!(right.width, 60);
        assert_eq!(right.x, 40);
    }
}
