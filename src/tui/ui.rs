//! UI rendering helpers for TUI
//!
//! Common UI utilities and layout helpers.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use super::widgets::{Badge, BadgeSize, BadgeVariant};
use crate::theme::current_theme;

/// Render the Arbiter mark centered at the top of `area`, picking the
/// largest size that fits.
pub fn render_mark(frame: &mut Frame, area: Rect) {
    let theme = current_theme();
    let badge = [BadgeSize::Xl, BadgeSize::Lg, BadgeSize::Md, BadgeSize::Sm]
        .into_iter()
        .map(|size| Badge::new(size, BadgeVariant::Glow))
        .find(|badge| {
            let (w, h) = badge.dimensions();
            w <= area.width && h <= area.height
        });
    if let Some(badge) = badge {
        frame.render_widget(badge.theme(theme), area);
    }
}

/// Create a centered layout with the given constraints.
///
/// Returns the center area that can be used for content.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_layout[1])[1]
}

/// Fixed-size rect centered in `area`, shrunk to leave a 2-cell margin.
pub fn modal_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
