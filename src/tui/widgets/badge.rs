//! The Arbiter mark.
//!
//! An "A" with a verification chevron at its base, drawn at four sizes,
//! plus an inline "Arbiter Verified" pill.

use ratatui::{buffer::Buffer, layout::Rect, style::Modifier, widgets::Widget};
use unicode_width::UnicodeWidthStr;

use crate::tui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    /// Bold, emphasised mark
    Glow,
    /// Inline "Arbiter Verified" pill
    Badge,
}

const VERIFIED: &str = "( ▲ Arbiter Verified )";

const MARK_SM: &[&str] = &["▲"];

const MARK_MD: &[&str] = &[" /\\ ", "/^^\\"];

const MARK_LG: &[&str] = &[
    "   /\\   ",
    "  /  \\  ",
    " / /\\ \\ ",
    "/_/^^\\_\\",
];

const MARK_XL: &[&str] = &[
    "     /\\     ",
    "    /  \\    ",
    "   / /\\ \\   ",
    "  / /  \\ \\  ",
    " / /____\\ \\ ",
    "/_/  /\\  \\_\\",
];

pub struct Badge {
    size: BadgeSize,
    variant: BadgeVariant,
    theme: Theme,
}

impl Badge {
    pub fn new(size: BadgeSize, variant: BadgeVariant) -> Self {
        Self {
            size,
            variant,
            theme: Theme::default(),
        }
    }

    /// The inline verified pill.
    pub fn verified() -> Self {
        Self::new(BadgeSize::Sm, BadgeVariant::Badge)
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Rows of the drawing for this size and variant.
    pub fn art(&self) -> &'static [&'static str] {
        if self.variant == BadgeVariant::Badge {
            return &[VERIFIED];
        }
        match self.size {
            BadgeSize::Sm => MARK_SM,
            BadgeSize::Md => MARK_MD,
            BadgeSize::Lg => MARK_LG,
            BadgeSize::Xl => MARK_XL,
        }
    }

    /// (width, height) in cells.
    pub fn dimensions(&self) -> (u16, u16) {
        let art = self.art();
        let width = art.iter().map(|row| row.width()).max().unwrap_or(0);
        (width as u16, art.len() as u16)
    }
}

impl Widget for Badge {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = match self.variant {
            BadgeVariant::Default | BadgeVariant::Badge => self.theme.accent_style(),
            BadgeVariant::Glow => self.theme.accent_bold_style(),
        };
        let (width, _) = self.dimensions();
        let x = area.x + area.width.saturating_sub(width) / 2;

        for (i, row) in self.art().iter().enumerate() {
            let y = area.y + i as u16;
            if y >= area.bottom() {
                break;
            }
            buf.set_stringn(x, y, row, area.right().saturating_sub(x) as usize, style);
        }

        if self.variant == BadgeVariant::Glow {
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    buf[(x, y)].modifier.insert(Modifier::BOLD);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_lines;

    #[test]
    fn sizes_grow() {
        let dims: Vec<(u16, u16)> = [BadgeSize::Sm, BadgeSize::Md, BadgeSize::Lg, BadgeSize::Xl]
            .into_iter()
            .map(|s| Badge::new(s, BadgeVariant::Default).dimensions())
            .collect();
        assert_eq!(dims[0], (1, 1));
        assert!(dims.windows(2).all(|w| w[0].0 < w[1].0 && w[0].1 < w[1].1));
    }

    #[test]
    fn art_rows_have_equal_width() {
        for art in [MARK_MD, MARK_LG, MARK_XL] {
            let first = art[0].width();
            assert!(art.iter().all(|row| row.width() == first));
        }
    }

    #[test]
    fn verified_pill_renders_label() {
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        Badge::verified().render(area, &mut buf);
        assert!(buffer_lines(&buf)[0].contains("Arbiter Verified"));
    }

    #[test]
    fn mark_is_centered() {
        let area = Rect::new(0, 0, 8, 2);
        let mut buf = Buffer::empty(area);
        Badge::new(BadgeSize::Md, BadgeVariant::Default).render(area, &mut buf);
        assert_eq!(buffer_lines(&buf)[0], "   /\\   ");
    }

    #[test]
    fn glow_is_bold() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        Badge::new(BadgeSize::Md, BadgeVariant::Glow).render(area, &mut buf);
        assert!(buf[(1, 0)].modifier.contains(Modifier::BOLD));
    }
}
