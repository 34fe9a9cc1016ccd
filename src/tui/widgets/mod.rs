//! TUI widgets for the Arbiter demo
//!
//! Reusable UI components for the terminal interface.

pub mod badge;
pub mod code_block;
pub mod score_bar;
pub mod step_indicator;
pub mod terminal_panel;

pub use badge::{Badge, BadgeSize, BadgeVariant};
pub use code_block::CodeBlock;
pub use score_bar::ScoreBar;
pub use step_indicator::StepIndicator;
pub use terminal_panel::TerminalPanel;

/// Rows of a buffer as plain strings, for assertions.
#[cfg(test)]
pub(crate) fn buffer_lines(buf: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
