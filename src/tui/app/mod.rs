//! Terminal session shared by the interactive screens
//!
//! `App` owns the ratatui terminal. Creating one enters raw mode and the
//! alternate screen; dropping it restores the terminal, including on error
//! paths and panics that unwind through the caller.

pub mod demo_view;
pub mod keybindings;
pub mod landing_view;
pub mod layout;
pub mod modals;
pub mod status_footer;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

pub use keybindings::{handle_demo_key, handle_landing_key, KeyResult};

/// Owned terminal in raw mode on the alternate screen.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
}

impl App {
    /// Take over the terminal. `tick_rate` caps how long `next_event` waits.
    pub fn new(tick_rate: Duration) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }

        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            tick_rate,
        })
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Draw one frame.
    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Terminal size as (width, height).
    pub fn size(&self) -> Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    /// Wait for the next input event, or until `deadline` or the tick rate
    /// elapses, whichever is sooner.
    pub fn next_event(&self, deadline: Option<Duration>) -> Result<Option<Event>> {
        let timeout = poll_timeout(self.tick_rate, deadline);
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen, Show);
    }
}

/// Poll timeout for a pending deadline.
pub fn poll_timeout(tick_rate: Duration, deadline: Option<Duration>) -> Duration {
    deadline.map_or(tick_rate, |d| d.min(tick_rate))
}
