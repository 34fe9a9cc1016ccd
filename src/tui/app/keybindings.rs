//! Key handling for the landing page and the walkthrough.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::pages::demo::VERIFICATION_STEP;
use crate::pages::{DemoPage, LandingPage, Route, SECTIONS};
use crate::reveal::Clock;

/// Sections moved by PgUp/PgDn.
const PAGE_SECTIONS: usize = 3;

/// Outcome of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// Key handled (or ignored), stay on the page
    Continue,
    /// Leave the application
    Quit,
    /// Switch to another page
    Navigate(Route),
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

pub fn handle_landing_key<C: Clock>(page: &mut LandingPage<C>, key: KeyEvent) -> KeyResult {
    if is_quit(&key) {
        return KeyResult::Quit;
    }
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => page.scroll_down(),
        KeyCode::Up | KeyCode::Char('k') => page.scroll_up(),
        KeyCode::PageDown => page.scroll_to(page.current_section() + PAGE_SECTIONS),
        KeyCode::PageUp => page.scroll_to(page.current_section().saturating_sub(PAGE_SECTIONS)),
        KeyCode::Home => page.scroll_to(0),
        KeyCode::End => page.scroll_to(SECTIONS.len() - 1),
        KeyCode::Char('s') => page.skip_terminal(),
        KeyCode::Char('d') | KeyCode::Enter => return KeyResult::Navigate(Route::Demo),
        _ => {}
    }
    KeyResult::Continue
}

pub fn handle_demo_key<C: Clock + Clone>(page: &mut DemoPage<C>, key: KeyEvent) -> KeyResult {
    if is_quit(&key) {
        return KeyResult::Quit;
    }
    match key.code {
        KeyCode::Right | KeyCode::Char('l') => page.next_step(),
        KeyCode::Left | KeyCode::Char('h') => page.prev_step(),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(digit) = c.to_digit(10) {
                page.go_to_step(digit as usize - 1);
            }
        }
        KeyCode::Char('f') => page.cycle_function(),
        KeyCode::Char('g') => page.toggle_submission(true),
        KeyCode::Char('b') => page.toggle_submission(false),
        KeyCode::Char('v') => {
            if page.current_step() != VERIFICATION_STEP {
                page.go_to_step(VERIFICATION_STEP);
            }
            page.run_verification();
        }
        KeyCode::Char('s') => page.skip_terminal(),
        KeyCode::Esc => return KeyResult::Navigate(Route::Landing),
        _ => {}
    }
    KeyResult::Continue
}
