//! Integration tests driving the site with a manual clock

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use arbiter_demo::data::{demo_functions, pypi_dataset};
use arbiter_demo::pages::{Route, TERMINAL_SECTION};
use arbiter_demo::reveal::{ManualClock, RevealTiming};
use arbiter_demo::tui::{DemoOptions, KeyResult, SiteState};

fn site() -> (ManualClock, SiteState<ManualClock>) {
    let clock = ManualClock::new();
    let options = DemoOptions {
        timing: RevealTiming::from_millis(10, 1),
        score_delay: Duration::from_millis(300),
        ..DemoOptions::default()
    };
    let state = SiteState::new(
        pypi_dataset().unwrap(),
        demo_functions().unwrap(),
        clock.clone(),
        options,
    );
    (clock, state)
}

fn press(state: &mut SiteState<ManualClock>, code: KeyCode) -> KeyResult {
    state.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Advance time until nothing is pending.
fn settle(clock: &ManualClock, state: &mut SiteState<ManualClock>) {
    for _ in 0..1_000 {
        match state.time_until_next() {
            Some(wait) => {
                clock.advance(wait);
                state.tick();
            }
            None => return,
        }
    }
    panic!("site never settled");
}

fn screen(state: &SiteState<ManualClock>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(110, 36)).unwrap();
    terminal.draw(|frame| state.render(frame)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..36)
        .map(|y| {
            (0..110)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn scroll_to_live_terminal_and_watch_it_finish() {
    let (clock, mut state) = site();
    for _ in 0..TERMINAL_SECTION {
        press(&mut state, KeyCode::Down);
    }
    assert!(state.landing().terminal().is_running());

    settle(&clock, &mut state);
    assert!(state.landing().terminal().is_finished());
    let text = screen(&state);
    assert!(text.contains("MINER TASK"));
    assert!(text.contains("terminal finished"));
}

#[test]
fn full_walkthrough_from_landing() {
    let (clock, mut state) = site();
    press(&mut state, KeyCode::Char('d'));
    assert_eq!(state.route(), Route::Demo);

    // Step 1: terminal selects the task
    settle(&clock, &mut state);
    assert!(screen(&state).contains("Selected: textutils.normalize.collapse_whitespace"));

    // Step 2: bad submission
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Char('b'));
    assert!(screen(&state).contains("This function does whitespace stuff."));

    // Step 3: verification
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Char('v'));
    assert!(!state.demo().unwrap().animate_scores());
    settle(&clock, &mut state);
    assert!(state.demo().unwrap().animate_scores());
    assert!(screen(&state).contains("rejected, no reward"));

    // Step 4: the network
    press(&mut state, KeyCode::Right);
    assert!(screen(&state).contains("TAO"));

    assert_eq!(press(&mut state, KeyCode::Esc), KeyResult::Continue);
    assert_eq!(state.route(), Route::Landing);
    assert_eq!(press(&mut state, KeyCode::Char('q')), KeyResult::Quit);
}

#[test]
fn switching_function_replays_step_one_terminal() {
    let (clock, mut state) = site();
    state.navigate(Route::Demo);
    settle(&clock, &mut state);

    press(&mut state, KeyCode::Char('f'));
    let demo = state.demo().unwrap();
    assert_eq!(demo.selected_function(), 1);
    assert!(demo.terminal().is_running());

    settle(&clock, &mut state);
    assert!(screen(&state).contains("Selected: reqhelper.retry.with_retry"));
}

#[test]
fn landing_terminal_replays_after_visiting_walkthrough() {
    let (clock, mut state) = site();
    for _ in 0..TERMINAL_SECTION {
        press(&mut state, KeyCode::Down);
    }
    assert!(state.landing().terminal().is_running());

    press(&mut state, KeyCode::Char('d'));
    assert_eq!(state.route(), Route::Demo);
    clock.advance_ms(60_000);
    press(&mut state, KeyCode::Esc);
    assert_eq!(state.route(), Route::Landing);

    // Overdue steps from before the visit must not fire on return
    assert!(!state.tick());
    assert!(state.landing().terminal().revealed_lines().is_empty());

    for _ in 0..TERMINAL_SECTION {
        press(&mut state, KeyCode::Down);
    }
    state.tick();
    let terminal = state.landing().terminal();
    assert!(terminal.is_running());
    assert!(terminal.revealed_lines().len() < terminal.lines().len());

    settle(&clock, &mut state);
    assert!(state.landing().terminal().is_finished());
}
