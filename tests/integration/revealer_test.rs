//! Integration tests for the line revealer through the public API

use std::time::Duration;

use arbiter_demo::data::pypi_dataset;
use arbiter_demo::pages::landing::build_terminal_lines;
use arbiter_demo::reveal::{
    parse_lines, Line, LineRevealer, ManualClock, PlaybackPhase, RevealTiming,
};

fn revealer(line_ms: u64, char_ms: u64) -> (ManualClock, LineRevealer<ManualClock>) {
    let clock = ManualClock::new();
    let revealer = LineRevealer::new(clock.clone(), RevealTiming::from_millis(line_ms, char_ms));
    (clock, revealer)
}

fn texts(lines: &[Line]) -> Vec<&str> {
    lines.iter().map(|l| l.text.as_str()).collect()
}

#[test]
fn typed_command_then_output_timeline() {
    let (clock, mut r) = revealer(50, 10);
    r.start(vec![Line::command("a"), Line::output("b")]);

    clock.set_ms(10);
    r.tick();
    assert_eq!(r.typing_buffer(), "a");
    assert!(r.revealed_lines().is_empty());

    clock.set_ms(60);
    r.tick();
    assert_eq!(r.typing_buffer(), "");
    assert_eq!(texts(r.revealed_lines()), vec!["a"]);

    clock.set_ms(110);
    r.tick();
    assert_eq!(texts(r.revealed_lines()), vec!["a", "b"]);
    assert!(r.is_finished());
    assert_eq!(r.phase(), PlaybackPhase::Finished);
}

#[test]
fn json_lines_play_to_completion() {
    let lines = parse_lines(
        r#"[
            {"text": "ls", "type": "command"},
            {"text": "", "type": "blank"},
            {"text": "done", "type": "success", "delay": 5}
        ]"#,
    )
    .unwrap();
    let (clock, mut r) = revealer(20, 1);
    r.start(lines.clone());

    let mut steps = 0;
    while !r.is_finished() {
        let wait = r.time_until_next().expect("running revealer has a deadline");
        clock.advance(wait);
        r.tick();
        steps += 1;
        assert!(steps < 100, "revealer did not finish");
    }
    assert_eq!(r.revealed_lines(), lines.as_slice());
    assert_eq!(r.typing_buffer(), "");
}

#[test]
fn skip_mid_typing_reveals_everything() {
    let lines = build_terminal_lines(pypi_dataset().unwrap());
    let (clock, mut r) = revealer(80, 20);
    r.start(lines.clone());

    clock.advance_ms(100);
    r.tick();
    assert!(!r.typing_buffer().is_empty());

    r.skip();
    assert!(r.is_finished());
    assert_eq!(r.typing_buffer(), "");
    assert_eq!(r.revealed_lines(), lines.as_slice());
    assert_eq!(r.time_until_next(), None);

    // Nothing left to fire
    clock.advance(Duration::from_secs(60));
    assert!(!r.tick());
}

#[test]
fn restart_after_finish_plays_again() {
    let (clock, mut r) = revealer(10, 1);
    r.start(vec![Line::output("x")]);
    clock.advance_ms(10);
    r.tick();
    assert!(r.is_finished());

    r.start(vec![Line::output("y")]);
    assert!(r.is_running());
    assert!(r.revealed_lines().is_empty());
    clock.advance_ms(10);
    r.tick();
    assert_eq!(texts(r.revealed_lines()), vec!["y"]);
}
