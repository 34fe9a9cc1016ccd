//! Integration tests for the play command

use std::fs;

use predicates::prelude::*;

use crate::helpers::{fixture_path, TestEnv};

fn play_stdout(env: &TestEnv, args: &[&str]) -> String {
    let output = env.command().arg("play").args(args).output().unwrap();
    assert!(output.status.success(), "play failed: {:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn skip_prints_whole_sequence_without_colour() {
    let env = TestEnv::with_config("");
    let fixture = fixture_path("status_lines.json");
    let stdout = play_stdout(&env, &[fixture.to_str().unwrap(), "--skip"]);

    insta::assert_snapshot!(stdout.trim_end(), @r"
    $ arbiter-validator status

    3 miners online
    1 task pending
    0 submissions rejected
    ");
}

#[test]
fn piped_output_does_not_animate() {
    // Long delays would take minutes if they were honoured
    let env = TestEnv::with_config("[playback]\nline_delay_ms = 60000\nchar_delay_ms = 60000\n");
    let fixture = fixture_path("status_lines.json");
    let stdout = play_stdout(&env, &[fixture.to_str().unwrap()]);
    assert_eq!(stdout.lines().count(), 5);
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn default_sequence_is_task_generation_run() {
    let env = TestEnv::with_config("");
    let stdout = play_stdout(&env, &["--skip"]);
    let first = stdout.lines().next().unwrap();
    assert_eq!(
        first,
        "$ python generate_task.py ./sampled_functions --show-source"
    );
    assert!(stdout.contains("more packages"));
    assert!(stdout.contains("MINER TASK"));
}

#[test]
fn empty_sequence_prints_nothing() {
    let env = TestEnv::with_config("");
    let file = env.dir.path().join("empty.json");
    fs::write(&file, "[]").unwrap();
    let stdout = play_stdout(&env, &[file.to_str().unwrap()]);
    assert_eq!(stdout, "");
}

#[test]
fn missing_file_fails_with_path() {
    let env = TestEnv::with_config("");
    env.command()
        .args(["play", "does-not-exist.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read does-not-exist.json"));
}

#[test]
fn malformed_file_fails() {
    let env = TestEnv::with_config("");
    let file = env.dir.path().join("bad.json");
    fs::write(&file, r#"[{"type": "command"}]"#).unwrap();
    env.command()
        .args(["play", file.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid line file"));
}

#[test]
fn playback_is_logged_to_configured_file() {
    let env = TestEnv::with_config("[logging]\nlevel = \"debug\"\n");
    let fixture = fixture_path("status_lines.json");
    play_stdout(&env, &[fixture.to_str().unwrap(), "--skip"]);
    let log = fs::read_to_string(env.log_path()).unwrap();
    assert!(log.contains("playback starting"));
}
