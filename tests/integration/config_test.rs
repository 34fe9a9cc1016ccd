//! Integration tests for the config subcommands

use std::fs;

use predicates::prelude::*;

use crate::helpers::TestEnv;

#[test]
fn show_prints_defaults_when_file_missing() {
    let env = TestEnv::new();
    env.command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found, showing defaults"))
        .stdout(predicate::str::contains("line_delay_ms = 80"))
        .stdout(predicate::str::contains("theme = \"arbiter\""));
}

#[test]
fn show_reflects_file_values() {
    let env = TestEnv::with_config("[playback]\nline_delay_ms = 5\n");
    env.command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("line_delay_ms = 5"))
        .stdout(predicate::str::contains("char_delay_ms = 20"));
}

#[test]
fn show_reports_parse_errors() {
    let env = TestEnv::new();
    fs::write(env.config_path(), "[playback\n").unwrap();
    env.command()
        .args(["config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn migrate_yes_adds_missing_sections() {
    let env = TestEnv::new();
    fs::write(env.config_path(), "# mine\n[playback]\nline_delay_ms = 5\n").unwrap();

    env.command()
        .args(["config", "migrate", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config updated successfully."));

    let content = fs::read_to_string(env.config_path()).unwrap();
    assert!(content.starts_with("# mine"));
    assert!(content.contains("line_delay_ms = 5"));
    assert!(content.contains("char_delay_ms = 20"));
    assert!(content.contains("[ui]"));
    assert!(content.contains("tick_rate_ms = 50"));
}

#[test]
fn migrate_without_tty_makes_no_changes() {
    let env = TestEnv::new();
    fs::write(env.config_path(), "[playback]\n").unwrap();

    env.command()
        .args(["config", "migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes made."));

    assert_eq!(fs::read_to_string(env.config_path()).unwrap(), "[playback]\n");
}

#[test]
fn migrate_creates_missing_file() {
    let env = TestEnv::new();
    env.command()
        .args(["config", "migrate", "-y"])
        .assert()
        .success();

    let content = fs::read_to_string(env.config_path()).unwrap();
    assert!(content.contains("[demo]"));
    assert!(content.contains("score_reveal_delay_ms = 300"));
}

#[test]
fn migrate_up_to_date_file_is_untouched() {
    let env = TestEnv::new();
    env.command().args(["config", "migrate", "-y"]).assert().success();
    env.command()
        .args(["config", "migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config is already up to date."));
}

#[test]
fn show_lists_resolved_values() {
    let env = TestEnv::with_config("[playback]\nline_delay_ms = 5\n[ui]\ntheme = \"ocean\"\n");
    env.command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "# playback: 5ms per line, 20ms per character",
        ))
        .stdout(predicate::str::contains("# theme: ocean"))
        .stdout(predicate::str::contains("# walkthrough opens on: "))
        .stdout(predicate::str::contains("# log file: ").and(predicate::str::contains("demo.log")));
}

#[test]
fn show_warns_about_missing_default_function() {
    let env = TestEnv::with_config("[demo]\ndefault_function = 99\n");
    env.command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("function 100 (not available)"))
        .stdout(predicate::str::contains("warning: demo.default_function = 99"));
}

#[test]
fn migrate_rejects_unknown_theme_without_writing() {
    let env = TestEnv::new();
    let original = "[ui]\ntheme = \"neon\"\n";
    fs::write(env.config_path(), original).unwrap();

    env.command()
        .args(["config", "migrate", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config"))
        .stderr(predicate::str::contains("neon"));

    assert_eq!(fs::read_to_string(env.config_path()).unwrap(), original);
}

#[test]
fn migrate_previews_added_lines() {
    let env = TestEnv::new();
    fs::write(env.config_path(), "[playback]\nline_delay_ms = 5\n").unwrap();

    env.command()
        .args(["config", "migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  [playback]"))
        .stdout(predicate::str::contains("+ char_delay_ms = 20"))
        .stdout(predicate::str::contains("+ [demo]"))
        .stdout(predicate::str::contains("+ line_delay_ms").not());
}

#[test]
fn edit_creates_file_and_checks_it() {
    let env = TestEnv::new();
    env.command()
        .args(["config", "edit"])
        .env("EDITOR", "true")
        .env_remove("VISUAL")
        .assert()
        .success()
        .stdout(predicate::str::contains("Opening"))
        .stdout(predicate::str::contains("Config is valid."));

    assert!(env.config_path().exists());
}

#[test]
fn edit_reports_failing_editor() {
    let env = TestEnv::new();
    env.command()
        .args(["config", "edit"])
        .env("EDITOR", "false")
        .env_remove("VISUAL")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Editor false exited"));
}
