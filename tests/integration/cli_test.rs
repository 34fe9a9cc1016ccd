//! Integration tests for argument handling and help output

use predicates::prelude::*;

use crate::helpers::TestEnv;

#[test]
fn help_lists_every_command() {
    let env = TestEnv::new();
    env.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("verified documentation"))
        .stdout(predicate::str::contains("landing"))
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn play_help_documents_timing_flags() {
    let env = TestEnv::new();
    env.command()
        .args(["play", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--skip"))
        .stdout(predicate::str::contains("--line-delay <MS>"))
        .stdout(predicate::str::contains("--char-delay <MS>"));
}

#[test]
fn version_includes_package_version() {
    let env = TestEnv::new();
    env.command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn out_of_range_step_is_a_usage_error() {
    let env = TestEnv::new();
    env.command()
        .args(["demo", "--step", "5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--step"));
}

#[test]
fn unknown_command_is_a_usage_error() {
    let env = TestEnv::new();
    env.command().arg("pricing").assert().code(2);
}

#[test]
fn completions_are_generated() {
    let env = TestEnv::new();
    env.command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("arbiter-demo"));
}
