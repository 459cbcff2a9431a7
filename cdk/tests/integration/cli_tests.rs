//! Integration tests for argument parsing.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cdk_app() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("customer-agent-cdk"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_cli_help_flag_shows_help() {
    cdk_app()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("CustomerAgentStack"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    cdk_app()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("customer-agent-cdk"));
}

#[test]
fn test_cli_unexpected_argument_exits_two() {
    let dir = TempDir::new().expect("temp dir");
    cdk_app()
        .arg("deploy")
        .env("CDK_OUTDIR", dir.path().join("cdk.out"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unexpected argument"));
    assert!(!dir.path().join("cdk.out").exists());
}

#[test]
fn test_cli_unknown_flag_exits_two() {
    cdk_app().arg("--account").assert().code(2);
}
