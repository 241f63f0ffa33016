// Integration tests for the repocheck CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Builds a Command isolated from any user or working-directory config.
fn repocheck(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("repocheck").expect("binary should exist");
    cmd.env("HOME", home.path())
        .env_remove("RUST_LOG")
        .current_dir(home.path());
    cmd
}

#[test]
fn cli_version_flag() {
    let home = TempDir::new().expect("temp dir should be created");
    repocheck(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("repocheck"));
}

#[test]
fn cli_help_flag() {
    let home = TempDir::new().expect("temp dir should be created");
    repocheck(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Repository quality gate"));
}

#[test]
fn verify_requires_path() {
    let home = TempDir::new().expect("temp dir should be created");
    repocheck(&home)
        .arg("verify")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn search_rejects_no_verify_with_include_failing() {
    let home = TempDir::new().expect("temp dir should be created");
    repocheck(&home)
        .args(["search", "snapshots.json", "--no-verify", "--include-failing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn search_rejects_diverse_with_topic() {
    let home = TempDir::new().expect("temp dir should be created");
    repocheck(&home)
        .args(["search", "snapshots.json", "--diverse", "--topic", "cli"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn checks_prints_rubric_table() {
    let home = TempDir::new().expect("temp dir should be created");
    repocheck(&home)
        .arg("checks")
        .assert()
        .success()
        .stdout(predicate::str::contains("| git_repository | critical | 10 |"))
        .stdout(predicate::str::contains("| network_usage | warning | 5 |"))
        .stdout(predicate::str::contains("pass threshold: 75/100"));
}

#[test]
fn checks_reflects_configured_pass_threshold() {
    let home = TempDir::new().expect("temp dir should be created");
    std::fs::write(
        home.path().join("repocheck.toml"),
        "[rubric]\npass_threshold = 85\n",
    )
    .expect("config should write");

    repocheck(&home)
        .arg("checks")
        .assert()
        .success()
        .stdout(predicate::str::contains("pass threshold: 85/100"));
}

#[test]
fn invalid_config_is_a_runtime_failure() {
    let home = TempDir::new().expect("temp dir should be created");
    std::fs::write(
        home.path().join("repocheck.toml"),
        "[rubric]\npass_threshold = 150\n",
    )
    .expect("config should write");

    repocheck(&home)
        .arg("checks")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("pass_threshold"));
}
