// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specifications for the triage CLI.
//!
//! These tests are black-box: they invoke the binary and verify stdout,
//! stderr, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

#[path = "specs/detect.rs"]
mod detect;

#[path = "specs/parallel.rs"]
mod parallel;

#[path = "specs/progress.rs"]
mod progress;

use prelude::*;

#[test]
fn help_exits_successfully() {
    triage_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("triage"));
}

#[test]
fn version_exits_successfully() {
    triage_cmd().arg("--version").assert().success();
}

#[test]
fn init_writes_config_once() {
    let temp = tempfile::tempdir().unwrap();
    triage_cmd()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success();
    assert!(temp.path().join("triage.toml").exists());

    // Second run without --force refuses.
    triage_cmd()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("already exists"));

    triage_cmd()
        .args(["init", "--force"])
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn completions_emit_shell_script() {
    triage_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicates::str::contains("triage"));
}
