// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the progress command.

use crate::prelude::*;

fn lists(temp: &tempfile::TempDir, initial: &str, fixed: &str) -> (String, String) {
    write(temp.path(), "initial.txt", initial);
    write(temp.path(), "fixed.txt", fixed);
    (
        temp.path().join("initial.txt").display().to_string(),
        temp.path().join("fixed.txt").display().to_string(),
    )
}

#[test]
fn reports_remaining_files_and_percentage() {
    let temp = tempfile::tempdir().unwrap();
    let (initial, fixed) = lists(&temp, "a.ts\nb.ts\nc.ts\n", "a.ts\nb.ts\n");

    let output = triage_cmd()
        .args(["progress", "--initial", &initial, "--fixed", &fixed, "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["initial_count"], 3);
    assert_eq!(value["fixed_count"], 2);
    assert_eq!(value["percentage"], 67);
    assert_eq!(value["remaining"], serde_json::json!(["c.ts"]));
    assert_eq!(value["all_processed"], false);
}

#[test]
fn opportunistic_fixes_push_past_one_hundred_percent() {
    let temp = tempfile::tempdir().unwrap();
    let (initial, fixed) = lists(&temp, "a.ts\n", "a.ts\nb.ts\n");

    let output = triage_cmd()
        .args(["progress", "--initial", &initial, "--fixed", &fixed, "-o", "json"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["percentage"], 150);
    assert_eq!(value["all_processed"], true);
}

#[test]
fn empty_lists_count_as_done() {
    let temp = tempfile::tempdir().unwrap();
    let (initial, fixed) = lists(&temp, "", "");

    triage_cmd()
        .args(["progress", "--initial", &initial, "--fixed", &fixed])
        .assert()
        .success()
        .stdout(predicates::str::contains("all files processed"));
}

#[test]
fn missing_list_file_is_a_config_error() {
    triage_cmd()
        .args(["progress", "--initial", "/nonexistent/a", "--fixed", "/nonexistent/b"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("cannot read list"));
}
