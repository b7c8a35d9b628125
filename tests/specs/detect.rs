// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for framework detection.

use crate::prelude::*;

#[test]
fn typescript_project_is_detected_as_json_contract() {
    let temp = project(&[
        ("package.json", r#"{"devDependencies": {"typescript": "5"}}"#),
        ("tsconfig.json", "{}"),
    ]);

    let output = triage_cmd()
        .args(["detect", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let contract: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("detect emits valid JSON");
    let entries = contract.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["framework"], "typescript");
    assert_eq!(entries[0]["displayName"], "TypeScript/JavaScript");
    assert_eq!(entries[0]["buildType"], "typescript");
}

#[test]
fn monorepo_lists_every_framework() {
    let temp = project(&[
        ("web/package.json", r#"{"devDependencies": {"typescript": "5"}}"#),
        ("web/tsconfig.json", "{}"),
        ("api/App.sln", ""),
    ]);

    let output = triage_cmd()
        .args(["detect", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    let contract: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let frameworks: Vec<&str> = contract
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["framework"].as_str().unwrap())
        .collect();
    assert!(frameworks.contains(&"typescript"));
    assert!(frameworks.contains(&"dotnet"));
}

#[test]
fn empty_directory_is_a_config_error_with_output() {
    let temp = tempfile::tempdir().unwrap();

    triage_cmd()
        .args(["detect", "-o", "json"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stdout(predicates::str::contains("[]"))
        .stderr(predicates::str::contains("no detectable project"));
}

#[test]
fn text_output_names_framework_and_root() {
    let temp = project(&[("App.sln", "")]);

    triage_cmd()
        .arg("detect")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("dotnet (.NET, build)"));
}
