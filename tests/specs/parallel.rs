// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the resource calculator surface.

use crate::prelude::*;

#[test]
fn plain_output_is_a_bare_clamped_integer() {
    let output = triage_cmd()
        .args(["parallel", "--plain"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8_lossy(&output.stdout);
    let value: usize = text.trim().parse().expect("plain output parses as an integer");
    assert!((2..=6).contains(&value));
}

#[test]
fn json_output_carries_snapshot_and_limiting_factor() {
    let output = triage_cmd()
        .args(["parallel", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let max = value["result"]["max_parallel"].as_u64().unwrap();
    assert!((2..=6).contains(&max));
    assert!(value["result"]["limiting_factor"].is_string());
    assert!(value["snapshot"]["cpu_cores"].as_u64().unwrap() >= 1);
}

#[test]
fn invalid_reserve_is_a_config_error() {
    triage_cmd()
        .args(["parallel", "--reserve", "150%"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("out of range"));
}

#[test]
fn nonpositive_worker_memory_is_a_config_error() {
    triage_cmd()
        .args(["parallel", "--mem-per-worker", "0"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("positive"));
}

#[test]
fn framework_hints_weight_the_budget() {
    let output = triage_cmd()
        .args(["parallel", "-o", "json", "--framework", "playwright"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // Playwright workers are double-weight browser processes.
    assert!(value["mem_per_worker_gb"].as_f64().unwrap() > 3.0);
    assert_eq!(value["strategy"]["requires_isolation"], true);
}

#[test]
fn unknown_framework_is_a_config_error() {
    triage_cmd()
        .args(["parallel", "--framework", "gradle"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown framework"));
}

#[test]
fn reserve_accepts_absolute_and_percent_forms() {
    for reserve in ["10%", "1024MB", "1GB", "1"] {
        triage_cmd()
            .args(["parallel", "--plain", "--reserve", reserve])
            .assert()
            .success();
    }
}
