// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for behavioral specs.

use std::fs;
use std::path::Path;

/// Command builder for the triage binary.
pub fn triage_cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("triage").expect("binary builds")
}

/// A throwaway project directory populated with the given files.
pub fn project(files: &[(&str, &str)]) -> tempfile::TempDir {
    let temp = tempfile::tempdir().expect("tempdir");
    for (path, content) in files {
        write(temp.path(), path, content);
    }
    temp
}

pub fn write(root: &Path, path: &str, content: &str) {
    let full = root.join(path);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).expect("mkdir");
    }
    fs::write(full, content).expect("write fixture");
}
