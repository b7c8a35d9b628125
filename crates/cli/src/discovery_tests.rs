#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use std::fs;

#[test]
fn finds_config_in_start_directory() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("triage.toml"), "").unwrap();
    let found = find_config(temp.path()).unwrap();
    assert_eq!(found, temp.path().join("triage.toml"));
}

#[test]
fn walks_up_to_parent_directories() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("triage.toml"), "").unwrap();
    let nested = temp.path().join("a/b");
    fs::create_dir_all(&nested).unwrap();
    let found = find_config(&nested).unwrap();
    assert_eq!(found, temp.path().join("triage.toml"));
}

#[test]
fn stops_at_git_root() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("triage.toml"), "").unwrap();
    let repo = temp.path().join("repo");
    fs::create_dir_all(repo.join(".git")).unwrap();
    let nested = repo.join("src");
    fs::create_dir_all(&nested).unwrap();
    // The config above the git root is out of scope.
    assert!(find_config(&nested).is_none());
}

#[test]
fn missing_config_is_none() {
    let temp = tempfile::tempdir().unwrap();
    let repo = temp.path().join("repo");
    fs::create_dir_all(repo.join(".git")).unwrap();
    assert!(find_config(&repo).is_none());
}
