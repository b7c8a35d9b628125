#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use std::path::Path;

#[test]
fn captures_stdout_and_exit_code() {
    let output = run_shell("echo hello", Path::new(".")).unwrap();
    assert!(output.success());
    assert_eq!(output.stdout.trim(), "hello");
}

#[test]
fn nonzero_exit_is_not_an_invocation_error() {
    let output = run_shell("exit 3", Path::new(".")).unwrap();
    assert!(!output.success());
    assert_eq!(output.status, Some(3));
}

#[test]
fn combined_interleaves_stdout_then_stderr() {
    let output = run_shell("echo out; echo err >&2", Path::new(".")).unwrap();
    let combined = output.combined();
    assert!(combined.contains("out"));
    assert!(combined.contains("err"));
    let out_pos = combined.find("out").unwrap();
    let err_pos = combined.find("err").unwrap();
    assert!(out_pos < err_pos);
}

#[test]
fn combined_without_stderr_is_stdout() {
    let output = run_shell("echo only", Path::new(".")).unwrap();
    assert_eq!(output.combined(), output.stdout);
}

#[test]
fn runs_in_the_requested_directory() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("marker.txt"), "here").unwrap();
    let output = run_shell("ls", temp.path()).unwrap();
    assert!(output.stdout.contains("marker.txt"));
}
