#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::adapter::Adapter;
use std::fs;

fn project(files: &[(&str, &str)]) -> tempfile::TempDir {
    let temp = tempfile::tempdir().unwrap();
    for (path, content) in files {
        fs::write(temp.path().join(path), content).unwrap();
    }
    temp
}

#[test]
fn detects_playwright_config() {
    let temp = project(&[("package.json", "{}"), ("playwright.config.ts", "")]);
    let ctx = DetectionContext::new(temp.path(), 4, &[]);
    assert!(PlaywrightAdapter::new().can_detect(&ctx));
}

#[test]
fn detects_playwright_dependency() {
    let temp =
        project(&[("package.json", r#"{"devDependencies": {"@playwright/test": "1.48"}}"#)]);
    let ctx = DetectionContext::new(temp.path(), 4, &[]);
    assert!(PlaywrightAdapter::new().can_detect(&ctx));
}

#[test]
fn test_command_uses_list_reporter() {
    let temp = project(&[("package.json", "{}"), ("playwright.config.ts", "")]);
    let ctx = DetectionContext::new(temp.path(), 4, &[]);
    let config = PlaywrightAdapter::new().detect_config(&ctx);
    let command = PlaywrightAdapter::new().test_command(&config).unwrap();
    assert_eq!(command, "npx playwright test --reporter=list");
}

#[test]
fn verify_command_scopes_to_one_spec() {
    let temp = project(&[("package.json", "{}"), ("playwright.config.ts", "")]);
    let ctx = DetectionContext::new(temp.path(), 4, &[]);
    let config = PlaywrightAdapter::new().detect_config(&ctx).with_file("tests/login.spec.ts");
    let command = PlaywrightAdapter::new().verify_command(&config);
    assert_eq!(
        command.as_deref(),
        Some("npx playwright test tests/login.spec.ts --reporter=list")
    );
}

#[test]
fn parses_glyph_prefixed_failures() {
    let output = "\
  ✓  1 [chromium] › tests/home.spec.ts:5:3 › renders (812ms)\n\
  ✘  2 [chromium] › tests/login.spec.ts:10:5 › logs in (3.2s)\n\
  ✘  3 [firefox] › tests/login.spec.ts:24:5 › rejects bad password (1s)\n";
    let outcome = PlaywrightAdapter::new().parse_build_output(output);

    assert_eq!(outcome.errors.len(), 2);
    let first = &outcome.errors[0];
    assert_eq!(first.file.as_deref(), Some("tests/login.spec.ts"));
    assert_eq!(first.line, Some(10));
    assert_eq!(first.column, Some(5));
    assert_eq!(first.message, "logs in");
    assert_eq!(first.kind, crate::issue::IssueKind::TestFailure);
    // Passing lines are not findings.
    assert_eq!(outcome.unmatched_lines, 1);
}

#[test]
fn failure_without_project_tag_still_parses() {
    let output = "  ✘  1 tests/smoke.spec.ts:3:1 › boots (90ms)\n";
    let outcome = PlaywrightAdapter::new().parse_build_output(output);
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].file.as_deref(), Some("tests/smoke.spec.ts"));
}

#[test]
fn summary_lines_are_unmatched() {
    let output = "  2 failed\n  1 passed (5s)\n";
    let outcome = PlaywrightAdapter::new().parse_build_output(output);
    assert!(outcome.errors.is_empty());
    assert_eq!(outcome.unmatched_lines, 2);
}

#[test]
fn workers_require_isolation() {
    let strategy = PlaywrightAdapter::new().parallel_strategy(8);
    assert!(strategy.requires_isolation);
    assert!(strategy.max_workers <= 2);
    assert!(strategy.stagger_delay_ms > 0);
}
