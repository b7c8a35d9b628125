#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn severity_from_word_is_case_insensitive() {
    assert_eq!(Severity::from_word("Warning"), Severity::Warning);
    assert_eq!(Severity::from_word("error"), Severity::Error);
}

#[test]
fn issue_kind_serializes_kebab_case() {
    let json = serde_json::to_string(&IssueKind::TestFailure).unwrap();
    assert_eq!(json, r#""test-failure""#);
    let json = serde_json::to_string(&IssueKind::BuildError).unwrap();
    assert_eq!(json, r#""build-error""#);
}

#[test]
fn merge_preserves_encounter_order_and_sums_unmatched() {
    let mut a = ParseOutcome {
        errors: vec![issue("a.ts")],
        excluded_warnings: vec![],
        unmatched_lines: 3,
    };
    a.merge(ParseOutcome {
        errors: vec![issue("b.ts")],
        excluded_warnings: vec![],
        unmatched_lines: 2,
    });
    assert_eq!(a.unmatched_lines, 5);
    let files: Vec<_> = a.errors.iter().map(|i| i.file.as_deref().unwrap()).collect();
    assert_eq!(files, vec!["a.ts", "b.ts"]);
}

#[test]
fn excluded_warnings_do_not_block_clean() {
    let outcome = ParseOutcome {
        errors: vec![],
        excluded_warnings: vec![ExcludedWarning {
            file: None,
            rule: "NU1902".to_string(),
            message: "advisory".to_string(),
            security: true,
        }],
        unmatched_lines: 0,
    };
    assert!(outcome.is_clean());
}

fn issue(file: &str) -> Issue {
    Issue {
        file: Some(file.to_string()),
        line: Some(1),
        column: Some(1),
        severity: Severity::Error,
        rule: None,
        message: "boom".to_string(),
        kind: IssueKind::BuildError,
    }
}
