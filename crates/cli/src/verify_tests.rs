#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::adapter::{BuildConfiguration, DotNetAdapter, DotNetConfig};
use crate::issue::{IssueKind, Severity};

fn dotnet_config(root: &std::path::Path) -> FrameworkConfig {
    FrameworkConfig::DotNet(DotNetConfig {
        project_root: root.to_path_buf(),
        solution: Some("App.sln".to_string()),
        projects: Vec::new(),
        configuration: BuildConfiguration::Debug,
        has_format: false,
        file: None,
    })
}

fn issue(file: &str, message: &str) -> Issue {
    Issue {
        file: Some(file.to_string()),
        line: Some(1),
        column: Some(1),
        severity: Severity::Error,
        rule: Some("TS2304".to_string()),
        message: message.to_string(),
        kind: IssueKind::TypeError,
    }
}

#[test]
fn frameworks_without_isolation_defer() {
    let temp = tempfile::tempdir().unwrap();
    let adapter = DotNetAdapter::new(Vec::new(), BuildConfiguration::Debug);
    let outcome = verify_file(&adapter, &dotnet_config(temp.path()), "src/Service.cs").unwrap();
    assert_eq!(outcome, VerifyOutcome::Deferred);
    assert!(outcome.provisionally_fixed());
}

#[test]
fn deferral_does_not_run_any_command() {
    // The project root does not even exist; a spawned command would fail.
    let adapter = DotNetAdapter::new(Vec::new(), BuildConfiguration::Debug);
    let config = dotnet_config(std::path::Path::new("/nonexistent/triage-test"));
    let outcome = verify_file(&adapter, &config, "src/Service.cs").unwrap();
    assert_eq!(outcome, VerifyOutcome::Deferred);
}

#[test]
fn filter_keeps_only_the_target_file() {
    let issues = vec![
        issue("src/app.ts", "Cannot find name 'x'"),
        issue("/work/repo/src/app.ts", "Cannot find name 'y'"),
        issue("src/other.ts", "Cannot find name 'z'"),
    ];
    let remaining = filter_to_file(issues, "src/app.ts");
    assert_eq!(remaining.len(), 2);
    assert!(remaining.iter().all(|i| i.file.as_deref().unwrap().ends_with("app.ts")));
}

#[test]
fn filter_drops_issues_without_files() {
    let mut bare = issue("src/app.ts", "m");
    bare.file = None;
    let remaining = filter_to_file(vec![bare], "src/app.ts");
    assert!(remaining.is_empty());
}

#[test]
fn issues_remain_is_not_provisionally_fixed() {
    let outcome = VerifyOutcome::IssuesRemain(vec![issue("src/app.ts", "m")]);
    assert!(!outcome.provisionally_fixed());
}
