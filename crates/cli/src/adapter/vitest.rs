// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Vitest/Jest unit-test adapter.
//!
//! Both runners can scope a run to a single test file, so per-file
//! verification is supported directly.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use super::common::js::{
    PackageManager, has_dependency, infer_package_manager, read_package_json,
};
use super::common::parse::{is_blank, regex};
use super::{Adapter, FrameworkConfig, FrameworkKind, ParallelStrategy, ValidationCommand};
use crate::detect::DetectionContext;
use crate::error::Error;
use crate::issue::{Issue, IssueKind, ParseOutcome, Severity};

/// Which runner governs the project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestRunnerKind {
    #[default]
    Vitest,
    Jest,
}

impl TestRunnerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestRunnerKind::Vitest => "vitest",
            TestRunnerKind::Jest => "jest",
        }
    }
}

/// Detected settings for a Vitest/Jest project.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct VitestConfig {
    pub project_root: PathBuf,
    pub package_manager: PackageManager,
    pub runner: TestRunnerKind,
    pub config_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl VitestConfig {
    fn defaults(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            package_manager: PackageManager::Npm,
            runner: TestRunnerKind::Vitest,
            config_file: None,
            file: None,
        }
    }
}

/// `FAIL src/math.test.ts > add > carries` (also ✗/×/✘ glyph variants)
static FAIL_LINE: LazyLock<Regex> = LazyLock::new(|| {
    regex(r"^\s*(?:FAIL|✗|×|✘)\s+(?P<file>\S+\.(?:test|spec)\.[cm]?[jt]sx?)(?:\s*>\s*(?P<msg>.+))?$")
});

/// Vitest failure location frame: `❯ src/math.test.ts:42:7`
static FRAME_LINE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"^\s*❯\s+(?P<file>\S+):(?P<line>\d+):(?P<col>\d+)$"));

/// Vitest/Jest adapter.
pub struct VitestAdapter;

impl VitestAdapter {
    pub fn new() -> Self {
        Self
    }

    fn vitest_config(config: &FrameworkConfig) -> Result<&VitestConfig, Error> {
        match config {
            FrameworkConfig::Vitest(c) => Ok(c),
            other => Err(Error::Config(format!(
                "vitest adapter given a {} config",
                other.kind().name()
            ))),
        }
    }

    fn run_command(config: &VitestConfig) -> String {
        match config.runner {
            TestRunnerKind::Vitest => match &config.config_file {
                Some(file) => format!("npx vitest run --config {file}"),
                None => "npx vitest run".to_string(),
            },
            TestRunnerKind::Jest => match &config.config_file {
                Some(file) => format!("npx jest --config {file}"),
                None => "npx jest".to_string(),
            },
        }
    }

    fn parse_failures(text: &str) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();
        for line in text.lines() {
            if is_blank(line) {
                continue;
            }
            if let Some(caps) = FAIL_LINE.captures(line) {
                let message = caps
                    .name("msg")
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_else(|| "test file failed".to_string());
                outcome.errors.push(Issue {
                    file: Some(caps["file"].to_string()),
                    line: None,
                    column: None,
                    severity: Severity::Error,
                    rule: None,
                    message,
                    kind: IssueKind::TestFailure,
                });
            } else if let Some(caps) = FRAME_LINE.captures(line) {
                outcome.errors.push(Issue {
                    file: Some(caps["file"].to_string()),
                    line: caps["line"].parse().ok(),
                    column: caps["col"].parse().ok(),
                    severity: Severity::Error,
                    rule: None,
                    message: "failure location".to_string(),
                    kind: IssueKind::TestFailure,
                });
            } else {
                outcome.unmatched_lines += 1;
            }
        }
        outcome
    }
}

impl Default for VitestAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Adapter for VitestAdapter {
    fn kind(&self) -> FrameworkKind {
        FrameworkKind::Vitest
    }

    fn can_detect(&self, ctx: &DetectionContext) -> bool {
        if !ctx.file_exists("package.json") {
            return false;
        }
        if !ctx.glob("vitest.config.*").is_empty() || !ctx.glob("jest.config.*").is_empty() {
            return true;
        }
        let Some(pkg) = read_package_json(ctx) else {
            return false;
        };
        has_dependency(&pkg, "vitest") || has_dependency(&pkg, "jest") || pkg.get("jest").is_some()
    }

    fn detect_config(&self, ctx: &DetectionContext) -> FrameworkConfig {
        let mut config = VitestConfig::defaults(ctx.project_root());
        config.package_manager = infer_package_manager(ctx);

        let pkg = read_package_json(ctx);
        let has_vitest = pkg.as_ref().is_some_and(|p| has_dependency(p, "vitest"))
            || !ctx.glob("vitest.config.*").is_empty();
        if has_vitest {
            config.runner = TestRunnerKind::Vitest;
            config.config_file = ctx
                .glob("vitest.config.*")
                .first()
                .map(|p| p.to_string_lossy().into_owned());
        } else {
            config.runner = TestRunnerKind::Jest;
            config.config_file = ctx
                .glob("jest.config.*")
                .first()
                .map(|p| p.to_string_lossy().into_owned());
        }
        FrameworkConfig::Vitest(config)
    }

    /// Test frameworks have no build step; asking for one is a
    /// configuration error, not a build failure.
    fn build_command(&self, config: &FrameworkConfig) -> Result<Vec<String>, Error> {
        let config = Self::vitest_config(config)?;
        Err(Error::MissingTarget(format!(
            "{} is a test framework with no build step",
            config.runner.as_str()
        )))
    }

    fn test_command(&self, config: &FrameworkConfig) -> Result<String, Error> {
        let config = Self::vitest_config(config)?;
        Ok(Self::run_command(config))
    }

    fn validation_commands(&self, config: &FrameworkConfig) -> Vec<ValidationCommand> {
        let Ok(config) = Self::vitest_config(config) else {
            return Vec::new();
        };
        vec![ValidationCommand {
            name: "test",
            command: Self::run_command(config),
            optional: false,
        }]
    }

    fn parse_build_output(&self, text: &str) -> ParseOutcome {
        Self::parse_failures(text)
    }

    fn parse_validation_output(&self, text: &str, _validator: &str) -> ParseOutcome {
        Self::parse_failures(text)
    }

    fn verify_command(&self, config: &FrameworkConfig) -> Option<String> {
        let file = config.file()?;
        let FrameworkConfig::Vitest(config) = config else {
            return None;
        };
        match config.runner {
            TestRunnerKind::Vitest => Some(format!("npx vitest run {file}")),
            TestRunnerKind::Jest => Some(format!("npx jest {file}")),
        }
    }

    fn resource_multiplier(&self) -> f64 {
        1.5
    }

    fn parallel_strategy(&self, cpu_cores: usize) -> ParallelStrategy {
        ParallelStrategy {
            max_workers: cpu_cores.clamp(1, 4),
            stagger_delay_ms: 0,
            requires_isolation: false,
        }
    }
}

#[cfg(test)]
#[path = "vitest_tests.rs"]
mod tests;
