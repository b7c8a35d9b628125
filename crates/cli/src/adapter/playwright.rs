// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Playwright E2E adapter.
//!
//! Parses the list reporter's glyph-prefixed result lines. Browser workers
//! hold ports and contexts, so remediation workers require isolation.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

use super::common::js::{PackageManager, has_dependency, infer_package_manager, read_package_json};
use super::common::parse::{is_blank, regex};
use super::{Adapter, FrameworkConfig, FrameworkKind, ParallelStrategy, ValidationCommand};
use crate::detect::DetectionContext;
use crate::error::Error;
use crate::issue::{Issue, IssueKind, ParseOutcome, Severity};

/// Detected settings for a Playwright project.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PlaywrightConfig {
    pub project_root: PathBuf,
    pub package_manager: PackageManager,
    pub config_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// List-reporter failure: `✘  3 [chromium] › tests/login.spec.ts:10:5 › logs in (3.2s)`
static RESULT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    regex(r"^\s*[✘✗×]\s+\d+\s+(?:\[[^\]]+\]\s+›\s+)?(?P<file>\S+?):(?P<line>\d+):(?P<col>\d+)\s+›\s+(?P<msg>.+?)(?:\s+\(\d+(?:\.\d+)?m?s\))?$")
});

/// Playwright adapter.
pub struct PlaywrightAdapter;

impl PlaywrightAdapter {
    pub fn new() -> Self {
        Self
    }

    fn playwright_config(config: &FrameworkConfig) -> Result<&PlaywrightConfig, Error> {
        match config {
            FrameworkConfig::Playwright(c) => Ok(c),
            other => Err(Error::Config(format!(
                "playwright adapter given a {} config",
                other.kind().name()
            ))),
        }
    }

    fn parse_results(text: &str) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();
        for line in text.lines() {
            if is_blank(line) {
                continue;
            }
            match RESULT_LINE.captures(line) {
                Some(caps) => outcome.errors.push(Issue {
                    file: Some(caps["file"].to_string()),
                    line: caps["line"].parse().ok(),
                    column: caps["col"].parse().ok(),
                    severity: Severity::Error,
                    rule: None,
                    message: caps["msg"].to_string(),
                    kind: IssueKind::TestFailure,
                }),
                None => outcome.unmatched_lines += 1,
            }
        }
        outcome
    }
}

impl Default for PlaywrightAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Adapter for PlaywrightAdapter {
    fn kind(&self) -> FrameworkKind {
        FrameworkKind::Playwright
    }

    fn can_detect(&self, ctx: &DetectionContext) -> bool {
        if !ctx.file_exists("package.json") {
            return false;
        }
        if !ctx.glob("playwright.config.*").is_empty() {
            return true;
        }
        read_package_json(ctx).is_some_and(|pkg| has_dependency(&pkg, "@playwright/test"))
    }

    fn detect_config(&self, ctx: &DetectionContext) -> FrameworkConfig {
        FrameworkConfig::Playwright(PlaywrightConfig {
            project_root: ctx.project_root().to_path_buf(),
            package_manager: infer_package_manager(ctx),
            config_file: ctx
                .glob("playwright.config.*")
                .first()
                .map(|p| p.to_string_lossy().into_owned()),
            file: None,
        })
    }

    fn build_command(&self, config: &FrameworkConfig) -> Result<Vec<String>, Error> {
        Self::playwright_config(config)?;
        Err(Error::MissingTarget(
            "playwright is a test framework with no build step".to_string(),
        ))
    }

    fn test_command(&self, config: &FrameworkConfig) -> Result<String, Error> {
        Self::playwright_config(config)?;
        Ok("npx playwright test --reporter=list".to_string())
    }

    fn validation_commands(&self, config: &FrameworkConfig) -> Vec<ValidationCommand> {
        if Self::playwright_config(config).is_err() {
            return Vec::new();
        }
        vec![ValidationCommand {
            name: "test",
            command: "npx playwright test --reporter=list".to_string(),
            optional: false,
        }]
    }

    fn parse_build_output(&self, text: &str) -> ParseOutcome {
        Self::parse_results(text)
    }

    fn parse_validation_output(&self, text: &str, _validator: &str) -> ParseOutcome {
        Self::parse_results(text)
    }

    fn verify_command(&self, config: &FrameworkConfig) -> Option<String> {
        let file = config.file()?;
        Some(format!("npx playwright test {file} --reporter=list"))
    }

    fn resource_multiplier(&self) -> f64 {
        2.0
    }

    fn parallel_strategy(&self, cpu_cores: usize) -> ParallelStrategy {
        ParallelStrategy {
            max_workers: (cpu_cores / 2).clamp(1, 2),
            stagger_delay_ms: 1000,
            requires_isolation: true,
        }
    }
}

#[cfg(test)]
#[path = "playwright_tests.rs"]
mod tests;
