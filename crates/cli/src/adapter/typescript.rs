// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! TypeScript/JavaScript build adapter.
//!
//! Detects package.json projects with a TypeScript toolchain, synthesizes
//! package-manager-prefixed commands, and parses `tsc`, ESLint (stylish),
//! and Prettier (`--check`) output.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use super::common::js::{
    PackageManager, has_dependency, infer_package_manager, read_package_json, script_named,
};
use super::common::parse::{Prescreen, is_blank, regex};
use super::{Adapter, FrameworkConfig, FrameworkKind, ParallelStrategy, ValidationCommand};
use crate::detect::DetectionContext;
use crate::error::Error;
use crate::issue::{Issue, IssueKind, ParseOutcome, Severity};

/// Detected settings for a TypeScript/JavaScript project.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TypeScriptConfig {
    pub project_root: PathBuf,
    pub package_manager: PackageManager,
    /// package.json script that performs the build, when one is declared.
    pub build_script: Option<String>,
    pub tsconfig: Option<String>,
    pub test_script: Option<String>,
    pub has_eslint: bool,
    pub has_prettier: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl TypeScriptConfig {
    /// Baseline config before detection overrides anything.
    fn defaults(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            package_manager: PackageManager::Npm,
            build_script: None,
            tsconfig: None,
            test_script: None,
            has_eslint: false,
            has_prettier: false,
            file: None,
        }
    }
}

/// `src/file.ts(42,15): error TS2304: message`
static TSC_PAREN: LazyLock<Regex> = LazyLock::new(|| {
    regex(r"^(?P<file>\S[^()]*)\((?P<line>\d+),(?P<col>\d+)\): (?P<sev>error|warning) (?P<rule>TS\d+): (?P<msg>.*)$")
});

/// `src/file.ts:42:15 - error TS2304: message` (pretty output)
static TSC_COLON: LazyLock<Regex> = LazyLock::new(|| {
    regex(r"^(?P<file>\S[^:]*):(?P<line>\d+):(?P<col>\d+) - (?P<sev>error|warning) (?P<rule>TS\d+): (?P<msg>.*)$")
});

/// ESLint stylish issue row: `  12:3  error  message  rule-name`
static ESLINT_ROW: LazyLock<Regex> = LazyLock::new(|| {
    regex(r"^\s+(?P<line>\d+):(?P<col>\d+)\s+(?P<sev>error|warning)\s+(?P<msg>.+?)\s{2,}(?P<rule>[@\w][\w/-]*)$")
});

/// ESLint stylish file header: a bare path on its own line.
static ESLINT_HEADER: LazyLock<Regex> =
    LazyLock::new(|| regex(r"^(?P<file>[^\s].*\.[cm]?[jt]sx?)$"));

/// Prettier check finding: `[warn] src/app.ts`
static PRETTIER_FILE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"^\[warn\]\s+(?P<file>\S+\.\w+)$"));

/// TypeScript/JavaScript adapter.
pub struct TypeScriptAdapter;

impl TypeScriptAdapter {
    pub fn new() -> Self {
        Self
    }

    fn typescript_config(config: &FrameworkConfig) -> Result<&TypeScriptConfig, Error> {
        match config {
            FrameworkConfig::TypeScript(c) => Ok(c),
            other => Err(Error::Config(format!(
                "typescript adapter given a {} config",
                other.kind().name()
            ))),
        }
    }

    /// The whole-project type-check command, independent of build scripts.
    fn typecheck_command(config: &TypeScriptConfig) -> Option<String> {
        let tsconfig = config.tsconfig.as_deref()?;
        Some(format!("npx tsc --noEmit -p {tsconfig}"))
    }

    fn parse_tsc(text: &str) -> ParseOutcome {
        let screen = Prescreen::diagnostics();
        let mut outcome = ParseOutcome::default();
        for line in text.lines() {
            if is_blank(line) {
                continue;
            }
            if !screen.hit(line) {
                outcome.unmatched_lines += 1;
                continue;
            }
            // First match wins; no further patterns are tried for the line.
            let caps = TSC_PAREN.captures(line).or_else(|| TSC_COLON.captures(line));
            match caps {
                Some(caps) => outcome.errors.push(Issue {
                    file: Some(caps["file"].trim().to_string()),
                    line: caps["line"].parse().ok(),
                    column: caps["col"].parse().ok(),
                    severity: Severity::from_word(&caps["sev"]),
                    rule: Some(caps["rule"].to_string()),
                    message: caps["msg"].to_string(),
                    kind: IssueKind::TypeError,
                }),
                None => outcome.unmatched_lines += 1,
            }
        }
        outcome
    }

    fn parse_eslint(text: &str) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();
        let mut current_file: Option<String> = None;
        for line in text.lines() {
            if is_blank(line) {
                continue;
            }
            if let Some(caps) = ESLINT_ROW.captures(line) {
                let Some(file) = current_file.clone() else {
                    // Issue row with no preceding header; drop it.
                    outcome.unmatched_lines += 1;
                    continue;
                };
                outcome.errors.push(Issue {
                    file: Some(file),
                    line: caps["line"].parse().ok(),
                    column: caps["col"].parse().ok(),
                    severity: Severity::from_word(&caps["sev"]),
                    rule: Some(caps["rule"].to_string()),
                    message: caps["msg"].to_string(),
                    kind: IssueKind::LintError,
                });
            } else if let Some(caps) = ESLINT_HEADER.captures(line) {
                current_file = Some(caps["file"].to_string());
            } else {
                // Summary lines ("✖ 3 problems") and anything else.
                outcome.unmatched_lines += 1;
            }
        }
        outcome
    }

    fn parse_prettier(text: &str) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();
        for line in text.lines() {
            if is_blank(line) {
                continue;
            }
            match PRETTIER_FILE.captures(line) {
                Some(caps) => outcome.errors.push(Issue {
                    file: Some(caps["file"].to_string()),
                    line: None,
                    column: None,
                    severity: Severity::Warning,
                    rule: None,
                    message: "file is not formatted".to_string(),
                    kind: IssueKind::FormatError,
                }),
                None => outcome.unmatched_lines += 1,
            }
        }
        outcome
    }
}

impl Default for TypeScriptAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Adapter for TypeScriptAdapter {
    fn kind(&self) -> FrameworkKind {
        FrameworkKind::TypeScript
    }

    fn can_detect(&self, ctx: &DetectionContext) -> bool {
        if !ctx.file_exists("package.json") {
            return false;
        }
        if ctx.file_exists("tsconfig.json") {
            return true;
        }
        let Some(pkg) = read_package_json(ctx) else {
            return false;
        };
        has_dependency(&pkg, "typescript") || script_named(&pkg, "build").is_some()
    }

    fn detect_config(&self, ctx: &DetectionContext) -> FrameworkConfig {
        let mut config = TypeScriptConfig::defaults(ctx.project_root());
        config.package_manager = infer_package_manager(ctx);
        if ctx.file_exists("tsconfig.json") {
            config.tsconfig = Some("tsconfig.json".to_string());
        }
        if let Some(pkg) = read_package_json(ctx) {
            config.build_script = script_named(&pkg, "build");
            config.test_script = script_named(&pkg, "test");
            config.has_eslint = has_dependency(&pkg, "eslint")
                || ctx.glob("eslint.config.*").first().is_some()
                || ctx.file_exists(".eslintrc.json");
            config.has_prettier = has_dependency(&pkg, "prettier")
                || ctx.glob("prettier.config.*").first().is_some()
                || ctx.file_exists(".prettierrc");
        }
        FrameworkConfig::TypeScript(config)
    }

    fn build_command(&self, config: &FrameworkConfig) -> Result<Vec<String>, Error> {
        let config = Self::typescript_config(config)?;
        if let Some(script) = &config.build_script {
            return Ok(vec![format!("{} {}", config.package_manager.run_prefix(), script)]);
        }
        if let Some(typecheck) = Self::typecheck_command(config) {
            return Ok(vec![typecheck]);
        }
        Err(Error::MissingTarget(
            "no build script in package.json and no tsconfig.json".to_string(),
        ))
    }

    fn test_command(&self, config: &FrameworkConfig) -> Result<String, Error> {
        let config = Self::typescript_config(config)?;
        match &config.test_script {
            Some(script) => Ok(format!("{} {}", config.package_manager.run_prefix(), script)),
            None => Err(Error::MissingTarget("no test script in package.json".to_string())),
        }
    }

    fn validation_commands(&self, config: &FrameworkConfig) -> Vec<ValidationCommand> {
        let Ok(config) = Self::typescript_config(config) else {
            return Vec::new();
        };
        let mut commands = Vec::new();
        if let Some(typecheck) = Self::typecheck_command(config) {
            commands.push(ValidationCommand {
                name: "typecheck",
                command: typecheck,
                optional: false,
            });
        }
        if config.has_eslint {
            commands.push(ValidationCommand {
                name: "lint",
                command: "npx eslint . --format stylish".to_string(),
                optional: false,
            });
        }
        if config.has_prettier {
            commands.push(ValidationCommand {
                name: "format",
                command: "npx prettier --check .".to_string(),
                optional: true,
            });
        }
        commands
    }

    fn parse_build_output(&self, text: &str) -> ParseOutcome {
        Self::parse_tsc(text)
    }

    fn parse_validation_output(&self, text: &str, validator: &str) -> ParseOutcome {
        match validator {
            "lint" => Self::parse_eslint(text),
            "format" => Self::parse_prettier(text),
            _ => Self::parse_tsc(text),
        }
    }

    fn verify_command(&self, config: &FrameworkConfig) -> Option<String> {
        let file = config.file()?;
        let FrameworkConfig::TypeScript(config) = config else {
            return None;
        };
        if config.tsconfig.is_some() {
            return Some(format!("npx tsc --noEmit {file}"));
        }
        if config.has_eslint {
            return Some(format!("npx eslint {file} --format stylish"));
        }
        None
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
#[path = "typescript_tests.rs"]
mod tests;
