// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! .NET build adapter.
//!
//! Detects solution/project manifests, synthesizes `dotnet` commands, and
//! parses Roslyn, MSBuild, NuGet, and `dotnet format` output. Warnings whose
//! rule code is on the configured allow-list are routed to excluded warnings
//! and never block a pass/fail decision.
//!
//! .NET cannot verify a single file in isolation: `verify_command` returns
//! `None` and callers defer to a whole-project rebuild.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use super::common::parse::{Prescreen, is_blank, regex};
use super::{Adapter, FrameworkConfig, FrameworkKind, ParallelStrategy, ValidationCommand};
use crate::detect::DetectionContext;
use crate::error::Error;
use crate::issue::{ExcludedWarning, Issue, IssueKind, ParseOutcome, Severity};

/// Rule-code namespace of NuGet vulnerability advisories.
const ADVISORY_PREFIX: &str = "NU19";

/// Build configuration passed to `dotnet build`/`dotnet test`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BuildConfiguration {
    #[default]
    Debug,
    Release,
}

impl BuildConfiguration {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildConfiguration::Debug => "Debug",
            BuildConfiguration::Release => "Release",
        }
    }
}

/// Detected settings for a .NET project.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DotNetConfig {
    pub project_root: PathBuf,
    /// Solution manifest (`.sln`/`.slnx`), root-most when several exist.
    pub solution: Option<String>,
    /// Project manifests, used when no solution governs the tree.
    pub projects: Vec<String>,
    pub configuration: BuildConfiguration,
    /// Whether `dotnet format` verification applies (an .editorconfig exists).
    pub has_format: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl DotNetConfig {
    fn defaults(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            solution: None,
            projects: Vec::new(),
            configuration: BuildConfiguration::Debug,
            has_format: false,
            file: None,
        }
    }

    /// The build target: solution first, then the first project manifest.
    fn target(&self) -> Option<&str> {
        self.solution.as_deref().or_else(|| self.projects.first().map(String::as_str))
    }
}

/// `File.cs(12,34): error CS1001: message [Project.csproj]`
static LOCATED: LazyLock<Regex> = LazyLock::new(|| {
    regex(r"^\s*(?P<file>\S[^:()]*)\((?P<line>\d+),(?P<col>\d+)\)\s*:\s*(?P<sev>error|warning)\s+(?P<rule>[A-Z]{1,4}\d{1,5})\s*:\s*(?P<msg>.*?)(?:\s+\[[^\]]+\])?\s*$")
});

/// `File.csproj : warning NU1902: message [Solution.sln]` (no location)
static UNLOCATED: LazyLock<Regex> = LazyLock::new(|| {
    regex(r"^\s*(?P<file>\S[^:()]*?)\s*:\s*(?P<sev>error|warning)\s+(?P<rule>[A-Z]{1,4}\d{1,5})\s*:\s*(?P<msg>.*?)(?:\s+\[[^\]]+\])?\s*$")
});

/// `error MSB1009: message` (no file at all)
static BARE: LazyLock<Regex> = LazyLock::new(|| {
    regex(r"^\s*(?P<sev>error|warning)\s+(?P<rule>[A-Z]{1,4}\d{1,5})\s*:\s*(?P<msg>.*)$")
});

/// `File.cs(1,1): error WHITESPACE: Fix whitespace formatting.` (dotnet format)
static FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    regex(r"^\s*(?P<file>\S[^:()]*)\((?P<line>\d+),(?P<col>\d+)\)\s*:\s*(?P<sev>error|warning)\s+(?P<rule>[A-Z][A-Z0-9]{2,})\s*:\s*(?P<msg>.*?)(?:\s+\[[^\]]+\])?\s*$")
});

/// Keep only paths that sit directly in the context root.
fn root_level(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths.into_iter().filter(|p| p.components().count() == 1).collect()
}

/// .NET adapter. The excluded-warning allow-list is injected, not baked in,
/// so it is overridable from configuration.
pub struct DotNetAdapter {
    excluded_rules: Vec<String>,
    configuration: BuildConfiguration,
}

impl DotNetAdapter {
    pub fn new(excluded_rules: Vec<String>, configuration: BuildConfiguration) -> Self {
        Self { excluded_rules, configuration }
    }

    fn dotnet_config(config: &FrameworkConfig) -> Result<&DotNetConfig, Error> {
        match config {
            FrameworkConfig::DotNet(c) => Ok(c),
            other => Err(Error::Config(format!(
                "dotnet adapter given a {} config",
                other.kind().name()
            ))),
        }
    }

    fn is_excluded(&self, severity: Severity, rule: &str) -> bool {
        severity == Severity::Warning && self.excluded_rules.iter().any(|r| r == rule)
    }

    fn push_diagnostic(
        &self,
        outcome: &mut ParseOutcome,
        file: Option<String>,
        line: Option<u32>,
        column: Option<u32>,
        severity: Severity,
        rule: String,
        message: String,
        kind: IssueKind,
    ) {
        if self.is_excluded(severity, &rule) {
            outcome.excluded_warnings.push(ExcludedWarning {
                file,
                security: rule.starts_with(ADVISORY_PREFIX),
                rule,
                message,
            });
            return;
        }
        outcome.errors.push(Issue {
            file,
            line,
            column,
            severity,
            rule: Some(rule),
            message,
            kind,
        });
    }

    /// MSBuild repeats diagnostics in its final summary block; parsing is
    /// line-oriented, so the duplicates are kept (idempotence over the same
    /// text still holds).
    fn parse_msbuild(&self, text: &str) -> ParseOutcome {
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
            if let Some(caps) = LOCATED.captures(line) {
                let severity = Severity::from_word(&caps["sev"]);
                self.push_diagnostic(
                    &mut outcome,
                    Some(caps["file"].trim().to_string()),
                    caps["line"].parse().ok(),
                    caps["col"].parse().ok(),
                    severity,
                    caps["rule"].to_string(),
                    caps["msg"].to_string(),
                    IssueKind::BuildError,
                );
            } else if let Some(caps) = UNLOCATED.captures(line) {
                let severity = Severity::from_word(&caps["sev"]);
                self.push_diagnostic(
                    &mut outcome,
                    Some(caps["file"].trim().to_string()),
                    None,
                    None,
                    severity,
                    caps["rule"].to_string(),
                    caps["msg"].to_string(),
                    IssueKind::BuildError,
                );
            } else if let Some(caps) = BARE.captures(line) {
                let severity = Severity::from_word(&caps["sev"]);
                self.push_diagnostic(
                    &mut outcome,
                    None,
                    None,
                    None,
                    severity,
                    caps["rule"].to_string(),
                    caps["msg"].to_string(),
                    IssueKind::BuildError,
                );
            } else {
                outcome.unmatched_lines += 1;
            }
        }
        outcome
    }

    fn parse_format(&self, text: &str) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();
        for line in text.lines() {
            if is_blank(line) {
                continue;
            }
            match FORMAT.captures(line) {
                Some(caps) => outcome.errors.push(Issue {
                    file: Some(caps["file"].trim().to_string()),
                    line: caps["line"].parse().ok(),
                    column: caps["col"].parse().ok(),
                    severity: Severity::from_word(&caps["sev"]),
                    rule: Some(caps["rule"].to_string()),
                    message: caps["msg"].to_string(),
                    kind: IssueKind::FormatError,
                }),
                None => outcome.unmatched_lines += 1,
            }
        }
        outcome
    }
}

impl Adapter for DotNetAdapter {
    fn kind(&self) -> FrameworkKind {
        FrameworkKind::DotNet
    }

    /// A manifest directly in the candidate root is the fingerprint; nested
    /// manifests belong to deeper candidate roots and would otherwise
    /// re-detect the same project at every ancestor.
    fn can_detect(&self, ctx: &DetectionContext) -> bool {
        !root_level(ctx.glob("*.sln")).is_empty()
            || !root_level(ctx.glob("*.slnx")).is_empty()
            || !root_level(ctx.glob("*.csproj")).is_empty()
    }

    fn detect_config(&self, ctx: &DetectionContext) -> FrameworkConfig {
        let mut config = DotNetConfig::defaults(ctx.project_root());
        config.configuration = self.configuration;

        let mut solutions = root_level(ctx.glob("*.sln"));
        solutions.extend(root_level(ctx.glob("*.slnx")));
        solutions.sort();
        config.solution = solutions.first().map(|p| p.to_string_lossy().into_owned());

        config.projects = ctx
            .glob("*.csproj")
            .into_iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        config.has_format = ctx.file_exists(".editorconfig");

        FrameworkConfig::DotNet(config)
    }

    fn build_command(&self, config: &FrameworkConfig) -> Result<Vec<String>, Error> {
        let config = Self::dotnet_config(config)?;
        let target = config
            .target()
            .ok_or_else(|| Error::MissingTarget("no .sln, .slnx, or .csproj file".to_string()))?;
        Ok(vec![
            format!("dotnet restore {target}"),
            format!(
                "dotnet build {target} --configuration {} --no-restore",
                config.configuration.as_str()
            ),
        ])
    }

    fn test_command(&self, config: &FrameworkConfig) -> Result<String, Error> {
        let config = Self::dotnet_config(config)?;
        let target = config
            .target()
            .ok_or_else(|| Error::MissingTarget("no .sln, .slnx, or .csproj file".to_string()))?;
        Ok(format!(
            "dotnet test {target} --configuration {}",
            config.configuration.as_str()
        ))
    }

    fn validation_commands(&self, config: &FrameworkConfig) -> Vec<ValidationCommand> {
        let Ok(config) = Self::dotnet_config(config) else {
            return Vec::new();
        };
        let Some(target) = config.target() else {
            return Vec::new();
        };
        // Identical to the build phase's compile step so a caller that has
        // already built can skip it by command-line identity.
        let mut commands = vec![ValidationCommand {
            name: "build",
            command: format!(
                "dotnet build {target} --configuration {} --no-restore",
                config.configuration.as_str()
            ),
            optional: false,
        }];
        if config.has_format {
            commands.push(ValidationCommand {
                name: "format",
                command: format!("dotnet format {target} --verify-no-changes"),
                optional: true,
            });
        }
        commands
    }

    fn parse_build_output(&self, text: &str) -> ParseOutcome {
        self.parse_msbuild(text)
    }

    fn parse_validation_output(&self, text: &str, validator: &str) -> ParseOutcome {
        match validator {
            "format" => self.parse_format(text),
            _ => self.parse_msbuild(text),
        }
    }

    /// MSBuild compiles at project granularity; there is no meaningful
    /// single-file rebuild. Deferred verification is the contract here.
    fn verify_command(&self, _config: &FrameworkConfig) -> Option<String> {
        None
    }

    fn resource_multiplier(&self) -> f64 {
        2.0
    }

    fn parallel_strategy(&self, cpu_cores: usize) -> ParallelStrategy {
        ParallelStrategy {
            max_workers: (cpu_cores / 2).max(1),
            stagger_delay_ms: 500,
            requires_isolation: true,
        }
    }
}

#[cfg(test)]
#[path = "dotnet_tests.rs"]
mod tests;
