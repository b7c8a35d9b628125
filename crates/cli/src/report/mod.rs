// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report output for check/test runs and detection results.
//!
//! Every failure path still emits something structured to inspect; even a
//! run where nothing parsed carries its raw output forward.

mod json;
mod text;

use std::path::PathBuf;

use crate::aggregate::FileIssues;
use crate::cli::OutputFormat;
use crate::issue::ParseOutcome;

pub use json::{JsonFormatter, detection_contract};
pub use text::TextFormatter;

/// One command executed during a run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CommandRecord {
    pub name: String,
    pub command: String,
    pub exit_code: Option<i32>,
    pub optional: bool,
}

/// Everything observed for one detected framework.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FrameworkReport {
    pub framework: &'static str,
    pub display_name: &'static str,
    pub project_root: PathBuf,
    pub commands: Vec<CommandRecord>,
    #[serde(flatten)]
    pub outcome: ParseOutcome,
    pub files: Vec<FileIssues>,
    /// Raw output preserved when a command failed without parseable issues.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_output: Option<String>,
    /// Command synthesis failed for this framework/root pair: a
    /// configuration error, not a build failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_error: Option<String>,
}

/// A whole run: one report per detected framework.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct RunReport {
    pub reports: Vec<FrameworkReport>,
}

impl RunReport {
    pub fn total_errors(&self) -> usize {
        self.reports.iter().map(|r| r.outcome.errors.len()).sum()
    }

    pub fn total_excluded(&self) -> usize {
        self.reports.iter().map(|r| r.outcome.excluded_warnings.len()).sum()
    }

    /// Excluded warnings never block; raw-output-only failures do.
    pub fn has_blocking_issues(&self) -> bool {
        self.total_errors() > 0 || self.reports.iter().any(|r| r.raw_output.is_some())
    }
}

/// Trait for formatting a run report.
pub trait ReportFormatter {
    fn format(&self, report: &RunReport) -> anyhow::Result<String>;
}

/// Format a run report for the requested output format.
pub fn format_run(
    format: OutputFormat,
    color: termcolor::ColorChoice,
    report: &RunReport,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}
