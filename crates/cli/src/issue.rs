// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Normalized diagnostic model shared by all adapters.
//!
//! Parsers produce [`Issue`] values from raw toolchain output. Issues are
//! transient: produced per parse call, never persisted by the core.

use serde::{Deserialize, Serialize};

/// Severity as emitted by the toolchain, verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Parse a severity word from a matched line.
    pub fn from_word(word: &str) -> Severity {
        if word.eq_ignore_ascii_case("warning") {
            Severity::Warning
        } else {
            Severity::Error
        }
    }
}

/// Coarse category assigned by the parser that produced the issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    BuildError,
    TypeError,
    LintError,
    FormatError,
    TestFailure,
    ExcludedWarning,
}

/// A single normalized diagnostic.
///
/// `file` is optional: an issue without a file is excluded from file-level
/// grouping but still counts toward totals. Line and column are 1-based as
/// emitted by the tools and are never renumbered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    pub message: String,
    pub kind: IssueKind,
}

/// A warning whose rule code is on the configured allow-list.
///
/// Tracked separately so it never blocks a "zero issues" determination while
/// remaining visible for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedWarning {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub rule: String,
    pub message: String,
    /// True when the rule code comes from a vulnerability-advisory namespace.
    pub security: bool,
}

/// Result of one parse pass over captured output.
///
/// Unmatched lines are informational only: toolchain version drift degrades
/// to zero matches rather than an error, and the count is surfaced so callers
/// can tell "clean output" from "output we could not read".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    pub errors: Vec<Issue>,
    pub excluded_warnings: Vec<ExcludedWarning>,
    pub unmatched_lines: usize,
}

impl ParseOutcome {
    /// True when no blocking issues were parsed.
    ///
    /// Excluded warnings do not block.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Fold another outcome into this one, preserving encounter order.
    pub fn merge(&mut self, other: ParseOutcome) {
        self.errors.extend(other.errors);
        self.excluded_warnings.extend(other.excluded_warnings);
        self.unmatched_lines += other.unmatched_lines;
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
