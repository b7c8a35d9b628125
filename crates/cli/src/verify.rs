// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-file verification after a remediation attempt.
//!
//! Runs the adapter's narrowed verify command and filters parsed issues to
//! the target file. Frameworks that cannot isolate one file return no
//! command; the file is then provisionally marked fixed and true
//! confirmation waits for the next whole-project validation pass.

use crate::adapter::{Adapter, FrameworkConfig, path_matches};
use crate::error::Error;
use crate::issue::Issue;
use crate::runner;

/// Result of verifying one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The verify command ran and reported nothing for the target file.
    Clean,
    /// The verify command still reports issues in the target file.
    IssuesRemain(Vec<Issue>),
    /// The framework cannot verify one file in isolation. Not an error:
    /// success is pending the final whole-project validation.
    Deferred,
}

impl VerifyOutcome {
    /// Whether the caller may treat the file as fixed for now.
    pub fn provisionally_fixed(&self) -> bool {
        matches!(self, VerifyOutcome::Clean | VerifyOutcome::Deferred)
    }
}

/// Verify `file` using the adapter's narrowed command.
///
/// The config is copy-extended with the target file; the original is never
/// mutated.
pub fn verify_file(
    adapter: &dyn Adapter,
    config: &FrameworkConfig,
    file: &str,
) -> Result<VerifyOutcome, Error> {
    let scoped = config.with_file(file);
    let Some(command) = adapter.verify_command(&scoped) else {
        tracing::debug!(
            "{} defers single-file verification of {}",
            adapter.kind().name(),
            file
        );
        return Ok(VerifyOutcome::Deferred);
    };

    let output = runner::run_shell(&command, config.project_root())?;
    let parsed = adapter.parse_validation_output(&output.combined(), "verify");

    let remaining = filter_to_file(parsed.errors, file);
    if remaining.is_empty() {
        Ok(VerifyOutcome::Clean)
    } else {
        Ok(VerifyOutcome::IssuesRemain(remaining))
    }
}

/// Keep only issues whose file refers to the verify target. Other files may
/// legitimately appear in the output (imports, sibling tests) and are
/// someone else's problem in this pass.
fn filter_to_file(issues: Vec<Issue>, file: &str) -> Vec<Issue> {
    issues
        .into_iter()
        .filter(|issue| issue.file.as_deref().is_some_and(|f| path_matches(f, file)))
        .collect()
}

#[cfg(test)]
#[path = "verify_tests.rs"]
mod tests;
