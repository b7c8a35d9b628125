// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy and process exit codes.
//!
//! Configuration errors (no detectable project, no build target) are kept
//! distinct from tool-invocation errors (binary missing) and from parsed
//! issues, which are the expected, recoverable case.

use std::io;

/// Errors produced by the diagnostics core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required build/test target could not be located. This is a
    /// configuration problem, not a build failure.
    #[error("no build target found: {0}")]
    MissingTarget(String),

    /// Invalid configuration value or file.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A toolchain command could not be spawned at all.
    #[error("failed to invoke `{command}`: {source}")]
    ToolInvocation {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Map an error to the exit code its taxonomy class demands.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::MissingTarget(_) | Error::Config(_) => ExitCode::ConfigError,
            Error::ToolInvocation { .. } | Error::Io(_) => ExitCode::ToolError,
        }
    }
}

/// Process exit codes for the `triage` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Clean run, no blocking issues.
    Success = 0,
    /// Run completed and blocking issues were parsed.
    IssuesFound = 1,
    /// Configuration error: nothing was built or tested.
    ConfigError = 2,
    /// External tool could not be invoked or produced nothing parseable.
    ToolError = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
