// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking subprocess invocation with captured output.
//!
//! Every toolchain command is a plain shell command line run to completion
//! with stdout/stderr fully buffered before parsing. No streaming, no
//! timeout; wall-clock limits are the orchestration layer's concern.

use std::path::Path;
use std::process::Command;

use crate::error::Error;

/// Captured result of one command invocation.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code, if the process terminated normally.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Stdout then stderr; toolchains split diagnostics between the two
    /// inconsistently, so parsers always see both.
    pub fn combined(&self) -> String {
        let mut text = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&self.stderr);
        }
        text
    }
}

/// Run a shell command line in `cwd`, blocking until it exits.
///
/// A spawn failure (missing shell, missing binary surfaced by the shell) is
/// a tool-invocation error; a nonzero exit is not. The caller decides what
/// a nonzero exit means after parsing.
pub fn run_shell(command: &str, cwd: &Path) -> Result<CommandOutput, Error> {
    tracing::debug!("running `{}` in {}", command, cwd.display());
    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .current_dir(cwd)
        .output()
        .map_err(|source| Error::ToolInvocation { command: command.to_string(), source })?;

    Ok(CommandOutput {
        status: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
