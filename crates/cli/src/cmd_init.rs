// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `triage init` command implementation.

use triage::cli::InitArgs;
use triage::config::DEFAULT_CONFIG_TOML;
use triage::error::ExitCode;

/// Run the `triage init` command.
pub fn run(args: &InitArgs) -> anyhow::Result<ExitCode> {
    let path = std::env::current_dir()?.join("triage.toml");

    if path.exists() && !args.force {
        eprintln!("{} already exists (use --force to overwrite)", path.display());
        return Ok(ExitCode::ConfigError);
    }

    std::fs::write(&path, DEFAULT_CONFIG_TOML)?;
    println!("wrote {}", path.display());
    Ok(ExitCode::Success)
}
