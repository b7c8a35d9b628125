// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `triage progress` command implementation.
//!
//! Pure set math over two newline-delimited file lists maintained by the
//! orchestration layer.

use std::collections::HashSet;
use std::path::Path;

use triage::cli::{OutputFormat, ProgressArgs};
use triage::error::{Error, ExitCode};
use triage::progress::calculate_progress;

/// Run the `triage progress` command.
pub fn run(args: &ProgressArgs) -> anyhow::Result<ExitCode> {
    let initial = read_list(&args.initial)?;
    let fixed: HashSet<String> = read_list(&args.fixed)?.into_iter().collect();

    let progress = calculate_progress(&initial, &fixed);

    match args.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&progress)?);
        }
        OutputFormat::Text => {
            println!(
                "{}/{} fixed ({}%), {} remaining",
                progress.fixed_count,
                progress.initial_count,
                progress.percentage,
                progress.remaining.len()
            );
            for file in &progress.remaining {
                println!("  {}", file);
            }
            if progress.all_processed {
                println!("all files processed");
            }
        }
    }

    Ok(ExitCode::Success)
}

fn read_list(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("cannot read list {}: {}", path.display(), e)))?;
    Ok(text.lines().map(str::trim).filter(|l| !l.is_empty()).map(str::to_string).collect())
}
