// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `triage verify` command implementation.
//!
//! Verifies a single file after a fix attempt. A framework that cannot
//! isolate one file reports `deferred`: success pending the next
//! whole-project validation, not an error.

use std::path::PathBuf;

use triage::adapter::AdapterRegistry;
use triage::cli::{OutputFormat, VerifyArgs};
use triage::config::{self, Config};
use triage::detect::{DetectOptions, detect_frameworks};
use triage::discovery;
use triage::error::ExitCode;
use triage::verify::{VerifyOutcome, verify_file};

/// Run the `triage verify` command.
pub fn run(args: &VerifyArgs, config_path: &Option<PathBuf>) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let root = match &args.path {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => cwd.join(path),
        None => cwd,
    };

    let config = match config_path {
        Some(path) => config::load(path)?,
        None => match discovery::find_config(&root) {
            Some(path) => config::load(&path)?,
            None => Config::default(),
        },
    };

    let registry = AdapterRegistry::from_config(&config);
    let options = DetectOptions {
        exclude: config.detect.exclude.clone(),
        search_upward: config.detect.search_upward,
    };
    let mut detections = detect_frameworks(&root, &registry, &options);
    if let Some(name) = &args.framework {
        detections.retain(|d| d.kind().name() == name);
    }

    let Some(detection) = detections.first() else {
        eprintln!("no detectable project under {}", root.display());
        return Ok(ExitCode::ConfigError);
    };

    let outcome = verify_file(detection.adapter.as_ref(), &detection.config, &args.file)?;

    match args.output {
        OutputFormat::Json => {
            let value = match &outcome {
                VerifyOutcome::Clean => serde_json::json!({
                    "file": args.file, "status": "clean",
                }),
                VerifyOutcome::Deferred => serde_json::json!({
                    "file": args.file, "status": "deferred",
                    "deferredVerification": true,
                }),
                VerifyOutcome::IssuesRemain(issues) => serde_json::json!({
                    "file": args.file, "status": "issues-remain",
                    "issues": issues,
                }),
            };
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => match &outcome {
            VerifyOutcome::Clean => println!("{}: clean", args.file),
            VerifyOutcome::Deferred => {
                println!(
                    "{}: deferred ({} cannot verify one file in isolation; \
                     confirm with a whole-project validation)",
                    args.file,
                    detection.kind().name()
                );
            }
            VerifyOutcome::IssuesRemain(issues) => {
                println!("{}: {} issue(s) remain", args.file, issues.len());
                for issue in issues {
                    let location = match (issue.line, issue.column) {
                        (Some(line), Some(col)) => format!(":{line}:{col}"),
                        (Some(line), None) => format!(":{line}"),
                        _ => String::new(),
                    };
                    println!("  {}{} {}", args.file, location, issue.message);
                }
            }
        },
    }

    Ok(if outcome.provisionally_fixed() { ExitCode::Success } else { ExitCode::IssuesFound })
}
