// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `triage detect` command implementation.
//!
//! Prints every detected framework/root pair. JSON output follows the
//! stable detection contract consumed by the orchestration layer.

use std::path::PathBuf;

use triage::adapter::{AdapterRegistry, Role};
use triage::cli::{DetectArgs, OutputFormat};
use triage::config::{self, Config};
use triage::detect::{DetectOptions, detect_frameworks};
use triage::discovery;
use triage::error::ExitCode;
use triage::report::detection_contract;

/// Run the `triage detect` command.
pub fn run(args: &DetectArgs, config_path: &Option<PathBuf>) -> anyhow::Result<ExitCode> {
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
        search_upward: args.search_upward || config.detect.search_upward,
    };
    let detections = detect_frameworks(&root, &registry, &options);

    match args.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&detection_contract(&detections))?);
        }
        OutputFormat::Text => {
            for detection in &detections {
                let kind = detection.kind();
                let role = match kind.role() {
                    Role::Build => "build",
                    Role::Test => "test",
                };
                println!(
                    "{} ({}, {}) at {}",
                    kind.name(),
                    kind.display_name(),
                    role,
                    detection.project_root.display()
                );
            }
            if detections.is_empty() {
                println!("no frameworks detected");
            }
        }
    }

    if detections.is_empty() {
        eprintln!("no detectable project under {}", root.display());
        return Ok(ExitCode::ConfigError);
    }
    Ok(ExitCode::Success)
}
