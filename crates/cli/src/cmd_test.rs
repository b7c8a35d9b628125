// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `triage test` command implementation.
//!
//! Runs the test command of every detected framework that has one and
//! reports parsed failures grouped by file.

use std::path::PathBuf;

use triage::adapter::AdapterRegistry;
use triage::aggregate::group_issues_by_file;
use triage::cli::TestArgs;
use triage::config::{self, Config};
use triage::detect::{DetectOptions, detect_frameworks};
use triage::discovery;
use triage::error::{Error, ExitCode};
use triage::issue::ParseOutcome;
use triage::report::{CommandRecord, FrameworkReport, RunReport, format_run};
use triage::runner;

/// Run the `triage test` command.
pub fn run(args: &TestArgs, config_path: &Option<PathBuf>) -> anyhow::Result<ExitCode> {
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

    let mut report = RunReport::default();
    let mut tool_error = false;
    let mut ran_any = false;

    for detection in &detections {
        let adapter = detection.adapter.as_ref();
        let kind = detection.kind();
        let command = match adapter.test_command(&detection.config) {
            Ok(command) => command,
            Err(Error::MissingTarget(reason)) => {
                // Not every detected framework runs tests; skip quietly.
                tracing::debug!("{}: {}", kind.name(), reason);
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        let mut fw = FrameworkReport {
            framework: kind.name(),
            display_name: kind.display_name(),
            project_root: detection.project_root.clone(),
            commands: Vec::new(),
            outcome: ParseOutcome::default(),
            files: Vec::new(),
            raw_output: None,
            config_error: None,
        };

        match runner::run_shell(&command, &detection.project_root) {
            Ok(output) => {
                fw.commands.push(CommandRecord {
                    name: "test".to_string(),
                    command,
                    exit_code: output.status,
                    optional: false,
                });
                fw.outcome = adapter.parse_build_output(&output.combined());
                if !output.success() && fw.outcome.errors.is_empty() {
                    fw.raw_output = Some(output.combined());
                    tool_error = true;
                }
            }
            Err(err) => {
                fw.commands.push(CommandRecord {
                    name: "test".to_string(),
                    command,
                    exit_code: None,
                    optional: false,
                });
                fw.raw_output = Some(err.to_string());
                tool_error = true;
            }
        }

        fw.files = group_issues_by_file(&fw.outcome.errors);
        ran_any = true;
        report.reports.push(fw);
    }

    if !ran_any {
        println!("{}", triage::report::detection_contract(&[]));
        eprintln!("no test framework detected under {}", root.display());
        return Ok(ExitCode::ConfigError);
    }

    let color = args.color.resolve(args.no_color);
    print!("{}", format_run(args.output, color, &report)?);

    Ok(if tool_error {
        ExitCode::ToolError
    } else if report.has_blocking_issues() {
        ExitCode::IssuesFound
    } else {
        ExitCode::Success
    })
}
