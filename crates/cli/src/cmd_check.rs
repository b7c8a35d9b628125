// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `triage check` command implementation.
//!
//! Runs build and validation commands for every detected framework, parses
//! their output into the normalized issue model, and reports issues grouped
//! by file in descending impact order.

use std::path::PathBuf;

use triage::adapter::{AdapterRegistry, Role};
use triage::aggregate::group_issues_by_file;
use triage::cli::CheckArgs;
use triage::config::{self, Config};
use triage::detect::{DetectOptions, Detection, detect_frameworks};
use triage::discovery;
use triage::error::ExitCode;
use triage::issue::ParseOutcome;
use triage::report::{CommandRecord, FrameworkReport, RunReport, format_run};
use triage::runner;

/// Run the `triage check` command.
pub fn run(args: &CheckArgs, config_path: &Option<PathBuf>) -> anyhow::Result<ExitCode> {
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

    if detections.is_empty() {
        // Still emit something inspectable on the failure path.
        println!("{}", triage::report::detection_contract(&[]));
        eprintln!("no detectable project under {}", root.display());
        return Ok(ExitCode::ConfigError);
    }

    let mut report = RunReport::default();
    let mut tool_error = false;
    let mut config_error = false;

    for detection in &detections {
        let fw = check_framework(detection);
        tool_error |= fw.raw_output.is_some();
        config_error |= fw.config_error.is_some();
        report.reports.push(fw);
    }

    let color = args.color.resolve(args.no_color);
    print!("{}", format_run(args.output, color, &report)?);

    Ok(if tool_error {
        ExitCode::ToolError
    } else if config_error {
        ExitCode::ConfigError
    } else if report.has_blocking_issues() {
        ExitCode::IssuesFound
    } else {
        ExitCode::Success
    })
}

/// Build + validate one detected framework.
///
/// Failure stays local to the framework/root pair: a synthesis error or a
/// spawn failure is recorded on the report and the caller moves on.
fn check_framework(detection: &Detection) -> FrameworkReport {
    let adapter = detection.adapter.as_ref();
    let kind = detection.kind();
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

    let mut raw_text = String::new();
    let mut required_failed = false;
    let mut executed: std::collections::HashSet<String> = std::collections::HashSet::new();

    // Build phase only applies to build frameworks; test frameworks are
    // exercised through their validation sequence below.
    if kind.role() == Role::Build {
        let commands = match adapter.build_command(&detection.config) {
            Ok(commands) => commands,
            Err(err) => {
                fw.config_error = Some(err.to_string());
                return fw;
            }
        };
        for command in commands {
            executed.insert(command.clone());
            match runner::run_shell(&command, &detection.project_root) {
                Ok(output) => {
                    let failed = !output.success();
                    fw.commands.push(CommandRecord {
                        name: "build".to_string(),
                        command,
                        exit_code: output.status,
                        optional: false,
                    });
                    raw_text.push_str(&output.combined());
                    raw_text.push('\n');
                    fw.outcome.merge(adapter.parse_build_output(&output.combined()));
                    if failed {
                        required_failed = true;
                        break;
                    }
                }
                Err(err) => {
                    fw.commands.push(CommandRecord {
                        name: "build".to_string(),
                        command,
                        exit_code: None,
                        optional: false,
                    });
                    fw.raw_output = Some(err.to_string());
                    return fw;
                }
            }
        }
    }

    for validation in adapter.validation_commands(&detection.config) {
        // The build phase may already have run this exact command line;
        // running it again would double-count its diagnostics.
        if !executed.insert(validation.command.clone()) {
            continue;
        }
        match runner::run_shell(&validation.command, &detection.project_root) {
            Ok(output) => {
                fw.commands.push(CommandRecord {
                    name: validation.name.to_string(),
                    command: validation.command.clone(),
                    exit_code: output.status,
                    optional: validation.optional,
                });
                raw_text.push_str(&output.combined());
                raw_text.push('\n');
                fw.outcome
                    .merge(adapter.parse_validation_output(&output.combined(), validation.name));
                // Optional validators never fail the run; their issues are
                // still collected above for visibility.
                if !output.success() && !validation.optional {
                    required_failed = true;
                }
            }
            Err(err) => {
                fw.commands.push(CommandRecord {
                    name: validation.name.to_string(),
                    command: validation.command.clone(),
                    exit_code: None,
                    optional: validation.optional,
                });
                if !validation.optional {
                    fw.raw_output = Some(err.to_string());
                    return fw;
                }
            }
        }
    }

    // A required command failed but nothing was parsed: that is a
    // tool-invocation problem, surfaced with the raw output preserved.
    if required_failed && fw.outcome.errors.is_empty() {
        fw.raw_output = Some(raw_text);
    }

    fw.files = group_issues_by_file(&fw.outcome.errors);
    fw
}
