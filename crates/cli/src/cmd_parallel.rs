// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `triage parallel` command implementation.
//!
//! Captures a resource snapshot and emits the bounded worker count.
//! `--plain` prints the bare integer for shell capture.

use std::path::PathBuf;

use triage::adapter::AdapterRegistry;
use triage::cli::{OutputFormat, ParallelArgs};
use triage::config::{self, Config};
use triage::discovery;
use triage::error::{Error, ExitCode};
use triage::resources::{ResourceSnapshot, calculate_optimal_parallel, parse_memory_reserve};

/// Run the `triage parallel` command.
pub fn run(args: &ParallelArgs, config_path: &Option<PathBuf>) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = match config_path {
        Some(path) => config::load(path)?,
        None => match discovery::find_config(&cwd) {
            Some(path) => config::load(&path)?,
            None => Config::default(),
        },
    };

    let mut mem_per_worker = args.mem_per_worker.unwrap_or(config.parallel.mem_per_worker_gb);
    if mem_per_worker <= 0.0 {
        return Err(Error::Config(format!(
            "per-worker memory must be positive, got {mem_per_worker}"
        ))
        .into());
    }

    let snapshot = ResourceSnapshot::capture();

    // A framework's resource hints weight the per-worker budget (a .NET or
    // Playwright worker is heavier than an ESLint one) and describe how its
    // workers may be scheduled.
    let strategy = match &args.framework {
        Some(name) => {
            let registry = AdapterRegistry::from_config(&config);
            let adapter = registry
                .by_name(name)
                .ok_or_else(|| Error::Config(format!("unknown framework: {name}")))?;
            mem_per_worker *= adapter.resource_multiplier();
            Some(adapter.parallel_strategy(snapshot.cpu_cores))
        }
        None => None,
    };
    let reserve_spec = args.reserve.clone().unwrap_or_else(|| config.parallel.reserve.clone());
    let reserve_gb = parse_memory_reserve(&reserve_spec, snapshot.total_mem_gb)?;

    let result = calculate_optimal_parallel(&snapshot, mem_per_worker, reserve_gb);

    if args.plain {
        println!("{}", result.max_parallel);
        return Ok(ExitCode::Success);
    }

    match args.output {
        OutputFormat::Json => {
            let mut value = serde_json::json!({
                "snapshot": snapshot,
                "mem_per_worker_gb": mem_per_worker,
                "mem_reserve_gb": reserve_gb,
                "result": result,
            });
            if let Some(strategy) = &strategy {
                value["strategy"] = serde_json::json!({
                    "max_workers": strategy.max_workers,
                    "stagger_delay_ms": strategy.stagger_delay_ms,
                    "requires_isolation": strategy.requires_isolation,
                });
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            println!(
                "system: {:.1} GB free of {:.1} GB, {} cores, load {:.2}",
                snapshot.available_mem_gb,
                snapshot.total_mem_gb,
                snapshot.cpu_cores,
                snapshot.cpu_load
            );
            println!(
                "max parallel: {} (limiting factor: {})",
                result.max_parallel, result.limiting_factor
            );
            if let Some(strategy) = &strategy {
                println!(
                    "framework hints: up to {} workers, {}ms stagger{}",
                    strategy.max_workers,
                    strategy.stagger_delay_ms,
                    if strategy.requires_isolation { ", isolated" } else { "" }
                );
            }
        }
    }

    Ok(ExitCode::Success)
}
