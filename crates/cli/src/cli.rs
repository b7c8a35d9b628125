// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;

fn styles() -> clap::builder::Styles {
    use anstyle::AnsiColor;
    clap::builder::Styles::styled()
        .header(AnsiColor::Yellow.on_default())
        .usage(AnsiColor::Yellow.on_default())
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Cyan.on_default())
}

/// A build/test diagnostics engine that turns toolchain output into a
/// remediation plan
#[derive(Parser)]
#[command(name = "triage")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = styles())]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "TRIAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Detect build/test frameworks governing a project
    Detect(DetectArgs),
    /// Run build and validation commands, parse issues, group by file
    Check(CheckArgs),
    /// Run the test command and report failures by file
    Test(TestArgs),
    /// Verify a single file after a fix attempt
    Verify(VerifyArgs),
    /// Compute a safe worker count from system resources
    Parallel(ParallelArgs),
    /// Report remediation progress from initial/fixed file lists
    Progress(ProgressArgs),
    /// Initialize triage configuration
    Init(InitArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct DetectArgs {
    /// Project directory to scan
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Walk upward toward the filesystem root if nothing matches below
    #[arg(long)]
    pub search_upward: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Project directory to check
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Only run the named framework adapter
    #[arg(long, value_name = "NAME")]
    pub framework: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct TestArgs {
    /// Project directory to test
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Only run the named framework adapter
    #[arg(long, value_name = "NAME")]
    pub framework: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct VerifyArgs {
    /// File to verify, relative to the project root
    #[arg(long, value_name = "FILE")]
    pub file: String,

    /// Project directory
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Only use the named framework adapter
    #[arg(long, value_name = "NAME")]
    pub framework: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct ParallelArgs {
    /// Expected peak memory of one fix worker, in GB
    #[arg(long, value_name = "GB")]
    pub mem_per_worker: Option<f64>,

    /// Weight the budget with the named framework adapter's resource hints
    #[arg(long, value_name = "NAME")]
    pub framework: Option<String>,

    /// Memory reserve: percentage ("15%"), absolute ("2048MB", "4GB"), or
    /// bare GB number
    #[arg(long, value_name = "SPEC")]
    pub reserve: Option<String>,

    /// Print only the worker count, for shell capture
    #[arg(long)]
    pub plain: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct ProgressArgs {
    /// Newline-delimited list of files that initially had issues
    #[arg(long, value_name = "FILE")]
    pub initial: PathBuf,

    /// Newline-delimited list of files confirmed fixed
    #[arg(long, value_name = "FILE")]
    pub fixed: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
