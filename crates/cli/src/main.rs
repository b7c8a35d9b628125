// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Binary entry point: argument dispatch and exit-code mapping.

mod cmd_check;
mod cmd_detect;
mod cmd_init;
mod cmd_parallel;
mod cmd_progress;
mod cmd_test;
mod cmd_verify;

use clap::{CommandFactory, Parser};

use triage::cli::{Cli, Command};
use triage::error::{Error, ExitCode};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Command::Detect(args) => cmd_detect::run(args, &cli.config),
        Command::Check(args) => cmd_check::run(args, &cli.config),
        Command::Test(args) => cmd_test::run(args, &cli.config),
        Command::Verify(args) => cmd_verify::run(args, &cli.config),
        Command::Parallel(args) => cmd_parallel::run(args, &cli.config),
        Command::Progress(args) => cmd_progress::run(args),
        Command::Init(args) => cmd_init::run(args),
        Command::Completions(args) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "triage",
                &mut std::io::stdout(),
            );
            Ok(ExitCode::Success)
        }
    };

    match result {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("error: {:#}", err);
            let code = err
                .downcast_ref::<Error>()
                .map(Error::exit_code)
                .unwrap_or(ExitCode::ToolError);
            code.into()
        }
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;
    let filter = if verbose {
        EnvFilter::new("triage=debug")
    } else {
        EnvFilter::try_from_env("TRIAGE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
