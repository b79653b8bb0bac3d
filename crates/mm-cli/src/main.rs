//! merge-migrations - concatenate numbered SQL migrations into one script

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;

mod cli;
mod commands;
mod context;

use cli::Cli;
use commands::{merge, preview};
use context::RunContext;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            println!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<ExitCode> {
    let ctx = RunContext::new(cli)?;
    ctx.print_banner();

    let files = mm_core::discover_migrations(&ctx.migrations_dir)?;
    if files.is_empty() {
        println!("No SQL files found, exiting");
        return Ok(ExitCode::FAILURE);
    }

    if cli.preview {
        preview::execute(&files);
        return Ok(ExitCode::SUCCESS);
    }

    merge::execute(&ctx, &files, std::io::stdin().is_terminal()).await?;
    Ok(ExitCode::SUCCESS)
}

/// Route log records to stdout alongside the command output.
///
/// The level comes from `--verbose` only; `RUST_LOG` is not consulted.
fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stdout)
        .format_timestamp(None)
        .format_target(false)
        .init();
}
