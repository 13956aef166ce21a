//! idegen CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use idegen_core::config::IdegenConfig;
use idegen_types::LogLevel;

mod cli;
mod commands;
mod ui;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = run(cli).await;
    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => IdegenConfig::load_from(path),
        None => IdegenConfig::load(),
    }
    .context("Failed to load configuration")?;

    init_logging(&cli, &config);
    cli.execute(config).await
}

fn init_logging(cli: &Cli, config: &IdegenConfig) {
    let mut log = config.log.clone();
    if cli.quiet {
        log.level = LogLevel::Error;
    } else if cli.debug {
        log.level = LogLevel::Trace;
    } else if cli.verbose {
        log.level = LogLevel::Debug;
    }

    // A subscriber may already be installed when embedded; keep going.
    let _ = idegen_core::log::init_from_config(&log);
}
