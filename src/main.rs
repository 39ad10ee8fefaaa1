mod agents;
mod cli;
mod config;
mod cordova;
mod error;
mod repository;
#[cfg(test)]
mod test_support;
mod workflow;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use config::ToolConfig;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ToolConfig::from_env();
    tracing::debug!(?config, path = %cli.path, "starting");

    if let Err(e) = workflow::execute_update(&cli.path, &config) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_directive = if verbose { "cpup=debug" } else { "cpup=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
