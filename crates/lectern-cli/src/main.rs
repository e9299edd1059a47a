//! lectern - scenario driver for the Lecturize API.
//!
//! Drives a fixed sequence of HTTP calls (authentication, lecture CRUD,
//! image upload, liveness probe) against a target server, printing one
//! colored line per request and a summary at the end.

mod cli;
mod commands;
mod output;
mod runner;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Run(args) => commands::run::run(args).await,
        Commands::Ping(args) => commands::ping::run(args).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
