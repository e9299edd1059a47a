//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::ping::PingArgs;
use crate::commands::run::RunArgs;

/// Scenario driver for the Lecturize API.
#[derive(Parser, Debug)]
#[command(name = "lectern")]
#[command(author, version = env!("LECTERN_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the scenario against a target server
    Run(RunArgs),

    /// Probe the target's liveness endpoint once
    Ping(PingArgs),
}
