//! CLI module for fieldcheck
//!
//! Provides command-line tooling around metadata directories:
//! - lint: load a metadata directory and report structural defects
//! - show: print the resolved field definitions for one entity type

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{lint, run_command, show};
pub use errors::{CliError, CliErrorCode, CliResult};

/// Parses arguments and runs the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}
