//! CLI argument definitions using clap
//!
//! Commands:
//! - fieldcheck lint --metadata <dir>
//! - fieldcheck show --metadata <dir> --entity-type <type>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fieldcheck - metadata-driven field validation for business entities
#[derive(Parser, Debug)]
#[command(name = "fieldcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a metadata directory for structural defects
    Lint {
        /// Path to the metadata directory
        #[arg(long, default_value = "./metadata")]
        metadata: PathBuf,
    },

    /// Print the field definitions for one entity type
    Show {
        /// Path to the metadata directory
        #[arg(long, default_value = "./metadata")]
        metadata: PathBuf,

        /// Entity type to show
        #[arg(long)]
        entity_type: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
