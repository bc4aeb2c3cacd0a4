//! CLI argument definitions using clap
//!
//! Commands:
//! - retaildb serve --config <path>
//! - retaildb query [--config <path>]
//! - retaildb explain [--config <path>]
//! - retaildb load [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

/// retaildb - search service for retail sale records
#[derive(Parser, Debug)]
#[command(name = "retaildb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP service
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Run one search read from stdin and print the page
    Query {
        /// Path to configuration file; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the predicate, sort and backend for a search read from stdin
    Explain {
        /// Path to configuration file; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Load the row source into a fresh store and print the report
    Load {
        /// Path to configuration file; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
