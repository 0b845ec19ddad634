//! CLI argument definitions using clap
//!
//! Commands:
//! - chirpd init --config <path>
//! - chirpd serve --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// chirpd - a minimal, self-hostable Twitter-like REST API
#[derive(Parser, Debug)]
#[command(name = "chirpd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize the config file and an empty user collection
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./chirpd.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./chirpd.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
