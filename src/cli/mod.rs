//! # CLI
//!
//! Argument parsing and command dispatch. `main.rs` delegates here and does
//! nothing else.

pub mod args;
pub mod commands;
pub mod errors;

pub use errors::{CliError, CliResult};

use args::{Cli, Command};

/// Parse arguments and run the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Init { config } => commands::cmd_init(&config),
        Command::Serve { config } => commands::cmd_serve(&config),
    }
}
