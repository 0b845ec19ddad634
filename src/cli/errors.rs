//! CLI-specific error types
//!
//! All CLI errors are fatal: they surface on stderr and the process exits
//! non-zero.

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("configuration error: {0}")]
    Config(String),

    /// Data directory already holds a user collection
    #[error("already initialized: {0}")]
    AlreadyInitialized(String),

    /// I/O failure outside the store
    #[error("i/o error: {0}")]
    Io(String),

    /// Server failed to boot or crashed
    #[error("boot failed: {0}")]
    Boot(String),
}
