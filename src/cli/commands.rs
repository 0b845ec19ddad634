//! CLI command implementations
//!
//! `init` writes a default config if none exists and creates the empty user
//! collection. `serve` loads the config, opens the store, and runs the HTTP
//! server until the process is stopped.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::{HttpServer, HttpServerConfig};
use crate::observability::{Logger, Severity};
use crate::store::JsonFileStore;

use super::errors::{CliError, CliResult};

/// Configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Data directory holding the user collection artifact
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// HTTP server settings
    #[serde(default)]
    pub http: HttpServerConfig,
}

fn default_data_dir() -> String {
    "./data".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            http: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::Config(format!("invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_dir.is_empty() {
            return Err(CliError::Config("data_dir must not be empty".to_string()));
        }
        Ok(())
    }

    /// Path of the user collection artifact.
    pub fn users_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join("users.json")
    }
}

/// `chirpd init`: write a default config if missing, then create the data
/// directory and the empty user collection.
pub fn cmd_init(config_path: &Path) -> CliResult<()> {
    if !config_path.exists() {
        let default = serde_json::to_string_pretty(&Config::default())
            .map_err(|e| CliError::Config(format!("failed to render default config: {}", e)))?;
        fs::write(config_path, default)
            .map_err(|e| CliError::Io(format!("failed to write config: {}", e)))?;
        Logger::log(
            Severity::Info,
            "config_created",
            &[("path", &config_path.display().to_string())],
        );
    }

    let config = Config::load(config_path)?;
    let users_path = config.users_path();

    if users_path.exists() {
        return Err(CliError::AlreadyInitialized(format!(
            "user collection already exists at {}",
            users_path.display()
        )));
    }

    JsonFileStore::open(&users_path).map_err(|e| CliError::Io(e.to_string()))?;

    Logger::log(
        Severity::Info,
        "store_initialized",
        &[("path", &users_path.display().to_string())],
    );

    Ok(())
}

/// `chirpd serve`: open the store and run the HTTP server.
pub fn cmd_serve(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;

    let store =
        JsonFileStore::open(config.users_path()).map_err(|e| CliError::Boot(e.to_string()))?;

    let server = HttpServer::new(config.http, Arc::new(store));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::Boot(format!("failed to start runtime: {}", e)))?;

    runtime
        .block_on(server.serve())
        .map_err(|e| CliError::Boot(format!("server error: {}", e)))
}
