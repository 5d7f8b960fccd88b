//! Configuration loading
//!
//! Settings resolve in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! The binary's argument parser handles 1 and 2 together; this module merges
//! the result with the TOML file and the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Error, Result};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "STAGEBOOK_CONFIG";

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

/// Contents of `config.toml`; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TomlConfig {
    pub database_path: Option<PathBuf>,
    pub bind_address: Option<String>,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `info` or `stagebook_web=debug`
    pub level: Option<String>,
}

/// Values taken from the command line (or their environment variables)
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_file: Option<PathBuf>,
    pub database_path: Option<PathBuf>,
    pub bind_address: Option<String>,
}

/// Fully resolved runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_path: PathBuf,
    pub bind_address: String,
    pub log_filter: Option<String>,
}

impl Settings {
    /// Merge overrides, the TOML file (if any) and compiled defaults
    pub fn resolve(overrides: Overrides) -> Result<Settings> {
        let toml = match config_file_path(overrides.config_file.as_deref()) {
            Some(path) => load_toml_config(&path)?,
            None => {
                info!("No config file found, using defaults");
                TomlConfig::default()
            }
        };

        Ok(Settings {
            database_path: overrides
                .database_path
                .or(toml.database_path)
                .unwrap_or_else(default_database_path),
            bind_address: overrides
                .bind_address
                .or(toml.bind_address)
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            log_filter: toml.logging.level,
        })
    }
}

/// Locate the config file: explicit path, then `STAGEBOOK_CONFIG`, then the
/// platform config directory
///
/// A path named explicitly is returned even if it does not exist, so the
/// loader can report it.
pub fn config_file_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    dirs::config_dir()
        .map(|d| d.join("stagebook").join("config.toml"))
        .filter(|p| p.exists())
}

/// Read and parse a TOML config file
///
/// A missing file is not fatal: it is logged and defaults apply. A file that
/// exists but does not parse is a configuration error.
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("Config file {} not found, using defaults", path.display());
            return Ok(TomlConfig::default());
        }
        Err(e) => return Err(Error::Io(e)),
    };

    let config = toml::from_str::<TomlConfig>(&content)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    info!("Loaded config file {}", path.display());
    Ok(config)
}

/// OS-dependent default database location
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("stagebook"))
        .unwrap_or_else(|| PathBuf::from("./stagebook_data"))
        .join("stagebook.db")
}
