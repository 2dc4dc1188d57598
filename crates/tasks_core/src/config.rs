//! Configuration for the task tracker.

use crate::error::{Result, TaskError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tasks.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Backing file settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Terminal output settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path).map_err(|e| {
            TaskError::ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            TaskError::ConfigError(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TaskError::ConfigError(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content).map_err(|e| {
            TaskError::ConfigError(format!("failed to write {}: {}", path.display(), e))
        })
    }
}

/// Backing file settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Location of the task document (default: `db.json`).
    pub path: PathBuf,

    /// Pretty-print the JSON document (default: true).
    pub pretty: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("db.json"),
            pretty: true,
        }
    }
}

/// Terminal output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Colored labels (default: true).
    pub color: bool,

    /// Clear the screen and print the startup banner (default: true).
    pub banner: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            banner: true,
        }
    }
}
