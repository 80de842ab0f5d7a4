//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TEMPO_*`)
//! 2. JSON config file (path in `TEMPO_CONFIG`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tempo_core::DEFAULT_LIST_LIMIT;
use tempo_db::{DbConfig, StartupMode};
use thiserror::Error;

/// Env var naming the optional JSON config file.
pub const CONFIG_PATH_VAR: &str = "TEMPO_CONFIG";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigState {
    /// SQLite file, relative to the working directory unless absolute.
    pub database_path: PathBuf,

    /// Discard (`fresh`) or keep (`persistent`) the existing file at startup.
    pub startup_mode: StartupMode,

    /// Rows shown by the unfiltered listing.
    pub row_limit: u32,

    /// Where tracing output goes; the terminal belongs to the UI.
    pub log_file: PathBuf,

    /// Title shown on the window border.
    pub window_title: String,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            database_path: PathBuf::from("music_store_management.db"),
            startup_mode: StartupMode::Persistent,
            row_limit: DEFAULT_LIST_LIMIT,
            log_file: PathBuf::from("tempo.log"),
            window_title: "Music Store Management System".to_string(),
        }
    }
}

impl ConfigState {
    /// Loads defaults, then the config file, then environment overrides.
    ///
    /// ## Returns
    /// The configuration plus any ignored-value warnings. Warnings are
    /// returned rather than logged because logging is configured from the
    /// result.
    pub fn load() -> Result<(Self, Vec<String>), ConfigError> {
        let mut config = match std::env::var_os(CONFIG_PATH_VAR) {
            Some(path) => ConfigState::from_file(Path::new(&path))?,
            None => ConfigState::default(),
        };

        let warnings = config.apply_env(|key| std::env::var(key).ok());
        Ok((config, warnings))
    }

    /// Reads a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `TEMPO_*` overrides read through `lookup`.
    ///
    /// ## Environment Variables
    /// - `TEMPO_DB_PATH`: database file
    /// - `TEMPO_STARTUP_MODE`: `fresh` or `persistent`
    /// - `TEMPO_ROW_LIMIT`: positive integer
    /// - `TEMPO_LOG_FILE`: log file
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(path) = lookup("TEMPO_DB_PATH") {
            self.database_path = PathBuf::from(path);
        }

        if let Some(mode) = lookup("TEMPO_STARTUP_MODE") {
            match mode.parse::<StartupMode>() {
                Ok(mode) => self.startup_mode = mode,
                Err(e) => warnings.push(format!("TEMPO_STARTUP_MODE ignored: {}", e)),
            }
        }

        if let Some(limit) = lookup("TEMPO_ROW_LIMIT") {
            match limit.trim().parse::<u32>() {
                Ok(limit) if limit > 0 => self.row_limit = limit,
                _ => warnings.push(format!(
                    "TEMPO_ROW_LIMIT ignored: '{}' is not a positive integer",
                    limit
                )),
            }
        }

        if let Some(path) = lookup("TEMPO_LOG_FILE") {
            self.log_file = PathBuf::from(path);
        }

        warnings
    }

    /// Database settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path).startup_mode(self.startup_mode)
    }
}
