//! User configuration.
//!
//! Stored in `~/.crosswordle/config.json`; command-line flags win over file values.

use crate::args::Args;
use crosswordle_core::DEFAULT_MAX_ATTEMPTS;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Error type for configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Could not determine home directory")]
    NoHomeDir,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: NonZeroUsize,
    /// Directory of `YYYY-MM-DD.json` puzzles, `~/.crosswordle/puzzles` when unset.
    #[serde(default)]
    pub puzzle_dir: Option<PathBuf>,
    /// Directory for saved progress, `~/.crosswordle/saves` when unset.
    #[serde(default)]
    pub save_dir: Option<PathBuf>,
    #[serde(default)]
    pub dictionary_path: Option<PathBuf>,
    #[serde(default)]
    pub remote_url: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_max_attempts() -> NonZeroUsize {
    DEFAULT_MAX_ATTEMPTS
}

fn default_request_timeout_secs() -> u64 {
    10
}

/// A zero timeout would fail every request.
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

impl Default for Config {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            puzzle_dir: None,
            save_dir: None,
            dictionary_path: None,
            remote_url: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Get the application directory (`~/.crosswordle`).
pub fn app_dir() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".crosswordle"))
}

/// Get the config file path (`~/.crosswordle/config.json`).
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dir()?.join("config.json"))
}

/// Load configuration from `path`.
///
/// A missing file yields the defaults; an unreadable or malformed one is an error.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Save configuration to `path`.
pub fn save_config(path: &Path, config: &Config) -> Result<(), ConfigError> {
    // Ensure the directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)?;

    Ok(())
}

impl Config {
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(max_attempts) = args.max_attempts {
            self.max_attempts = max_attempts;
        }
        if let Some(path) = &args.dictionary {
            self.dictionary_path = Some(path.clone());
        }
        if let Some(url) = &args.remote {
            self.remote_url = Some(url.clone());
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(MIN_REQUEST_TIMEOUT_SECS))
    }

    pub fn puzzle_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.puzzle_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(app_dir()?.join("puzzles")),
        }
    }

    pub fn save_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.save_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(app_dir()?.join("saves")),
        }
    }
}
