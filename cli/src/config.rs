use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Snapshot file. Falls back to `~/.leaf/entries.json`.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    #[serde(default = "default_trend_window")]
    pub trend_window: usize,
    #[serde(default = "default_top_activities")]
    pub top_activities: usize,
}

fn default_trend_window() -> usize {
    30
}

fn default_top_activities() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            trend_window: default_trend_window(),
            top_activities: default_top_activities(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine home directory")]
    HomeDirError,
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

impl Config {
    /// `~/.leaf/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home_dir = dirs::home_dir().ok_or(ConfigError::HomeDirError)?;
        Ok(home_dir.join(".leaf").join(CONFIG_FILE_NAME))
    }

    /// Loads `path`, or the default location when `None`. A missing file
    /// gives the defaults and nothing is written.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}
