//! Runtime configuration.
//!
//! Settings come from a TOML file (`TALLY_CONFIG`, else `./tally.toml`)
//! and can be overridden per-field from the environment.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::application::{DEFAULT_EMPTY_MESSAGE, DEFAULT_PLACEHOLDER, DEFAULT_TITLE};

pub const CONFIG_ENV: &str = "TALLY_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "tally.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub placeholder: String,
    pub empty_message: String,
    pub mouse: bool,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log destination; logging is off when unset.
    pub file: Option<PathBuf>,
    /// `tracing` filter directive, e.g. `info` or `tally=debug`.
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            mouse: true,
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration from the usual locations and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load_from(Path::new(&path))?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from(path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw, path)
    }

    pub fn parse(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `TALLY_LOG_FILE`, `TALLY_LOG_LEVEL` and `TALLY_MOUSE` from `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("TALLY_LOG_FILE") {
            self.log.file = if v.is_empty() { None } else { Some(PathBuf::from(v)) };
        }
        if let Some(v) = lookup("TALLY_LOG_LEVEL") {
            if !v.trim().is_empty() {
                self.log.level = v;
            }
        }
        if let Some(v) = lookup("TALLY_MOUSE") {
            match v.trim().to_ascii_lowercase().as_str() {
                "0" | "false" | "off" | "no" => self.mouse = false,
                "1" | "true" | "on" | "yes" => self.mouse = true,
                _ => {}
            }
        }
    }
}
