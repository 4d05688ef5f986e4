//! Configuration loading
//!
//! Settings come from a TOML file, then environment overrides. Every field
//! has a default, so an empty or missing file is a valid configuration.

use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "tally.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HistoryConfig {
    /// How many of the most recent calculations `history` prints
    pub display_limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { display_limit: default_display_limit() }
    }
}

fn default_display_limit() -> usize {
    20
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TallyConfig {
    pub logging: LoggingConfig,
    pub history: HistoryConfig,
}

/// A configuration together with where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: TallyConfig,
    pub path: PathBuf,
    /// False when the file did not exist and defaults were used
    pub found: bool,
}

impl TallyConfig {
    /// Load from `path`, else `TALLY_CONFIG_PATH`, else `tally.toml`.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<LoadedConfig> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => std::env::var("TALLY_CONFIG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH)),
        };

        if !path.exists() {
            return Ok(LoadedConfig { config: TallyConfig::default(), path, found: false });
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read configuration file '{}'", path.display()))?;
        let config = Self::from_toml(&contents)
            .with_context(|| format!("invalid configuration file '{}'", path.display()))?;
        Ok(LoadedConfig { config, path, found: true })
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: TallyConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Apply `TALLY_*` environment overrides.
    ///
    /// Returns the names of variables that were set but could not be parsed.
    pub fn apply_env_overrides(&mut self) -> Vec<String> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`. Unparseable values are skipped
    /// and reported by name.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut ignored = Vec::new();

        if let Some(level) = lookup("TALLY_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(json) = lookup("TALLY_LOG_JSON") {
            match json.parse::<bool>() {
                Ok(json) => self.logging.json = json,
                Err(_) => ignored.push("TALLY_LOG_JSON".to_string()),
            }
        }
        if let Some(limit) = lookup("TALLY_HISTORY_DISPLAY_LIMIT") {
            match limit.parse::<usize>() {
                Ok(limit) => self.history.display_limit = limit,
                Err(_) => ignored.push("TALLY_HISTORY_DISPLAY_LIMIT".to_string()),
            }
        }

        ignored
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.history.display_limit >= 1, "history.display_limit must be at least 1");
        ensure!(!self.logging.level.trim().is_empty(), "logging.level must not be empty");
        Ok(())
    }
}
