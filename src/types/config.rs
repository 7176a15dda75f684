//! Configuration for memokit.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{MemokitError, MemokitResult};

/// Main configuration for memokit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Cross-call result cache settings.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Input limits for the memoized calculators.
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Version comparison settings.
    #[serde(default)]
    pub version: VersionConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// LRU cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Maximum cache capacity (number of entries).
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: default_cache_capacity(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_cache_capacity() -> usize {
    1000
}

/// Input limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Largest `n` accepted by `fibonacci` and `binomial`.
    #[serde(default = "default_max_index")]
    pub max_index: u64,

    /// Largest binomial memo table, counted as `(n - m + 1) * (m + 1)`
    /// after `m` is folded to `min(m, n - m)`.
    #[serde(default = "default_max_cells")]
    pub max_cells: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_index: default_max_index(),
            max_cells: default_max_cells(),
        }
    }
}

pub(crate) fn default_max_index() -> u64 {
    10_000
}

pub(crate) fn default_max_cells() -> u64 {
    250_000
}

/// Version comparison settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionConfig {
    /// Component delimiter.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

fn default_delimiter() -> char {
    '.'
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> MemokitResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> MemokitResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            cache: CacheConfig::default(),
            limits: LimitsConfig::default(),
            version: VersionConfig::default(),
        }
    }

    /// Checks values that serde cannot reject on its own.
    pub fn validate(&self) -> MemokitResult<()> {
        if self.cache.enabled && self.cache.capacity == 0 {
            return Err(MemokitError::config(
                "cache.capacity must be greater than zero when the cache is enabled",
            ));
        }

        if self.limits.max_cells == 0 {
            return Err(MemokitError::config(
                "limits.max_cells must be greater than zero",
            ));
        }

        let delimiter = self.version.delimiter;
        if delimiter.is_ascii_digit() || delimiter.is_whitespace() {
            return Err(MemokitError::config(format!(
                "version.delimiter cannot be a digit or whitespace, got {:?}",
                delimiter
            )));
        }

        match self.general.log_format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(MemokitError::config(format!(
                "general.log_format must be 'text' or 'json', got '{}'",
                other
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
