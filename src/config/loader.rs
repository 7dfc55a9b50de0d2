use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/topicdeck/config.toml` on Unix/macOS, or the
    /// platform equivalent via `dirs::config_dir()`. Falls back to the
    /// current directory if the config dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("topicdeck").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file is not an error: the built-in seed is used instead.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from an explicit path.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - At least one category is configured
    /// - Category names are unique (they are the lookup keys)
    /// - The target category exists in the catalogue
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalogue.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one category must be configured".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for category in &self.catalogue {
            if !seen.insert(category.name.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("Duplicate category name '{}'", category.name),
                });
            }
        }

        let target = &self.defaults.target_category;
        if !self.catalogue.iter().any(|c| &c.name == target) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Target category '{}' not found in configured catalogue",
                    target
                ),
            });
        }

        Ok(())
    }
}
