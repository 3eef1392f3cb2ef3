//! Configuration management for insured-registry.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::input::InputValidator;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "insured-registry";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "INSURED_REGISTRY_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `INSURED_REGISTRY_`, sections
///    separated by `__`, e.g. `INSURED_REGISTRY_INPUT__MAX_AGE=120`)
/// 2. TOML config file at `~/.config/insured-registry/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input validation limits.
    pub input: InputConfig,
    /// Console output behaviour.
    pub display: DisplayConfig,
}

/// Limits applied by the console when reading user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Maximum number of characters in a text field.
    pub max_text_length: usize,
    /// Lowest accepted age (inclusive).
    pub min_age: u32,
    /// Highest accepted age (inclusive).
    pub max_age: u32,
    /// Regex a phone number must match.
    pub phone_pattern: String,
}

/// Console output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of blank lines printed to clear the console.
    /// Set to 0 to never clear.
    pub clear_lines: usize,
    /// Wait for Enter after each action.
    pub pause_after_action: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_text_length: 50,
            min_age: 1,
            max_age: 150,
            phone_pattern: r"^[0-9]+$".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            clear_lines: 100,
            pause_after_action: true,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.input.max_text_length == 0 {
            return Err(Error::ConfigValidation {
                message: "max_text_length must be greater than 0".to_string(),
            });
        }

        if self.input.min_age == 0 {
            return Err(Error::ConfigValidation {
                message: "min_age must be greater than 0".to_string(),
            });
        }

        if self.input.min_age > self.input.max_age {
            return Err(Error::ConfigValidation {
                message: format!(
                    "min_age ({}) cannot be greater than max_age ({})",
                    self.input.min_age, self.input.max_age
                ),
            });
        }

        InputValidator::new(&self.input)?;
        Ok(())
    }
}
