//! # Configuration Management for Soquery
//!
//! This crate provides the configuration structures for the SOQL translator:
//! defaults applied to select statements that do not set their own cursor or
//! sort, and an upper bound on the row limit.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{SelectDefaults, TranslatorConfig};
//!
//! let config = TranslatorConfig::new(SelectDefaults::new(Some(200), Some(2000), None));
//! assert!(config.validate().is_ok());
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [select]
//! default_limit = 200
//! max_limit = 2000
//! default_sort = "CreatedDate"
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::TranslatorConfig;
//!
//! // Load from SOQUERY_CONFIG or ./soquery.toml, defaults otherwise
//! let config = TranslatorConfig::load()?;
//!
//! // Or load from custom path
//! let config = TranslatorConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./soquery.toml";
const CONFIG_PATH_VAR: &str = "SOQUERY_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete translator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default)]
    pub select: SelectDefaults,
}

/// Defaults for select statements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectDefaults {
    /// Row limit used when a statement sets none
    #[serde(default)]
    pub default_limit: Option<u64>,
    /// Largest row limit a statement may request
    #[serde(default)]
    pub max_limit: Option<u64>,
    /// Sort field used when a statement sets none
    #[serde(default)]
    pub default_sort: Option<String>,
}

impl TranslatorConfig {
    pub fn new(select: SelectDefaults) -> Self {
        Self { select }
    }

    /// Load configuration from the TOML file named in `SOQUERY_CONFIG` (the
    /// variable may come from `.env`), then from `./soquery.toml`. Falls back to
    /// defaults when neither exists.
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }

        if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let select = &self.select;

        if select.max_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "Select max_limit must be greater than 0".to_string(),
            ));
        }
        if select.default_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "Select default_limit must be greater than 0".to_string(),
            ));
        }
        if let (Some(default_limit), Some(max_limit)) = (select.default_limit, select.max_limit) {
            if default_limit > max_limit {
                return Err(ConfigError::Invalid(
                    "Select default_limit cannot be greater than max_limit".to_string(),
                ));
            }
        }
        if select
            .default_sort
            .as_deref()
            .is_some_and(|sort| sort.trim().is_empty())
        {
            return Err(ConfigError::Invalid(
                "Select default_sort cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl SelectDefaults {
    /// Create new select defaults
    pub fn new(
        default_limit: Option<u64>,
        max_limit: Option<u64>,
        default_sort: Option<String>,
    ) -> Self {
        Self {
            default_limit,
            max_limit,
            default_sort,
        }
    }
}
