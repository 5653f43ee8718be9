//! Configuration management for influx-naming
//!
//! Handles loading and validating the naming strategy from YAML files.
//!
//! ```yaml
//! transformer:
//!   strategy: categories
//!   categories: [server, type]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::transformer::{CategoriesTransformer, Transformer};

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Error parsing the configuration file
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Naming strategy configuration
    #[serde(default)]
    pub transformer: TransformerConfig,
}

/// Naming strategy selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum TransformerConfig {
    /// `key.value.key.value...base` decomposition
    #[default]
    KeyValue,

    /// Positional category labels
    Categories {
        /// Ordered category labels
        #[serde(default)]
        categories: Vec<String>,
    },
}

impl TransformerConfig {
    /// Build the configured transformer
    ///
    /// # Errors
    /// Returns `ConfigError::ValidationError` for unusable category labels
    pub fn build(&self) -> Result<Transformer, ConfigError> {
        match self {
            TransformerConfig::KeyValue => Ok(Transformer::key_value()),
            TransformerConfig::Categories { categories } => {
                CategoriesTransformer::try_new(categories.iter().cloned())
                    .map(Transformer::Categories)
                    .map_err(|e| ConfigError::ValidationError(e.to_string()))
            }
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate configuration from a YAML string
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file, falling back to defaults if not found
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "Config file not found, using defaults"
            );
            return Ok(Self::default());
        }

        Self::load(path)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let TransformerConfig::Categories { categories } = &self.transformer {
            if categories.is_empty() {
                tracing::debug!("Categories strategy without categories; names pass through unchanged");
            }
        }
        self.transformer.build().map(|_| ())
    }
}
