//! CLI argument parsing for influx-naming
//!
//! This module provides the command-line interface using clap derive macros.
//!
//! # Options
//!
//! - `--config` / `-c`: Configuration file path (default: config.yaml, env: INFLUX_NAMING_CONFIG)
//! - `--strategy`: Naming strategy, overrides config file (env: INFLUX_NAMING_STRATEGY)
//! - `--category`: Category label, repeatable, overrides config file categories
//! - `--validate`: Validate configuration and exit
//! - `--log-level` / `-l`: Log level (trace/debug/info/warn/error, env: INFLUX_NAMING_LOG_LEVEL)
//! - `--log-format`: Log format (text/json, env: INFLUX_NAMING_LOG_FORMAT)
//! - `--output-format`: Output format (text/json/yaml)
//! - `NAMES`: Dotted metric names; read from stdin, one per line, when omitted
//!
//! # Precedence
//!
//! Configuration values are resolved in the following order (highest to lowest priority):
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, TransformerConfig};
use crate::error::AppResult;

/// influx-naming - Dotted metric name to measurement/tags transformer
///
/// Splits flat dotted metric names into a measurement name and a tag set,
/// using either key/value decomposition or positional categories.
#[derive(Parser, Debug)]
#[command(name = "influx-naming")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config.yaml",
        env = "INFLUX_NAMING_CONFIG"
    )]
    pub config: PathBuf,

    /// Naming strategy (overrides config file)
    #[arg(long, value_enum, env = "INFLUX_NAMING_STRATEGY")]
    pub strategy: Option<Strategy>,

    /// Category label, in order; repeat for several (overrides config file)
    #[arg(long = "category", value_name = "LABEL")]
    pub categories: Vec<String>,

    /// Validate configuration without transforming names
    #[arg(long)]
    pub validate: bool,

    /// Log level
    #[arg(
        short,
        long,
        value_enum,
        default_value = "warn",
        env = "INFLUX_NAMING_LOG_LEVEL"
    )]
    pub log_level: LogLevel,

    /// Log format
    #[arg(
        long,
        value_enum,
        default_value = "text",
        env = "INFLUX_NAMING_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Dotted metric names (read from stdin when omitted)
    #[arg(value_name = "NAMES")]
    pub names: Vec<String>,
}

impl Cli {
    /// Load the config file and apply CLI overrides on top of it
    ///
    /// # Errors
    /// Returns `AppError::Config` if the file cannot be read, parsed or validated
    pub fn load_transformer_config(&self) -> AppResult<TransformerConfig> {
        let file = Config::load_or_default(&self.config)?;
        Ok(self.resolve_transformer(&file.transformer))
    }

    /// Apply CLI overrides on top of the file configuration
    ///
    /// `--category` alone implies the categories strategy.
    pub fn resolve_transformer(&self, file: &TransformerConfig) -> TransformerConfig {
        let file_categories = match file {
            TransformerConfig::Categories { categories } => categories.clone(),
            TransformerConfig::KeyValue => Vec::new(),
        };
        let categories = if self.categories.is_empty() {
            file_categories
        } else {
            self.categories.clone()
        };

        match self.strategy {
            Some(Strategy::KeyValue) => {
                if !self.categories.is_empty() {
                    tracing::warn!(
                        categories = ?self.categories,
                        "Categories ignored with the key-value strategy"
                    );
                }
                TransformerConfig::KeyValue
            }
            Some(Strategy::Categories) => TransformerConfig::Categories { categories },
            None if !self.categories.is_empty() => TransformerConfig::Categories { categories },
            None => file.clone(),
        }
    }
}

/// Naming strategy options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Alternating key/value tokens
    KeyValue,
    /// Positional category labels
    Categories,
}

/// Log level options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Trace level - most verbose
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warn level - default
    Warn,
    /// Error level - least verbose
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event
    Json,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}
