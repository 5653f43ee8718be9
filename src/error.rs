//! Error types for influx-naming
//!
//! This module defines the error types used throughout the crate.

use thiserror::Error;

/// Transformation errors
///
/// The transform operations themselves are total; these errors come from
/// the validating entry points (`DottedName::parse`,
/// `CategoriesTransformer::try_new`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Empty metric identifier
    #[error("Metric name cannot be empty")]
    EmptyName,

    /// Category label that cannot label a token
    #[error("Invalid category '{label}' at index {index}: {reason}")]
    InvalidCategory {
        index: usize,
        label: String,
        reason: String,
    },
}

/// Per-tag counter errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaggingError {
    /// A tag value would be ambiguous next to the reserved identifier separator
    #[error("Tag value '{value}' collides with the reserved separator '{separator}'")]
    SeparatorInTagValue {
        value: String,
        separator: &'static str,
    },

    /// No tag values were given
    #[error("At least one tag value is required")]
    NoTagValues,
}

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Metric transformation error
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    /// Output rendering error
    #[error("Output error: {0}")]
    Output(String),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;
