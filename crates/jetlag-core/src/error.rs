//! Core error types for jetlag-core.
//!
//! Plan computation itself has very few failure modes: unknown zone symbols
//! degrade to UTC unless strict resolution is requested, and malformed time
//! strings are reported instead of being carried into the arithmetic.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for jetlag-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Zone symbol missing from the offset table (strict resolution only)
    #[error("Unrecognized timezone symbol: '{symbol}'")]
    UnrecognizedZone { symbol: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A travel field could not be parsed
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput { field: String, message: String },
}

impl ValidationError {
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Home directory could not be determined
    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
