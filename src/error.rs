//! Error types for the kubeforge configuration front-end.
//!
//! This module provides the error hierarchy for configuration loading,
//! defaulting, and validation. Validation violations are carried as values
//! inside [`ValidationErrors`], never thrown mid-traversal.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ValidationErrors;

/// The main error type for kubeforge operations.
#[derive(Debug, Error)]
pub enum KubeforgeError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file was not found.
    #[error("Configuration file not found: {path}")]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// The configuration file could not be parsed.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Optional source location.
        location: Option<String>,
    },

    /// The configuration is well-formed but violates one or more rules.
    ///
    /// Carries every violation found in the validation pass.
    #[error("Configuration validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Result type alias for kubeforge operations.
pub type Result<T> = std::result::Result<T, KubeforgeError>;

impl KubeforgeError {
    /// Creates a new internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<ValidationErrors> for KubeforgeError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Config(ConfigError::Validation(errors))
    }
}
