//! Error handling module for the stache CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use stache_util::{DelimiterError, TemplateError};
use thiserror::Error;

/// Main error type for the stache CLI application.
#[derive(Error, Debug)]
pub enum CliError {
    /// Error when the configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when a template file cannot be read.
    #[error("Failed to read {path}: {source}")]
    ReadTemplate {
        /// File that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when the configuration file is not valid TOML.
    #[error("Failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Error when a delimiter pair is rejected.
    #[error("Invalid delimiters: {0}")]
    Delimiter(#[from] DelimiterError),

    /// Error when a template fails to tokenize.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Error when `check` found malformed templates.
    #[error("{failed} of {total} template(s) failed to tokenize")]
    CheckFailed {
        /// Number of templates with errors.
        failed: usize,
        /// Number of templates checked.
        total: usize,
    },
}

/// Result type alias using CliError.
pub type Result<T> = std::result::Result<T, CliError>;
