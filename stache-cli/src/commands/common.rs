//! Common types and utilities for stache commands.

use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use stache_util::TemplateId;

use crate::error::{CliError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported formats for token dumps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line
    #[default]
    Text,
    /// A JSON array of token records
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

// ============================================================================
// Template Files
// ============================================================================

/// Read a template file as UTF-8 text.
pub fn read_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::ReadTemplate {
        path: path.display().to_string(),
        source,
    })
}

/// Identifier reported in diagnostics for a template file.
pub fn template_id_for(path: &Path) -> TemplateId {
    TemplateId::new(path.display().to_string())
}
