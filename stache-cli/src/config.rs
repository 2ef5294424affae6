//! Configuration module for the stache CLI.
//!
//! Settings are read from a `stache.toml` file:
//!
//! ```toml
//! [lexer]
//! delimiters = ["{{", "}}"]
//!
//! [output]
//! format = "text"
//! ```

use std::path::{Path, PathBuf};

use dirs::config_dir;
use serde::{Deserialize, Serialize};
use stache_lex::DelimiterPair;
use tracing::debug;

use crate::commands::common::OutputFormat;
use crate::error::{CliError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "stache.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Tokenizer settings.
    #[serde(default)]
    pub lexer: LexerConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Tokenizer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexerConfig {
    /// Opening and closing delimiters templates start with.
    #[serde(default = "default_delimiters")]
    pub delimiters: [String; 2],
}

/// Output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Format of token dumps.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_delimiters() -> [String; 2] {
    let pair = DelimiterPair::default();
    [pair.open().to_string(), pair.close().to_string()]
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            delimiters: default_delimiters(),
        }
    }
}

impl LexerConfig {
    /// The configured delimiters as a validated pair.
    pub fn delimiter_pair(&self) -> Result<DelimiterPair> {
        let [open, close] = &self.delimiters;
        DelimiterPair::new(open.as_str(), close.as_str())
            .map_err(|e| CliError::Config(format!("lexer.delimiters: {}", e)))
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User configuration directory (`<config_dir>/stache/stache.toml`)
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("no configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.lexer.delimiter_pair()?;

        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in the user configuration directory.
    fn check_user_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("stache").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config().or_else(Self::check_user_config)
    }
}
