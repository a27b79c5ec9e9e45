//! Configuration for the schlex driver.
//!
//! Settings come from an optional `schlex.toml`; command-line flags are
//! applied on top by the binary.
//!
//! ```toml
//! [scanner]
//! max_lexeme_length = 60
//!
//! [output]
//! format = "json"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DriverError, Result};
use schlex_lex::MAX_LEXEME_LENGTH;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "schlex.toml";

/// Driver configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Scanner settings.
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Scanner settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Maximum number of characters in one lexeme.
    #[serde(default = "default_max_lexeme_length")]
    pub max_lexeme_length: usize,
}

/// Output settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// How tokens are printed.
    #[serde(default)]
    pub format: OutputFormat,
}

/// How tokens are printed.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `KIND: lexeme` per line, then `EOF reached`.
    #[default]
    Plain,
    /// One JSON object per token, end of input included.
    Json,
}

fn default_max_lexeme_length() -> usize {
    MAX_LEXEME_LENGTH
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            max_lexeme_length: default_max_lexeme_length(),
        }
    }
}

impl Config {
    /// Loads `schlex.toml` from the current directory, or the defaults if
    /// there is none.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|e| {
            DriverError::Config(format!("Failed to parse configuration: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks settings that the types alone cannot.
    pub fn validate(&self) -> Result<()> {
        if self.scanner.max_lexeme_length == 0 {
            return Err(DriverError::Config(
                "max_lexeme_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn find_config_file() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }
}
