//! TOML configuration file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::settings::{OutputConfig, PasswordConfig};
use crate::error::GenerationError;

/// Configuration loading errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// The file is not valid TOML for this schema.
    #[error("failed to parse config file: {0}")]
    ParseError(String),
    /// The file parsed but describes an unusable configuration.
    #[error("invalid config file: {0}")]
    Invalid(#[from] GenerationError),
}

/// Full configuration file format.
///
/// ```toml
/// [generator]
/// length = 24
/// require_classes = true
/// classes = { lower = true, upper = true, digits = true }
///
/// [output]
/// format = "json"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FileConfig {
    /// Generation settings.
    #[serde(default)]
    pub generator: PasswordConfig,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded config file");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.generator.validate()?;
        Ok(config)
    }
}
