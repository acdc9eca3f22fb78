//! Configuration file handling.
//!
//! Every field has a default, so an empty file (or no file at all)
//! yields a usable configuration.
//!
//! ```toml
//! [service]
//! base_url = "http://127.0.0.1:8080"
//! timeout_ms = 8000
//!
//! [password]
//! length = 16
//! special = false
//! ```

use crate::charset::ClassSelection;
use crate::generator::PasswordLength;
use crate::service::ServiceConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Base URL does not parse or cannot carry a path.
    #[error("invalid service URL: {0}")]
    InvalidUrl(String),
    /// Wait budget of zero.
    #[error("invalid timeout (must be at least 1 ms)")]
    InvalidTimeout,
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// The file is not valid TOML or holds out-of-range values.
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Default password settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordConfig {
    /// Default password length.
    pub length: PasswordLength,
    /// Default enabled classes.
    #[serde(flatten)]
    pub classes: ClassSelection,
}

/// Full configuration file format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    /// `[service]` section.
    #[serde(default)]
    pub service: ServiceConfig,
    /// `[password]` section.
    #[serde(default)]
    pub password: PasswordConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.service.validate()?;
        Ok(config)
    }
}
