//! Connection settings for the random-byte service.

use crate::config::ConfigError;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Path of the generate endpoint, relative to the base URL.
const GENERATE_PATH: &str = "api/v1/generate";

/// Service location and wait budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the service, e.g. `http://127.0.0.1:8080`.
    pub base_url: String,
    /// Wait budget for one request, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            timeout_ms: 8000,
        }
    }
}

impl ServiceConfig {
    /// Creates a configuration for `base_url` with the default budget.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// The wait budget as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Resolves the full generate endpoint URL.
    ///
    /// A path prefix on the base URL is kept, so
    /// `http://host/proxy` resolves to `http://host/proxy/api/v1/generate`.
    pub fn endpoint(&self) -> Result<Url, ConfigError> {
        let mut base =
            Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidUrl(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl(format!(
                "{} cannot be used as a base URL",
                self.base_url
            )));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(GENERATE_PATH)
            .map_err(|e| ConfigError::InvalidUrl(e.to_string()))
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        self.endpoint().map(|_| ())
    }
}
