//! Runtime configuration shared by the browser app and its host.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Base URL of the person/ETL backend when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Path under which the host publishes [`ConsoleConfig`] as JSON.
pub const CONFIG_PATH: &str = "/console/config";

/// What the browser app needs to know at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleConfig {
    /// Base URL of the external backend, without a trailing slash.
    pub api_url: String,
}

impl ConsoleConfig {
    pub fn new(api_url: &str) -> Result<Self, ConfigError> {
        let trimmed = api_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyApiUrl);
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(trimmed.to_string()));
        }
        Ok(Self {
            api_url: trimmed.to_string(),
        })
    }

    /// Re-validates a config received over the wire.
    pub fn validated(self) -> Result<Self, ConfigError> {
        Self::new(&self.api_url)
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
