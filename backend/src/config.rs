//! Host settings, read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `CONSOLE_HOST` | `127.0.0.1` |
//! | `CONSOLE_PORT` | `3000` |
//! | `PERSON_API_URL` | `http://localhost:8080` |
//! | `CONSOLE_OPEN_BROWSER` | `true` |

use common::config::DEFAULT_API_URL;
use common::{ConfigError, ConsoleConfig};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    /// Published to the browser app at `/console/config`.
    pub console: ConsoleConfig,
    pub open_browser: bool,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or blank keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get("CONSOLE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match get("CONSOLE_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| invalid("CONSOLE_PORT", &raw))?,
            None => DEFAULT_PORT,
        };
        let console = ConsoleConfig::new(
            get("PERSON_API_URL").as_deref().unwrap_or(DEFAULT_API_URL),
        )?;
        let open_browser = match get("CONSOLE_OPEN_BROWSER") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| invalid("CONSOLE_OPEN_BROWSER", &raw))?,
            None => true,
        };

        Ok(Self {
            host,
            port,
            console,
            open_browser,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
