use serde::Deserialize;
use thiserror::Error;

/// Failure of a single call against the person/ETL backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server responded with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("unexpected response body: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Builds a `Status` error from a non-2xx response, keeping the `message`
    /// field of a JSON body when there is one.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        ApiError::Status { status, message }
    }

    /// Message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API base URL must not be empty")]
    EmptyApiUrl,

    #[error("API base URL must start with http:// or https://: {0}")]
    UnsupportedScheme(String),

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}
