//! Error types for reporting releases to the Archyl API.

use thiserror::Error;

/// Every way a single release report can fail. All variants are terminal
/// for the invocation and surface as one human-readable message.
#[derive(Error, Debug)]
pub enum ReporterError {
    // Configuration errors
    #[error("Input required and not supplied: {0}")]
    MissingInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Validation errors
    #[error("No version provided and GITHUB_REF_NAME is not set")]
    MissingVersion,

    // Network/API errors
    #[error("{0}")]
    Transport(String),

    #[error("Archyl API returned {status}: {body}")]
    Api { status: u16, body: String },
}

/// Result type alias using ReporterError
pub type Result<T> = std::result::Result<T, ReporterError>;

impl ReporterError {
    /// Create a missing input error for the named action input
    pub fn missing_input(name: impl Into<String>) -> Self {
        Self::MissingInput(name.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an API error, serializing the response body as compact JSON
    pub fn api(status: u16, body: &serde_json::Value) -> Self {
        Self::Api {
            status,
            body: body.to_string(),
        }
    }
}

// The transport's own message is surfaced as-is
impl From<reqwest::Error> for ReporterError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
