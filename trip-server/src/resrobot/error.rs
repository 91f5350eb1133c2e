//! ResRobot client error types.

use std::path::PathBuf;

/// Errors from talking to the ResRobot API or loading a mock response.
#[derive(Debug, thiserror::Error)]
pub enum ResRobotError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Access key missing or rejected
    #[error("unauthorized: check RESROBOT_API_KEY")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by ResRobot API")]
    RateLimited,

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Mock response file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
