//! Error types for the access review exporter

use thiserror::Error;

/// Result type alias for exporter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to write CSV report: {0}")]
    Csv(String),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err.to_string())
    }
}

/// Okta API errors. Any non-success status ends up here and aborts the export.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check that OKTA_API_TOKEN is a valid SSWS token.")]
    Unauthorized,

    #[error("Access denied. The API token lacks permission to read this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Okta API returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to Okta".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OKTA_API_TOKEN is not set. Export it or add it to a .env file.")]
    MissingApiToken,

    #[error("OKTA_BASE_URL is not set. Export it or add it to a .env file.")]
    MissingBaseUrl,

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
