//! Configuration for the exporter
//!
//! Settings are read once at startup and passed by reference to the API client.
//! A `.env` file in the working directory is honored, but variables already
//! present in the process environment take precedence.

use crate::error::{ConfigError, Result};

/// Environment variable holding the Okta API token
pub const API_TOKEN_VAR: &str = "OKTA_API_TOKEN";

/// Environment variable holding the Okta org base URL (e.g. `https://acme.okta.com`)
pub const BASE_URL_VAR: &str = "OKTA_BASE_URL";

/// Exporter configuration
#[derive(Clone)]
pub struct Config {
    /// Okta API token, sent as `SSWS <token>`
    pub api_token: String,

    /// Okta org base URL without a trailing slash
    pub base_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment, seeding it from `.env` first.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Blank values are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_token = read(API_TOKEN_VAR).ok_or(ConfigError::MissingApiToken)?;
        let base_url = read(BASE_URL_VAR).ok_or(ConfigError::MissingBaseUrl)?;

        let config = Self {
            api_token,
            base_url: base_url.trim_end_matches('/').to_string(),
        };
        config.validate()?;

        Ok(config)
    }

    /// Validate that the base URL can be used to build request URLs
    fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ConfigError::Invalid(format!(
                "{} must start with http:// or https:// (got '{}')",
                BASE_URL_VAR, self.base_url
            ))
            .into());
        }
        Ok(())
    }
}
