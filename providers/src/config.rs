//! Connection settings for the remote puzzle service.
//!
//! Built once at start-up and handed to the clients; a missing or malformed
//! setting is reported right here rather than on the first request.

use crate::ProviderError;
use std::time::Duration;

/// Environment variable holding the service base URL.
pub const API_URL_ENV: &str = "CROSSWORDLE_API_URL";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl RemoteConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(ProviderError::MissingConfig(API_URL_ENV));
        }

        let parsed = reqwest::Url::parse(trimmed)
            .map_err(|e| ProviderError::InvalidConfig(format!("{}: {}", trimmed, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ProviderError::InvalidConfig(format!(
                "{}: expected an http or https URL",
                trimmed
            )));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads the base URL from [`API_URL_ENV`].
    pub fn from_env() -> Result<Self, ProviderError> {
        let url = std::env::var(API_URL_ENV).map_err(|_| ProviderError::MissingConfig(API_URL_ENV))?;
        Self::new(url)
    }
}
