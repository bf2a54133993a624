//! Shared utilities for remote providers.

use crate::ProviderError;
use std::time::Duration;

/// User-Agent string for HTTP requests.
pub const USER_AGENT: &str = concat!("crosswordle/", env!("CARGO_PKG_VERSION"));

/// Create a configured reqwest client with standard headers and a request timeout.
pub fn http_client(timeout: Duration) -> Result<reqwest::Client, ProviderError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// Join a base URL and a path with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
