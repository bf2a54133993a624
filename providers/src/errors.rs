use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Fetch error: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Serde parse error: {0}")]
    SerdeParseError(#[from] serde_json::Error),

    #[error("Missing configuration: {0} is not set")]
    MissingConfig(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Request to {url} failed (status: {status})")]
    Status { url: String, status: u16 },

    #[error("No puzzle published for {0}")]
    NotFound(NaiveDate),
}
