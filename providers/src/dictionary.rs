use crate::util::{http_client, join_url};
use crate::{ProviderError, RemoteConfig};
use crosswordle_core::{LookupError, Word, WordLookup};
use reqwest::StatusCode;
use tracing::{debug, warn};

/// Dictionary service reached over HTTP.
///
/// `GET {base}/words/{WORD}` answers `200` for admissible words and `404` for
/// unknown ones. Any other status, a transport error or a timeout is reported
/// as [`LookupError::Unavailable`].
#[derive(Debug, Clone)]
pub struct RemoteDictionary {
    client: reqwest::Client,
    config: RemoteConfig,
}

impl RemoteDictionary {
    pub fn new(config: RemoteConfig) -> Result<Self, ProviderError> {
        let client = http_client(config.timeout)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    fn word_url(&self, word: &Word) -> String {
        join_url(&self.config.base_url, &format!("words/{}", word))
    }
}

impl WordLookup for RemoteDictionary {
    async fn is_valid_word(&self, word: &Word) -> Result<bool, LookupError> {
        let url = self.word_url(word);
        let res = self.client.get(&url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "Dictionary request failed");
            LookupError::Unavailable(e.to_string())
        })?;

        match res.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => {
                debug!(%word, "Word not in remote dictionary");
                Ok(false)
            }
            status => {
                warn!(url = %url, %status, "Unexpected dictionary response");
                Err(LookupError::Unavailable(format!(
                    "{} answered with status {}",
                    url, status
                )))
            }
        }
    }
}
