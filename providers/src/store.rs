use crate::util::{http_client, join_url};
use crate::{ProviderError, RemoteConfig};
use chrono::NaiveDate;
use crosswordle_core::{PuzzleData, PuzzleSource};
use reqwest::StatusCode;
use tracing::info;

/// Published puzzles served as JSON at `GET {base}/puzzles/{YYYY-MM-DD}`.
#[derive(Debug, Clone)]
pub struct RemotePuzzleStore {
    client: reqwest::Client,
    config: RemoteConfig,
}

impl RemotePuzzleStore {
    pub fn new(config: RemoteConfig) -> Result<Self, ProviderError> {
        let client = http_client(config.timeout)?;
        Ok(Self { client, config })
    }

    /// Download the puzzle for the given date.
    pub async fn download(&self, date: NaiveDate) -> Result<PuzzleData, ProviderError> {
        let url = join_url(
            &self.config.base_url,
            &format!("puzzles/{}", date.format("%Y-%m-%d")),
        );

        let res = self.client.get(&url).send().await?;
        match res.status() {
            StatusCode::NOT_FOUND => return Err(ProviderError::NotFound(date)),
            status if !status.is_success() => {
                return Err(ProviderError::Status {
                    url,
                    status: status.as_u16(),
                });
            }
            _ => {}
        }

        let body = res.text().await?;
        let puzzle: PuzzleData = serde_json::from_str(&body)?;
        info!(puzzle_id = %puzzle.id, %date, "Downloaded puzzle");
        Ok(puzzle)
    }
}

impl PuzzleSource for RemotePuzzleStore {
    type Error = ProviderError;

    async fn fetch_puzzle(&self, date: NaiveDate) -> Result<PuzzleData, ProviderError> {
        self.download(date).await
    }
}
