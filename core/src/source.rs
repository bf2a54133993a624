use crate::PuzzleData;
use chrono::NaiveDate;
use std::future::Future;

/// Produces the puzzle published for a given day.
///
/// Sources hand back raw [`PuzzleData`]; validation is the caller's job.
pub trait PuzzleSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn fetch_puzzle(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<PuzzleData, Self::Error>> + Send;
}
