use crate::Word;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;

/// Failure of the dictionary collaborator itself, as opposed to a negative answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Dictionary lookup unavailable: {0}")]
    Unavailable(String),
}

/// Answers whether a word may be submitted as a guess.
///
/// Implementations may perform I/O. They own their timeout and retry policy
/// and must report store failures as [`LookupError`] rather than `Ok(false)`.
pub trait WordLookup {
    fn is_valid_word(&self, word: &Word) -> impl Future<Output = Result<bool, LookupError>> + Send;
}

impl<T: WordLookup + Sync + ?Sized> WordLookup for &T {
    fn is_valid_word(&self, word: &Word) -> impl Future<Output = Result<bool, LookupError>> + Send {
        (**self).is_valid_word(word)
    }
}

impl<T: WordLookup + Send + Sync + ?Sized> WordLookup for Arc<T> {
    fn is_valid_word(&self, word: &Word) -> impl Future<Output = Result<bool, LookupError>> + Send {
        (**self).is_valid_word(word)
    }
}
