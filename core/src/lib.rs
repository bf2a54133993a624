pub mod direction;
pub mod feedback;
pub mod lookup;
pub mod puzzle;
pub mod session;
pub mod source;
pub mod word;

pub use direction::Direction;
pub use feedback::{score, InputError, LetterFeedback, LetterStatus};
pub use lookup::{LookupError, WordLookup};
pub use puzzle::{
    validate, CrosserSpec, GridSize, MainWordSpec, PuzzleData, ValidatedPuzzle, ValidationError,
    ValidationRule,
};
pub use session::{
    Attempt, GameError, GameSession, GuessOutcome, Phase, SessionSnapshot, DEFAULT_MAX_ATTEMPTS,
};
pub use source::PuzzleSource;
pub use word::{Word, WordError};
