//! Single-player game session over one validated puzzle.
//!
//! A session starts `InProgress` and ends either `Won` or `Lost`. State is only
//! touched after a guess has passed every check, so a rejected guess (or a
//! dropped `submit_guess` future) leaves the session exactly as it was.

use crate::feedback::{self, InputError, LetterFeedback, LetterStatus};
use crate::lookup::{LookupError, WordLookup};
use crate::{CrosserSpec, ValidatedPuzzle, Word};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::num::NonZeroUsize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

pub const DEFAULT_MAX_ATTEMPTS: NonZeroUsize = NonZeroUsize::new(6).unwrap();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Phase::InProgress)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub guess: Word,
    pub feedback: Vec<LetterFeedback>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Session is over, no more guesses are accepted")]
    SessionTerminated,
    #[error("Guess has {actual} letters, expected {expected}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("{0} is not in the word list")]
    NotARealWord(Word),
    #[error(transparent)]
    LookupUnavailable(#[from] LookupError),
    #[error("Snapshot belongs to puzzle {found}, not {expected}")]
    SnapshotMismatch { expected: String, found: String },
}

impl From<InputError> for GameError {
    fn from(err: InputError) -> Self {
        match err {
            InputError::InvalidLength { expected, actual } => {
                GameError::InvalidLength { expected, actual }
            }
        }
    }
}

/// What a successful guess tells the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessOutcome {
    pub feedback: Vec<LetterFeedback>,
    pub phase: Phase,
    /// Letters in the main word whose position is still unknown, from this guess only.
    pub present_letters: BTreeSet<char>,
    pub revealed_crosser_ids: BTreeSet<String>,
    /// Crossers revealed by this guess and not before.
    pub newly_revealed_crosser_ids: Vec<String>,
    pub attempts_remaining: usize,
}

/// Admitted guesses of a session, enough to rebuild it with [`GameSession::resume`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub puzzle_id: String,
    pub guesses: Vec<Word>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    puzzle: Arc<ValidatedPuzzle>,
    attempts: Vec<Attempt>,
    max_attempts: NonZeroUsize,
    phase: Phase,
    revealed_crosser_ids: BTreeSet<String>,
    present_letters: BTreeSet<char>,
}

impl GameSession {
    #[instrument(skip(puzzle), fields(puzzle_id = %puzzle.id()))]
    pub fn new(puzzle: Arc<ValidatedPuzzle>, max_attempts: NonZeroUsize) -> Self {
        info!("Starting game session");
        Self {
            puzzle,
            attempts: Vec::new(),
            max_attempts,
            phase: Phase::InProgress,
            revealed_crosser_ids: BTreeSet::new(),
            present_letters: BTreeSet::new(),
        }
    }

    /// Rebuilds a session from previously admitted guesses.
    ///
    /// Guesses are replayed without consulting the dictionary since they were
    /// admitted when first played.
    #[instrument(skip(puzzle, snapshot), fields(puzzle_id = %puzzle.id(), guesses = snapshot.guesses.len()))]
    pub fn resume(
        puzzle: Arc<ValidatedPuzzle>,
        max_attempts: NonZeroUsize,
        snapshot: &SessionSnapshot,
    ) -> Result<Self, GameError> {
        if snapshot.puzzle_id != puzzle.id() {
            return Err(GameError::SnapshotMismatch {
                expected: puzzle.id().to_string(),
                found: snapshot.puzzle_id.clone(),
            });
        }

        let mut session = Self::new(puzzle, max_attempts);
        for guess in &snapshot.guesses {
            session.check_admissible(guess)?;
            session.record(guess.clone())?;
        }
        Ok(session)
    }

    /// Submits a guess for the main word.
    ///
    /// Checks run in order: the session must be in progress, the guess must
    /// have the main word's length, and the dictionary must accept it. Only
    /// then is the attempt recorded and the derived state recomputed.
    #[instrument(skip(self, lookup, guess), fields(puzzle_id = %self.puzzle.id(), guess = %guess))]
    pub async fn submit_guess<L>(&mut self, lookup: &L, guess: &Word) -> Result<GuessOutcome, GameError>
    where
        L: WordLookup + ?Sized,
    {
        self.check_admissible(guess)?;

        match lookup.is_valid_word(guess).await {
            Ok(true) => {}
            Ok(false) => {
                debug!("Guess rejected by dictionary");
                return Err(GameError::NotARealWord(guess.clone()));
            }
            Err(err) => {
                warn!(error = %err, "Dictionary lookup failed");
                return Err(err.into());
            }
        }

        self.record(guess.clone())
    }

    fn check_admissible(&self, guess: &Word) -> Result<(), GameError> {
        if self.phase.is_terminal() {
            debug!(phase = ?self.phase, "Guess after session end");
            return Err(GameError::SessionTerminated);
        }
        let expected = self.puzzle.word_length();
        if guess.len() != expected {
            return Err(GameError::InvalidLength {
                expected,
                actual: guess.len(),
            });
        }
        Ok(())
    }

    fn record(&mut self, guess: Word) -> Result<GuessOutcome, GameError> {
        let feedback = feedback::score(&guess, self.puzzle.main_word())?;
        let solved = &guess == self.puzzle.main_word();
        debug!(feedback = %feedback::feedback_to_emoji(&feedback), "Scored guess");

        self.attempts.push(Attempt {
            guess,
            feedback: feedback.clone(),
        });
        self.present_letters = present_letters(&feedback);
        let newly_revealed = self.reveal_crossers(&feedback);

        self.phase = if solved {
            Phase::Won
        } else if self.attempts.len() >= self.max_attempts.get() {
            Phase::Lost
        } else {
            Phase::InProgress
        };
        if self.phase.is_terminal() {
            info!(phase = ?self.phase, attempts = self.attempts.len(), "Session finished");
        }

        Ok(GuessOutcome {
            feedback,
            phase: self.phase,
            present_letters: self.present_letters.clone(),
            revealed_crosser_ids: self.revealed_crosser_ids.clone(),
            newly_revealed_crosser_ids: newly_revealed,
            attempts_remaining: self.attempts_remaining(),
        })
    }

    /// Adds every crosser whose shared letter was scored correct; returns the new ones.
    fn reveal_crossers(&mut self, feedback: &[LetterFeedback]) -> Vec<String> {
        let mut newly_revealed = Vec::new();
        for (crosser, offset) in self.puzzle.intersections() {
            let correct = feedback
                .get(offset)
                .is_some_and(|f| f.status == LetterStatus::Correct);
            if correct && self.revealed_crosser_ids.insert(crosser.id.clone()) {
                info!(crosser_id = %crosser.id, "Crosser revealed");
                newly_revealed.push(crosser.id.clone());
            }
        }
        newly_revealed
    }

    pub fn puzzle(&self) -> &Arc<ValidatedPuzzle> {
        &self.puzzle
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn max_attempts(&self) -> NonZeroUsize {
        self.max_attempts
    }

    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts.get().saturating_sub(self.attempts.len())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn present_letters(&self) -> &BTreeSet<char> {
        &self.present_letters
    }

    pub fn revealed_crosser_ids(&self) -> &BTreeSet<String> {
        &self.revealed_crosser_ids
    }

    pub fn revealed_crossers(&self) -> Vec<&CrosserSpec> {
        self.puzzle
            .crossers()
            .iter()
            .filter(|c| self.revealed_crosser_ids.contains(&c.id))
            .collect()
    }

    /// The main word, once the session can no longer be played.
    pub fn answer(&self) -> Option<&Word> {
        self.phase.is_terminal().then(|| self.puzzle.main_word())
    }

    /// Best status seen for every guessed letter, across all attempts.
    pub fn keyboard(&self) -> BTreeMap<char, LetterStatus> {
        let mut keys = BTreeMap::new();
        for f in self.attempts.iter().flat_map(|a| a.feedback.iter()) {
            keys.entry(f.letter)
                .and_modify(|status: &mut LetterStatus| *status = (*status).max(f.status))
                .or_insert(f.status);
        }
        keys
    }

    /// Spoiler-free summary: a header line then one emoji row per attempt.
    pub fn share_text(&self) -> String {
        let tries = match self.phase {
            Phase::Won => self.attempts.len().to_string(),
            Phase::Lost => "X".to_string(),
            Phase::InProgress => "-".to_string(),
        };
        let mut text = format!("{} {}/{}", self.puzzle.id(), tries, self.max_attempts);
        for attempt in &self.attempts {
            text.push('\n');
            text.push_str(&feedback::feedback_to_emoji(&attempt.feedback));
        }
        text
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            puzzle_id: self.puzzle.id().to_string(),
            guesses: self.attempts.iter().map(|a| a.guess.clone()).collect(),
        }
    }
}

/// Letters scored present in this row, minus any letter also scored correct in it.
fn present_letters(feedback: &[LetterFeedback]) -> BTreeSet<char> {
    let correct: BTreeSet<char> = feedback
        .iter()
        .filter(|f| f.status == LetterStatus::Correct)
        .map(|f| f.letter)
        .collect();
    feedback
        .iter()
        .filter(|f| f.status == LetterStatus::Present && !correct.contains(&f.letter))
        .map(|f| f.letter)
        .collect()
}
