//! Puzzle data model and its structural validation.
//!
//! A puzzle is one across *main word* plus any number of *crossers*, each of
//! which shares exactly one cell with the main word. Puzzles arrive from an
//! external producer as [`PuzzleData`] and must go through [`PuzzleData::validate`]
//! before a session can be started on them.

use crate::word::is_puzzle_letter;
use crate::{Direction, Word, WordError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::{debug, warn};

/// Occupant name used in collision reports for main word cells.
pub const MAIN_WORD_OCCUPANT: &str = "main word";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainWordSpec {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub length: usize,
}

impl MainWordSpec {
    pub fn new(word: &str, row: usize, col: usize) -> Self {
        Self {
            word: word.to_uppercase(),
            row,
            col,
            length: word.chars().count(),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(|i| Direction::Across.cell_at(self.row, self.col, i))
    }

    /// Offset into the main word of the cell `(row, col)`, if it lies on it.
    pub fn offset_of(&self, row: usize, col: usize) -> Option<usize> {
        if row == self.row && col >= self.col && col - self.col < self.length {
            Some(col - self.col)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosserSpec {
    pub id: String,
    pub word: String,
    pub clue: String,
    #[serde(default)]
    pub direction: Direction,
    pub start_row: usize,
    pub start_col: usize,
    pub intersection_index: usize,
}

impl CrosserSpec {
    /// Creates a down crosser.
    pub fn new(
        id: impl Into<String>,
        word: &str,
        clue: impl Into<String>,
        start_row: usize,
        start_col: usize,
        intersection_index: usize,
    ) -> Self {
        Self {
            id: id.into(),
            word: word.to_uppercase(),
            clue: clue.into(),
            direction: Direction::Down,
            start_row,
            start_col,
            intersection_index,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn length(&self) -> usize {
        self.word.chars().count()
    }

    pub fn cell_at(&self, offset: usize) -> (usize, usize) {
        self.direction.cell_at(self.start_row, self.start_col, offset)
    }

    pub fn positions(&self) -> Vec<(usize, usize)> {
        (0..self.length()).map(|i| self.cell_at(i)).collect()
    }

    /// The cell this crosser is designed to share with the main word.
    pub fn intersection_cell(&self) -> (usize, usize) {
        self.cell_at(self.intersection_index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleData {
    pub id: String,
    pub date: NaiveDate,
    pub main_word: MainWordSpec,
    #[serde(default)]
    pub crossers: Vec<CrosserSpec>,
    pub grid_size: GridSize,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub theme_hint: String,
}

impl PuzzleData {
    pub fn crosser(&self, id: &str) -> Option<&CrosserSpec> {
        self.crossers.iter().find(|c| c.id == id)
    }

    /// Validates the puzzle, consuming it into a [`ValidatedPuzzle`].
    pub fn validate(self) -> Result<ValidatedPuzzle, ValidationError> {
        match check(&self) {
            Ok((main_word, intersections)) => {
                debug!(puzzle_id = %self.id, crossers = self.crossers.len(), "Puzzle validated");
                Ok(ValidatedPuzzle {
                    data: self,
                    main_word,
                    intersections,
                })
            }
            Err(err) => {
                warn!(puzzle_id = %self.id, rule = ?err.rule(), error = %err, "Rejected malformed puzzle");
                Err(err)
            }
        }
    }
}

/// Checks every structural invariant of `puzzle` without consuming it.
pub fn validate(puzzle: &PuzzleData) -> Result<(), ValidationError> {
    check(puzzle).map(|_| ())
}

/// The rule a malformed puzzle broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationRule {
    MainWordLetters,
    MainWordLength,
    CrosserLetters,
    IntersectionIndex,
    Geometry,
    Bounds,
    UniqueId,
    CellCollision,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Main word is invalid: {0}")]
    InvalidMainWord(WordError),

    #[error("Main word has {actual} letters but declares length {declared}")]
    MainWordLengthMismatch { declared: usize, actual: usize },

    #[error("Main word cell ({row}, {col}) is outside the grid")]
    MainWordOutOfBounds { row: usize, col: usize },

    #[error("Crosser {crosser}: invalid word: {reason}")]
    InvalidCrosserWord { crosser: String, reason: WordError },

    #[error("Crosser {crosser}: intersection index {index} is outside a word of {length} letters")]
    IntersectionOutOfRange {
        crosser: String,
        index: usize,
        length: usize,
    },

    #[error("Crosser {crosser}: runs parallel to the main word")]
    ParallelToMainWord { crosser: String },

    #[error("Crosser {crosser}: intersection row {row} is not the main word row {main_row}")]
    IntersectionOffMainRow {
        crosser: String,
        row: usize,
        main_row: usize,
    },

    #[error("Crosser {crosser}: intersection column {col} is outside the main word columns {start}..{end}")]
    IntersectionOutsideMainWord {
        crosser: String,
        col: usize,
        start: usize,
        end: usize,
    },

    #[error("Crosser {crosser}: letter {found} at column {col} disagrees with main word letter {expected}")]
    LetterMismatch {
        crosser: String,
        col: usize,
        expected: char,
        found: char,
    },

    #[error("Crosser {crosser}: cell ({row}, {col}) is outside the grid")]
    CrosserOutOfBounds {
        crosser: String,
        row: usize,
        col: usize,
    },

    #[error("Crosser id {crosser} is used more than once")]
    DuplicateCrosserId { crosser: String },

    #[error("Crosser {crosser}: cell ({row}, {col}) is already occupied by {occupant}")]
    CellCollision {
        crosser: String,
        row: usize,
        col: usize,
        occupant: String,
    },
}

impl ValidationError {
    /// Id of the offending crosser, `None` for main word rules.
    pub fn crosser_id(&self) -> Option<&str> {
        match self {
            ValidationError::InvalidMainWord(_)
            | ValidationError::MainWordLengthMismatch { .. }
            | ValidationError::MainWordOutOfBounds { .. } => None,
            ValidationError::InvalidCrosserWord { crosser, .. }
            | ValidationError::IntersectionOutOfRange { crosser, .. }
            | ValidationError::ParallelToMainWord { crosser }
            | ValidationError::IntersectionOffMainRow { crosser, .. }
            | ValidationError::IntersectionOutsideMainWord { crosser, .. }
            | ValidationError::LetterMismatch { crosser, .. }
            | ValidationError::CrosserOutOfBounds { crosser, .. }
            | ValidationError::DuplicateCrosserId { crosser }
            | ValidationError::CellCollision { crosser, .. } => Some(crosser),
        }
    }

    pub fn rule(&self) -> ValidationRule {
        match self {
            ValidationError::InvalidMainWord(_) => ValidationRule::MainWordLetters,
            ValidationError::MainWordLengthMismatch { .. } => ValidationRule::MainWordLength,
            ValidationError::MainWordOutOfBounds { .. }
            | ValidationError::CrosserOutOfBounds { .. } => ValidationRule::Bounds,
            ValidationError::InvalidCrosserWord { .. } => ValidationRule::CrosserLetters,
            ValidationError::IntersectionOutOfRange { .. } => ValidationRule::IntersectionIndex,
            ValidationError::ParallelToMainWord { .. }
            | ValidationError::IntersectionOffMainRow { .. }
            | ValidationError::IntersectionOutsideMainWord { .. }
            | ValidationError::LetterMismatch { .. } => ValidationRule::Geometry,
            ValidationError::DuplicateCrosserId { .. } => ValidationRule::UniqueId,
            ValidationError::CellCollision { .. } => ValidationRule::CellCollision,
        }
    }
}

/// Runs the checks in order and returns the parsed main word together with
/// each crosser's offset into it.
fn check(puzzle: &PuzzleData) -> Result<(Word, Vec<usize>), ValidationError> {
    let main = &puzzle.main_word;
    let main_word = parse_exact(&main.word).map_err(ValidationError::InvalidMainWord)?;
    if main_word.len() != main.length {
        return Err(ValidationError::MainWordLengthMismatch {
            declared: main.length,
            actual: main_word.len(),
        });
    }
    if let Some((row, col)) = main.cells().find(|(r, c)| !puzzle.grid_size.contains(*r, *c)) {
        return Err(ValidationError::MainWordOutOfBounds { row, col });
    }

    let mut intersections = Vec::with_capacity(puzzle.crossers.len());
    for crosser in &puzzle.crossers {
        intersections.push(check_crosser(crosser, main, &main_word, puzzle.grid_size)?);
    }

    let mut ids = HashSet::new();
    for crosser in &puzzle.crossers {
        if !ids.insert(crosser.id.as_str()) {
            return Err(ValidationError::DuplicateCrosserId {
                crosser: crosser.id.clone(),
            });
        }
    }

    check_collisions(puzzle)?;

    Ok((main_word, intersections))
}

/// Stored words must already be normalized: no trimming, no case folding,
/// since either would shift letters away from their cells.
fn parse_exact(raw: &str) -> Result<Word, WordError> {
    if let Some((position, letter)) = raw.chars().enumerate().find(|(_, c)| !is_puzzle_letter(*c)) {
        return Err(WordError::InvalidLetter { letter, position });
    }
    Word::parse(raw)
}

fn check_crosser(
    crosser: &CrosserSpec,
    main: &MainWordSpec,
    main_word: &Word,
    grid: GridSize,
) -> Result<usize, ValidationError> {
    let word = parse_exact(&crosser.word).map_err(|reason| ValidationError::InvalidCrosserWord {
        crosser: crosser.id.clone(),
        reason,
    })?;

    if crosser.intersection_index >= word.len() {
        return Err(ValidationError::IntersectionOutOfRange {
            crosser: crosser.id.clone(),
            index: crosser.intersection_index,
            length: word.len(),
        });
    }

    if crosser.direction == Direction::Across {
        return Err(ValidationError::ParallelToMainWord {
            crosser: crosser.id.clone(),
        });
    }

    let (row, col) = crosser.intersection_cell();
    if row != main.row {
        return Err(ValidationError::IntersectionOffMainRow {
            crosser: crosser.id.clone(),
            row,
            main_row: main.row,
        });
    }
    let offset = main
        .offset_of(row, col)
        .ok_or_else(|| ValidationError::IntersectionOutsideMainWord {
            crosser: crosser.id.clone(),
            col,
            start: main.col,
            end: main.col.saturating_add(main.length),
        })?;

    let found = word.as_bytes()[crosser.intersection_index] as char;
    let expected = main_word.as_bytes()[offset] as char;
    if found != expected {
        return Err(ValidationError::LetterMismatch {
            crosser: crosser.id.clone(),
            col,
            expected,
            found,
        });
    }

    if let Some((row, col)) = crosser
        .positions()
        .into_iter()
        .find(|(r, c)| !grid.contains(*r, *c))
    {
        return Err(ValidationError::CrosserOutOfBounds {
            crosser: crosser.id.clone(),
            row,
            col,
        });
    }

    Ok(offset)
}

fn check_collisions(puzzle: &PuzzleData) -> Result<(), ValidationError> {
    let mut occupied: HashMap<(usize, usize), &str> = puzzle
        .main_word
        .cells()
        .map(|cell| (cell, MAIN_WORD_OCCUPANT))
        .collect();

    for crosser in &puzzle.crossers {
        for (i, (row, col)) in crosser.positions().into_iter().enumerate() {
            if i == crosser.intersection_index {
                continue;
            }
            if let Some(occupant) = occupied.insert((row, col), crosser.id.as_str()) {
                return Err(ValidationError::CellCollision {
                    crosser: crosser.id.clone(),
                    row,
                    col,
                    occupant: occupant.to_string(),
                });
            }
        }
    }

    Ok(())
}

/// A puzzle that passed every structural check.
///
/// Only obtainable through [`PuzzleData::validate`]; share it between
/// sessions with an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPuzzle {
    data: PuzzleData,
    main_word: Word,
    intersections: Vec<usize>,
}

impl ValidatedPuzzle {
    pub fn data(&self) -> &PuzzleData {
        &self.data
    }

    pub fn into_data(self) -> PuzzleData {
        self.data
    }

    pub fn id(&self) -> &str {
        &self.data.id
    }

    pub fn date(&self) -> NaiveDate {
        self.data.date
    }

    pub fn main_word(&self) -> &Word {
        &self.main_word
    }

    pub fn word_length(&self) -> usize {
        self.main_word.len()
    }

    pub fn crossers(&self) -> &[CrosserSpec] {
        &self.data.crossers
    }

    /// Each crosser paired with the main word offset it shares.
    pub fn intersections(&self) -> impl Iterator<Item = (&CrosserSpec, usize)> {
        self.data.crossers.iter().zip(self.intersections.iter().copied())
    }
}
