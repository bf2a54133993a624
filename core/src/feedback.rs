//! Guess scoring.
//!
//! Implements the Wordle feedback rules, including duplicate letters:
//! 1. First pass marks exact matches and consumes those answer positions.
//! 2. Second pass looks for each remaining guess letter among the unconsumed
//!    answer positions, left to right, consuming the first hit.

use crate::Word;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    pub fn emoji(self) -> char {
        match self {
            LetterStatus::Correct => '🟩',
            LetterStatus::Present => '🟨',
            LetterStatus::Absent => '⬛',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterFeedback {
    pub letter: char,
    pub status: LetterStatus,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Guess has {actual} letters, expected {expected}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Scores `guess` against `answer`.
pub fn score(guess: &Word, answer: &Word) -> Result<Vec<LetterFeedback>, InputError> {
    if guess.len() != answer.len() {
        return Err(InputError::InvalidLength {
            expected: answer.len(),
            actual: guess.len(),
        });
    }

    let guess = guess.as_bytes();
    let answer = answer.as_bytes();
    let mut statuses = vec![LetterStatus::Absent; guess.len()];
    let mut consumed = vec![false; answer.len()];

    for i in 0..guess.len() {
        if guess[i] == answer[i] {
            statuses[i] = LetterStatus::Correct;
            consumed[i] = true;
        }
    }

    for i in 0..guess.len() {
        if statuses[i] == LetterStatus::Correct {
            continue;
        }
        let hit = (0..answer.len()).find(|&j| !consumed[j] && answer[j] == guess[i]);
        if let Some(j) = hit {
            statuses[i] = LetterStatus::Present;
            consumed[j] = true;
        }
    }

    Ok(guess
        .iter()
        .zip(statuses)
        .map(|(&b, status)| LetterFeedback {
            letter: b as char,
            status,
        })
        .collect())
}

/// True when every letter of the row is [`LetterStatus::Correct`].
pub fn is_solved(feedback: &[LetterFeedback]) -> bool {
    !feedback.is_empty() && feedback.iter().all(|f| f.status == LetterStatus::Correct)
}

/// Renders a feedback row as share-friendly emoji squares.
pub fn feedback_to_emoji(feedback: &[LetterFeedback]) -> String {
    feedback.iter().map(|f| f.status.emoji()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    fn statuses(guess: &str, answer: &str) -> Vec<LetterStatus> {
        let guess = Word::parse(guess).unwrap();
        let answer = Word::parse(answer).unwrap();
        score(&guess, &answer)
            .unwrap()
            .into_iter()
            .map(|f| f.status)
            .collect()
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(statuses("APPLE", "APPLE"), vec![Correct; 5]);
    }

    #[test]
    fn test_aloof_against_apple() {
        // L appears in APPLE at another position
        assert_eq!(
            statuses("ALOOF", "APPLE"),
            vec![Correct, Present, Absent, Absent, Absent]
        );
    }

    #[test]
    fn test_elapp_against_apple() {
        // both P's of APPLE are still unconsumed when the guess P's are scored
        assert_eq!(statuses("ELAPP", "APPLE"), vec![Present; 5]);
    }

    #[test]
    fn test_duplicate_guess_letter_single_answer_letter() {
        // ABIDE has one E: the first E is present, the second absent
        assert_eq!(
            statuses("SPEED", "ABIDE"),
            vec![Absent, Absent, Present, Absent, Present]
        );
    }

    #[test]
    fn test_duplicate_against_double_answer_letter() {
        assert_eq!(
            statuses("SPEED", "ERASE"),
            vec![Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn test_exact_match_consumes_before_present() {
        // the E at index 4 is exact, so the leading E has nothing left to claim
        assert_eq!(
            statuses("EERIE", "THOSE"),
            vec![Absent, Absent, Absent, Absent, Correct]
        );
    }

    #[test]
    fn test_present_consumes_leftmost_unconsumed() {
        assert_eq!(
            statuses("LLAMA", "HELLO"),
            vec![Present, Present, Absent, Absent, Absent]
        );
    }

    #[test]
    fn test_letter_count_never_exceeds_answer() {
        let cases = [
            ("SPEED", "ABIDE"),
            ("EERIE", "THOSE"),
            ("LLAMA", "HELLO"),
            ("PAPAL", "APPLE"),
            ("BOOBS", "ROBOT"),
        ];
        for (guess, answer) in cases {
            let g = Word::parse(guess).unwrap();
            let a = Word::parse(answer).unwrap();
            let feedback = score(&g, &a).unwrap();
            assert_eq!(feedback.len(), a.len());

            let exact = guess.bytes().zip(answer.bytes()).filter(|(x, y)| x == y).count();
            let correct = feedback.iter().filter(|f| f.status == Correct).count();
            assert_eq!(correct, exact, "{guess} vs {answer}");

            for letter in guess.chars() {
                let marked = feedback
                    .iter()
                    .filter(|f| f.letter == letter && f.status != Absent)
                    .count();
                let available = answer.chars().filter(|&c| c == letter).count();
                assert!(marked <= available, "{guess} vs {answer}: {letter}");
            }
        }
    }

    #[test]
    fn test_score_is_idempotent() {
        let g = Word::parse("CRANE").unwrap();
        let a = Word::parse("REACT").unwrap();
        assert_eq!(score(&g, &a).unwrap(), score(&g, &a).unwrap());
    }

    #[test]
    fn test_length_mismatch() {
        let g = Word::parse("CRANES").unwrap();
        let a = Word::parse("REACT").unwrap();
        assert_eq!(
            score(&g, &a),
            Err(InputError::InvalidLength {
                expected: 5,
                actual: 6
            })
        );
    }

    #[test]
    fn test_emoji_row() {
        let g = Word::parse("ALOOF").unwrap();
        let a = Word::parse("APPLE").unwrap();
        let feedback = score(&g, &a).unwrap();
        assert_eq!(feedback_to_emoji(&feedback), "🟩🟨⬛⬛⬛");
        assert!(!is_solved(&feedback));
        assert!(is_solved(&score(&a, &a).unwrap()));
    }
}
