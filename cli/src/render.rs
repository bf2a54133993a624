//! Plain terminal rendering of session state.

use colored::Colorize;
use crosswordle_core::{GameSession, LetterFeedback, LetterStatus};
use std::collections::BTreeSet;

pub fn render_feedback(feedback: &[LetterFeedback]) -> String {
    feedback
        .iter()
        .map(|f| {
            let tile = format!(" {} ", f.letter);
            match f.status {
                LetterStatus::Correct => tile.black().on_green().to_string(),
                LetterStatus::Present => tile.black().on_yellow().to_string(),
                LetterStatus::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Letters known to be in the word but not yet placed.
pub fn render_hint_bar(present: &BTreeSet<char>) -> String {
    if present.is_empty() {
        return String::new();
    }
    let letters: Vec<String> = present.iter().map(|c| c.to_string()).collect();
    format!("In the word: {}", letters.join(" ").yellow())
}

/// Clue list; a crosser's answer is shown once it has been revealed.
pub fn render_crossers(session: &GameSession) -> String {
    let revealed = session.revealed_crosser_ids();
    session
        .puzzle()
        .crossers()
        .iter()
        .map(|crosser| {
            let answer = if revealed.contains(&crosser.id) {
                crosser.word.green().bold().to_string()
            } else {
                "_".repeat(crosser.length())
            };
            format!("  {} {} ({})", answer, crosser.clue, crosser.length())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Alphabet row with the best known status of each guessed letter.
pub fn render_keyboard(session: &GameSession) -> String {
    let keys = session.keyboard();
    ('A'..='Z')
        .map(|c| match keys.get(&c) {
            Some(LetterStatus::Correct) => c.to_string().green().to_string(),
            Some(LetterStatus::Present) => c.to_string().yellow().to_string(),
            Some(LetterStatus::Absent) => c.to_string().dimmed().to_string(),
            None => c.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
