//! Line-oriented play loop.

use crate::render;
use color_eyre::eyre::Result;
use crosswordle_core::{GameError, GameSession, Phase, Word, WordError, WordLookup};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(Word),
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, WordError> {
        match line.trim() {
            ":q" | ":quit" => Ok(Command::Quit),
            ":h" | ":help" => Ok(Command::Help),
            other => Word::parse(other).map(Command::Guess),
        }
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayEnd {
    Finished(Phase),
    Quit,
    EndOfInput,
}

const HELP: &str = "Type a guess and press enter. :quit saves and exits.";

/// Prints the board header: theme, hint, clues.
pub fn print_intro<W: Write>(session: &GameSession, out: &mut W) -> Result<()> {
    let data = session.puzzle().data();
    writeln!(out, "Crosswordle {} ({} letters)", data.date, session.puzzle().word_length())?;
    if !data.theme.is_empty() {
        writeln!(out, "Theme: {}", data.theme)?;
    }
    if !data.theme_hint.is_empty() {
        writeln!(out, "Hint: {}", data.theme_hint)?;
    }
    writeln!(out, "Crossers:\n{}", render::render_crossers(session))?;
    for attempt in session.attempts() {
        writeln!(out, "{}", render::render_feedback(&attempt.feedback))?;
    }
    writeln!(out, "{} guesses left. {}", session.attempts_remaining(), HELP)?;
    Ok(())
}

/// Reads guesses from `input` until the session ends, the player quits or input runs out.
pub async fn play<L, R, W>(
    session: &mut GameSession,
    lookup: &L,
    input: R,
    out: &mut W,
) -> Result<PlayEnd>
where
    L: WordLookup,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if session.phase().is_terminal() {
        return Ok(PlayEnd::Finished(session.phase()));
    }

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let word = match Command::parse(&line) {
            Ok(Command::Guess(word)) => word,
            Ok(Command::Help) => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Ok(Command::Quit) => return Ok(PlayEnd::Quit),
            Err(e) => {
                writeln!(out, "Letters only please ({})", e)?;
                continue;
            }
        };

        let outcome = match session.submit_guess(lookup, &word).await {
            Ok(outcome) => outcome,
            Err(GameError::InvalidLength { expected, .. }) => {
                writeln!(out, "Guesses must have {} letters", expected)?;
                continue;
            }
            Err(GameError::NotARealWord(word)) => {
                writeln!(out, "{} is not in the word list", word)?;
                continue;
            }
            Err(GameError::LookupUnavailable(e)) => {
                writeln!(out, "Could not check that word right now, try again ({})", e)?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        writeln!(out, "{}", render::render_feedback(&outcome.feedback))?;
        let hints = render::render_hint_bar(&outcome.present_letters);
        if !hints.is_empty() {
            writeln!(out, "{}", hints)?;
        }
        if !outcome.newly_revealed_crosser_ids.is_empty() {
            writeln!(out, "Crosser unlocked!\n{}", render::render_crossers(session))?;
        }

        match outcome.phase {
            Phase::InProgress => {
                writeln!(out, "{}", render::render_keyboard(session))?;
                writeln!(out, "{} guesses left", outcome.attempts_remaining)?;
            }
            phase => return Ok(PlayEnd::Finished(phase)),
        }
    }

    Ok(PlayEnd::EndOfInput)
}

/// Closing message for a finished session.
pub fn print_summary<W: Write>(session: &GameSession, out: &mut W) -> Result<()> {
    match (session.phase(), session.answer()) {
        (Phase::Won, _) => writeln!(out, "Solved!")?,
        (Phase::Lost, Some(answer)) => writeln!(out, "Out of guesses. The word was {}", answer)?,
        _ => return Ok(()),
    }
    writeln!(out, "\n{}", session.share_text())?;
    Ok(())
}
