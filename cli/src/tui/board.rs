use crosswordle_core::{GameSession, LetterStatus};

/// What a single grid square shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardCell {
    /// Not part of any word.
    Blank,
    /// Main-word square, with its letter once it has been pinned down.
    Main(Option<char>),
    /// Crosser square, with its letter once the crosser is revealed.
    Crosser(Option<char>),
}

/// Lays out the puzzle grid as the player currently knows it.
///
/// Main-word letters appear once some guess scored them correct (or the
/// session is over); crosser letters appear once their crosser is revealed.
/// The board is cropped to the rows and columns the words occupy, so its size
/// follows the words rather than the declared grid.
pub fn board(session: &GameSession) -> Vec<Vec<BoardCell>> {
    let puzzle = session.puzzle();
    let mut placed: Vec<((usize, usize), BoardCell)> = Vec::new();

    let revealed = session.revealed_crosser_ids();
    for crosser in puzzle.crossers() {
        let shown = revealed.contains(&crosser.id);
        for (offset, letter) in crosser.word.chars().enumerate() {
            placed.push((crosser.cell_at(offset), BoardCell::Crosser(shown.then_some(letter))));
        }
    }

    // main word last so it wins the shared squares
    let over = session.phase().is_terminal();
    for (offset, cell) in puzzle.data().main_word.cells().enumerate() {
        let pinned = over
            || session.attempts().iter().any(|a| {
                a.feedback
                    .get(offset)
                    .is_some_and(|f| f.status == LetterStatus::Correct)
            });
        let letter = pinned.then(|| puzzle.main_word().letter_at(offset)).flatten();
        placed.push((cell, BoardCell::Main(letter)));
    }

    let Some(top) = placed.iter().map(|((row, _), _)| *row).min() else {
        return Vec::new();
    };
    let bottom = placed.iter().map(|((row, _), _)| *row).max().unwrap_or(top);
    let left = placed.iter().map(|((_, col), _)| *col).min().unwrap_or(0);
    let right = placed.iter().map(|((_, col), _)| *col).max().unwrap_or(left);

    let mut cells = vec![vec![BoardCell::Blank; right - left + 1]; bottom - top + 1];
    for ((row, col), cell) in placed {
        cells[row - top][col - left] = cell;
    }
    cells
}
