use serde::{Deserialize, Serialize};

/// Axis along which a word is laid out on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    #[default]
    Down,
}

impl Direction {
    /// Row and column step between consecutive letters.
    pub fn delta(self) -> (usize, usize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    /// Cell of the `offset`-th letter of a word starting at `(row, col)`.
    pub fn cell_at(self, row: usize, col: usize, offset: usize) -> (usize, usize) {
        let (dr, dc) = self.delta();
        (
            row.saturating_add(dr.saturating_mul(offset)),
            col.saturating_add(dc.saturating_mul(offset)),
        )
    }
}
