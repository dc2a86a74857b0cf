//! Read-only board view for the presentation layer.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Cell, Color, GameStatus, Square};

/// Copy of the grid, side to move and status, taken after a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    /// `rows[rank][file]`, rank 0 (Black's back rank) first
    pub rows: [[Cell; 8]; 8],
    pub side_to_move: Color,
    pub status: GameStatus,
}

impl Snapshot {
    #[must_use]
    pub const fn cell(&self, sq: Square) -> Cell {
        self.rows[sq.rank()][sq.file()]
    }

    /// One line describing whose turn it is and whether they are in check.
    #[must_use]
    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::Ongoing => format!("{} to move", self.side_to_move),
            GameStatus::Check => format!("{} is in check", self.side_to_move),
            GameStatus::Checkmate => {
                format!("Checkmate, {} wins", self.side_to_move.opponent())
            }
        }
    }
}

/// Text diagram with rank labels 8..1 and file labels a..h, followed by the
/// status line.
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, row) in self.rows.iter().enumerate() {
            write!(f, "{} ", 8 - rank)?;
            for cell in row {
                write!(f, " {}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "{}", self.status_line())
    }
}
