//! Square type and utilities.
//!
//! Squares are `(file, rank)` pairs. Rank 0 is Black's back rank and rank 7
//! is White's, matching the row order the board is drawn in.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::BoundsError;

/// A square on the chess board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(file: usize, rank: usize) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Create a square from coordinates known to be on the grid.
    ///
    /// # Panics
    /// Panics if `file` or `rank` is 8 or more.
    #[must_use]
    pub const fn at(file: usize, rank: usize) -> Self {
        assert!(file < 8 && rank < 8, "square off the board");
        Square {
            file: file as u8,
            rank: rank as u8,
        }
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.file as usize
    }

    /// Get the rank (0-7, where 0 = Black's back rank)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.rank as usize
    }

    /// Row-major index (0-63): rank 0 first, file a first within a rank
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square::at(idx % 8, idx / 8)
    }

    /// Every square in row-major scan order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }

    /// The square `df` files and `dr` ranks away, if it is on the board
    #[must_use]
    pub fn offset(self, df: isize, dr: isize) -> Option<Square> {
        let file = self.file as isize + df;
        let rank = self.rank as isize + dr;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square::at(file as usize, rank as usize))
        } else {
            None
        }
    }

    /// File and rank difference from `self` to `to`.
    #[inline]
    pub(crate) const fn delta(self, to: Square) -> (isize, isize) {
        (
            to.file as isize - self.file as isize,
            to.rank as isize - self.rank as isize,
        )
    }
}

/// Squares print in algebraic style (`e2` is file 4, rank 6) for logs and
/// messages.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file + b'a') as char, 8 - self.rank)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = BoundsError;

    fn try_from((file, rank): (usize, usize)) -> Result<Self, Self::Error> {
        if file >= 8 {
            return Err(BoundsError::FileOutOfBounds { file });
        }
        if rank >= 8 {
            return Err(BoundsError::RankOutOfBounds { rank });
        }
        Ok(Square::at(file, rank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_white_back_rank_as_rank_one() {
        assert_eq!(Square::at(4, 6).to_string(), "e2");
        assert_eq!(Square::at(0, 0).to_string(), "a8");
        assert_eq!(Square::at(7, 7).to_string(), "h1");
    }

    #[test]
    fn test_try_from_reports_axis() {
        assert_eq!(
            Square::try_from((8, 0)),
            Err(BoundsError::FileOutOfBounds { file: 8 })
        );
        assert_eq!(
            Square::try_from((0, 10)),
            Err(BoundsError::RankOutOfBounds { rank: 10 })
        );
        assert_eq!(Square::try_from((3, 5)), Ok(Square::at(3, 5)));
    }

    #[test]
    fn test_offset_stops_at_edges() {
        let corner = Square::at(0, 7);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, 1), None);
        assert_eq!(corner.offset(1, -1), Some(Square::at(1, 6)));
    }

    #[test]
    fn test_all_is_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::at(0, 0));
        assert_eq!(squares[1], Square::at(1, 0));
        assert_eq!(squares[8], Square::at(0, 1));
        assert!(squares.iter().enumerate().all(|(i, sq)| sq.index() == i));
    }
}
