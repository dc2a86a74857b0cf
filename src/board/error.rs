//! Error types for board and game operations.
//!
//! Every error here is a caller contract violation. The presentation layer
//! only ever hands the engine on-grid coordinates taken from the rendered
//! grid, so none of these surface during normal play.

use std::fmt;

use super::{Color, Square};

/// Coordinate outside the 8×8 grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundsError {
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            BoundsError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
        }
    }
}

impl std::error::Error for BoundsError {}

/// Rejection reason from [`GameState::try_apply`](super::GameState::try_apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game ended in checkmate; no further moves are accepted
    GameOver,
    /// No piece on the source square
    EmptySquare { square: Square },
    /// The piece on the source square belongs to the side not on move
    WrongSide { square: Square, to_move: Color },
    /// The move breaks piece geometry or leaves the mover's king attacked
    Illegal { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is over, no further moves accepted"),
            MoveError::EmptySquare { square } => {
                write!(f, "No piece on {square}")
            }
            MoveError::WrongSide { square, to_move } => {
                write!(f, "Piece on {square} does not belong to {to_move}, who is on move")
            }
            MoveError::Illegal { from, to } => {
                write!(f, "Illegal move {from}-{to}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for [`GameBuilder::build`](super::GameBuilder::build).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// No king of this color was placed
    MissingKing { color: Color },
    /// More than one king of this color was placed
    DuplicateKing { color: Color, first: Square, second: Square },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingKing { color } => {
                write!(f, "Position has no {color} king")
            }
            BuildError::DuplicateKing {
                color,
                first,
                second,
            } => {
                write!(f, "Position has two {color} kings ({first} and {second})")
            }
        }
    }
}

impl std::error::Error for BuildError {}
