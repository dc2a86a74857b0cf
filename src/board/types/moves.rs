//! Record of an applied move.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::{Color, PieceKind};
use super::square::Square;

/// What kind of move was played.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Quiet,
    Capture,
    /// Pawn advance of two ranks; sets the en passant target
    DoublePush,
    EnPassant,
    Castle(CastleSide),
}

/// A move as applied by [`GameState::apply`](crate::board::GameState::apply).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub color: Color,
    /// Captured piece kind. For en passant this is the pawn removed from
    /// behind the target square.
    pub captured: Option<PieceKind>,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}-{}", self.color, self.piece, self.from, self.to)?;
        match self.kind {
            MoveKind::Castle(CastleSide::KingSide) => write!(f, " (castles king-side)"),
            MoveKind::Castle(CastleSide::QueenSide) => write!(f, " (castles queen-side)"),
            MoveKind::EnPassant => write!(f, " (en passant)"),
            _ => match self.captured {
                Some(captured) => write!(f, " takes {captured}"),
                None => Ok(()),
            },
        }
    }
}
