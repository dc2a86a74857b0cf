//! Core chess types.
//!
//! This module contains the value types shared by every part of the engine:
//! - `PieceKind`, `Color` and `Cell` - square contents
//! - `Square` - validated `(file, rank)` coordinate
//! - `CastlingRights` and `CastleSide` - castling state
//! - `Move` and `MoveKind` - record of an applied move

mod castling;
mod moves;
mod piece;
mod square;

// Re-export all public types
pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveKind};
pub use piece::{Cell, Color, PieceKind};
pub use square::Square;

pub(crate) use castling::KING_HOME_FILE;
