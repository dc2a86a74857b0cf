//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{
    Board, BoundsError, CastleSide, CastlingRights, Cell, Color, GameBuilder, GameState,
    GameStatus, Move, MoveError, PieceKind, Snapshot, Square,
};
