//! Chess board representation and game rules.
//!
//! A mailbox board of [`Cell`]s plus the state the rules need: side to
//! move, castling rights, the en passant target and each king's square.
//! Supports legal move filtering, check and checkmate detection, castling
//! and en passant. Pawns do not promote.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, GameState, GameStatus, Square};
//!
//! let mut game = GameState::new();
//! let (from, to) = (Square::at(4, 6), Square::at(4, 4));
//! assert!(game.is_legal(from, to));
//! game.apply(from, to);
//! assert_eq!(game.side_to_move(), Color::Black);
//! assert_eq!(game.status_for(Color::Black), GameStatus::Ongoing);
//! ```

mod builder;
mod error;
mod geometry;
mod grid;
mod legality;
mod make_move;
pub mod prelude;
mod render;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::GameBuilder;
pub use error::{BoundsError, BuildError, MoveError};
pub use grid::Board;
pub use render::Snapshot;
pub use state::GameState;
pub use status::GameStatus;
pub use types::{CastleSide, CastlingRights, Cell, Color, Move, MoveKind, PieceKind, Square};

pub(crate) use types::KING_HOME_FILE;
