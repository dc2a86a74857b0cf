//! Fluent builder for constructing game positions.
//!
//! Allows setting up positions piece by piece, for tests, puzzles and
//! resuming a game from a stored layout.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, GameBuilder, PieceKind, Square};
//!
//! let game = GameBuilder::new()
//!     .piece(Square::at(4, 7), PieceKind::King, Color::White)
//!     .piece(Square::at(4, 0), PieceKind::King, Color::Black)
//!     .piece(Square::at(0, 6), PieceKind::Pawn, Color::White)
//!     .side_to_move(Color::White)
//!     .build()
//!     .expect("one king per side");
//! assert_eq!(game.legal_destinations(Square::at(0, 6)).len(), 2);
//! ```

use super::{
    Board, BuildError, CastleSide, CastlingRights, Cell, Color, GameState, GameStatus, PieceKind,
    Square,
};

/// A fluent builder for constructing `GameState` positions.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    pieces: Vec<(Square, PieceKind, Color)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// Create a new empty builder: no pieces, White to move, no castling.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let state = GameState::new();
        GameBuilder {
            pieces: state.board.pieces().collect(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
        }
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, kind: PieceKind, color: Color) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, kind, color));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable castling to one side for a color.
    #[must_use]
    pub fn castle(mut self, color: Color, side: CastleSide) -> Self {
        self.castling_rights.set(color, side);
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Build the game.
    ///
    /// Fails unless each color has exactly one king. The status of the side
    /// to move is computed, so a position built already mated is game over.
    pub fn build(self) -> Result<GameState, BuildError> {
        let mut state = GameState::new();
        state.board = Board::empty();
        for (square, kind, color) in self.pieces {
            state.board.put(square, Cell::Occupied(kind, color));
        }

        for color in Color::BOTH {
            state.kings[color.index()] = Self::single_king(&state, color)?;
        }

        state.side_to_move = self.side_to_move;
        state.castling_rights = self.castling_rights;
        state.en_passant_target = self.en_passant_target;
        state.status = GameStatus::Ongoing;
        state.game_over = false;
        state.refresh_status();

        #[cfg(feature = "logging")]
        log::debug!(
            "built position: {} to move, status {}",
            state.side_to_move,
            state.status
        );

        Ok(state)
    }

    fn single_king(state: &GameState, color: Color) -> Result<Square, BuildError> {
        let mut kings = state
            .board
            .pieces()
            .filter(|&(_, kind, c)| kind == PieceKind::King && c == color)
            .map(|(sq, _, _)| sq);

        let first = kings.next().ok_or(BuildError::MissingKing { color })?;
        match kings.next() {
            Some(second) => Err(BuildError::DuplicateKing {
                color,
                first,
                second,
            }),
            None => Ok(first),
        }
    }
}
