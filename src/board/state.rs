#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    Board, CastlingRights, Cell, Color, GameStatus, PieceKind, Snapshot, Square, KING_HOME_FILE,
};

/// A game in progress: one board plus the metadata the rules depend on.
///
/// `GameState` is `Copy`. Legality checks simulate candidate moves on a copy,
/// so queries never touch the live state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    /// King square per color, indexed by `Color::index`
    pub(crate) kings: [Square; 2],
    pub(crate) status: GameStatus,
    pub(crate) game_over: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting position, White to move, all castling rights set.
    #[must_use]
    pub fn new() -> Self {
        GameState {
            board: Board::standard(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
            kings: [
                Square::at(KING_HOME_FILE, Color::White.back_rank()),
                Square::at(KING_HOME_FILE, Color::Black.back_rank()),
            ],
            status: GameStatus::Ongoing,
            game_over: false,
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub const fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub const fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub const fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    /// Status of the side to move, as of the last applied move.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    #[must_use]
    pub const fn cell(&self, sq: Square) -> Cell {
        self.board.cell(sq)
    }

    /// Read-only view for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rows: *self.board.rows(),
            side_to_move: self.side_to_move,
            status: self.status,
        }
    }

    /// Move the piece on `from` to `to` with no rights bookkeeping.
    ///
    /// An en passant capture also removes the bypassed pawn. The king square
    /// follows a moving king. Returns the captured piece, if any.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<PieceKind> {
        let moving = self.board.cell(from);
        let mut captured = self.board.cell(to).kind();

        if let Some(victim) = self.en_passant_victim(from, to) {
            captured = self.board.cell(victim).kind();
            self.board.put(victim, Cell::Empty);
        }

        self.board.put(to, moving);
        self.board.put(from, Cell::Empty);

        if let Cell::Occupied(PieceKind::King, color) = moving {
            self.kings[color.index()] = to;
        }
        captured
    }

    /// Square of the pawn taken en passant if a pawn plays `from`-`to`.
    pub(crate) fn en_passant_victim(&self, from: Square, to: Square) -> Option<Square> {
        let is_pawn = self.board.cell(from).kind() == Some(PieceKind::Pawn);
        let diagonal = from.file() != to.file();
        if is_pawn && diagonal && self.en_passant_target == Some(to) && self.board.is_empty(to) {
            Some(Square::at(to.file(), from.rank()))
        } else {
            None
        }
    }
}
