//! Piece movement shapes.
//!
//! Nothing here looks at whose turn it is or at king safety; see
//! `legality.rs` for that.

use super::{Board, CastleSide, Cell, Color, GameState, PieceKind, Square, KING_HOME_FILE};

impl Board {
    /// True if every square strictly between `from` and `to` is empty.
    ///
    /// `from` and `to` must share a rank, file or diagonal; any other pair
    /// (including `from == to`) is not a line and returns false.
    #[must_use]
    pub fn clear_path(&self, from: Square, to: Square) -> bool {
        let (df, dr) = from.delta(to);
        let on_line = (df == 0) != (dr == 0) || (df != 0 && df.abs() == dr.abs());
        if !on_line {
            return false;
        }

        let (step_f, step_r) = (df.signum(), dr.signum());
        let mut current = from;
        while let Some(next) = current.offset(step_f, step_r) {
            if next == to {
                return true;
            }
            if !self.is_empty(next) {
                return false;
            }
            current = next;
        }
        false
    }
}

impl GameState {
    /// True if the piece on `from` could reach `to` by its movement rules.
    ///
    /// Ignores the side to move and whether the mover's king ends up
    /// attacked, but respects blockers, same-color destinations, pawn
    /// direction, the en passant target and castling rights. This is also
    /// the attack test used for check detection.
    #[must_use]
    pub fn basic_shape_allowed(&self, from: Square, to: Square) -> bool {
        let Cell::Occupied(kind, color) = self.board.cell(from) else {
            return false;
        };
        if from == to || self.board.cell(to).color() == Some(color) {
            return false;
        }

        if kind.is_slider() && !self.board.clear_path(from, to) {
            return false;
        }

        let (df, dr) = from.delta(to);
        match kind {
            PieceKind::Pawn => self.pawn_shape_allowed(from, to, color),
            PieceKind::Knight => (df * dr).abs() == 2,
            PieceKind::Bishop => df.abs() == dr.abs(),
            PieceKind::Rook => df == 0 || dr == 0,
            // clear_path already rejected anything off a line
            PieceKind::Queen => true,
            PieceKind::King => {
                (df.abs() <= 1 && dr.abs() <= 1) || self.castle_hop(from, to, color).is_some()
            }
        }
    }

    /// Castling side if a king of `color` on `from` may hop two files to `to`.
    ///
    /// Only the castling flag and the king's home square are consulted. The
    /// rook, the squares in between and the squares the king crosses are not
    /// examined.
    pub(crate) fn castle_hop(&self, from: Square, to: Square, color: Color) -> Option<CastleSide> {
        let home = Square::at(KING_HOME_FILE, color.back_rank());
        if from != home || to.rank() != from.rank() {
            return None;
        }
        let (df, _) = from.delta(to);
        CastleSide::from_king_hop(df).filter(|&side| self.castling_rights.has(color, side))
    }

    fn pawn_shape_allowed(&self, from: Square, to: Square, color: Color) -> bool {
        let dir = color.pawn_direction();
        let (df, dr) = from.delta(to);

        if df == 0 {
            if dr == dir {
                return self.board.is_empty(to);
            }
            if dr == 2 * dir && from.rank() == color.pawn_start_rank() {
                return from
                    .offset(0, dir)
                    .is_some_and(|mid| self.board.is_empty(mid) && self.board.is_empty(to));
            }
            return false;
        }

        if df.abs() == 1 && dr == dir {
            return match self.board.cell(to) {
                Cell::Occupied(_, target) => target != color,
                Cell::Empty => self.en_passant_target == Some(to),
            };
        }
        false
    }
}
