//! Legal move filtering.

use super::{Color, GameState, Square};

impl GameState {
    /// True if the side to move may play `from`-`to` right now.
    ///
    /// The move must belong to the side to move, fit the piece's shape and
    /// leave the mover's king unattacked. Always false once the game is over.
    #[must_use]
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        if self.game_over || from == to {
            return false;
        }
        if self.board.cell(from).color() != Some(self.side_to_move) {
            return false;
        }
        self.is_safe_move(from, to)
    }

    /// Shape check plus king safety for the piece on `from`, whoever's turn
    /// it is.
    ///
    /// The move is played on a copy of the state and the moving piece's own
    /// king is tested for attack there; `self` is never modified.
    #[must_use]
    pub fn is_safe_move(&self, from: Square, to: Square) -> bool {
        let Some(mover) = self.board.cell(from).color() else {
            return false;
        };
        if !self.basic_shape_allowed(from, to) {
            return false;
        }

        let mut scratch = *self;
        scratch.relocate(from, to);
        !scratch.is_in_check(mover)
    }

    /// Squares the piece on `from` may legally move to, in scan order.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        Square::all().filter(|&to| self.is_legal(from, to)).collect()
    }

    /// Every legal `(from, to)` pair for the side to move, in scan order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<(Square, Square)> {
        if self.game_over {
            return Vec::new();
        }
        self.board
            .pieces()
            .filter(|&(_, _, color)| color == self.side_to_move)
            .flat_map(|(from, _, _)| {
                Square::all()
                    .filter(move |&to| self.is_safe_move(from, to))
                    .map(move |to| (from, to))
            })
            .collect()
    }

    /// True if any piece of `color` has a move that keeps its king safe.
    pub(crate) fn has_safe_move(&self, color: Color) -> bool {
        self.board
            .pieces()
            .filter(|&(_, _, c)| c == color)
            .any(|(from, _, _)| Square::all().any(|to| self.is_safe_move(from, to)))
    }
}
