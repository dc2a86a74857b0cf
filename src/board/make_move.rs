use super::{
    CastleSide, Cell, Color, GameState, Move, MoveError, MoveKind, PieceKind, Square,
};

impl GameState {
    /// Play a move already known to be legal.
    ///
    /// Handles the en passant capture, the castling rook, castling rights,
    /// the new en passant target and the turn change, then refreshes
    /// [`status`](GameState::status) for the side now on move.
    ///
    /// # Panics
    /// Panics if `from` is empty. In debug builds also panics if the move is
    /// not legal; use [`try_apply`](GameState::try_apply) for unchecked input.
    pub fn apply(&mut self, from: Square, to: Square) -> Move {
        debug_assert!(self.is_legal(from, to), "apply called with illegal move {from}-{to}");

        let (piece, color) = self
            .board
            .cell(from)
            .piece()
            .expect("apply: 'from' square empty");
        let en_passant = self.en_passant_victim(from, to).is_some();
        let captured = self.relocate(from, to);
        let (df, dr) = from.delta(to);

        let mut kind = match captured {
            Some(_) if en_passant => MoveKind::EnPassant,
            Some(_) => MoveKind::Capture,
            None => MoveKind::Quiet,
        };

        match piece {
            PieceKind::King => {
                if let Some(side) = CastleSide::from_king_hop(df) {
                    self.castle_rook(color, side);
                    kind = MoveKind::Castle(side);
                }
                self.castling_rights.remove_color(color);
            }
            PieceKind::Rook => {
                if let Some(side) = CastleSide::of_corner(color, from) {
                    self.castling_rights.remove(color, side);
                }
            }
            _ => {}
        }

        self.en_passant_target = None;
        if piece == PieceKind::Pawn && dr.abs() == 2 {
            self.en_passant_target = from.offset(0, dr / 2);
            kind = MoveKind::DoublePush;
        }

        self.side_to_move = self.side_to_move.opponent();

        let mv = Move {
            from,
            to,
            piece,
            color,
            captured,
            kind,
        };

        #[cfg(feature = "logging")]
        log::debug!("applied {mv}");

        self.refresh_status();
        mv
    }

    /// Validate and play a move.
    pub fn try_apply(&mut self, from: Square, to: Square) -> Result<Move, MoveError> {
        if let Err(err) = self.check_move(from, to) {
            #[cfg(feature = "logging")]
            log::warn!("rejected {from}-{to}: {err}");
            return Err(err);
        }
        Ok(self.apply(from, to))
    }

    fn check_move(&self, from: Square, to: Square) -> Result<(), MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        match self.board.cell(from).color() {
            None => Err(MoveError::EmptySquare { square: from }),
            Some(color) if color != self.side_to_move => Err(MoveError::WrongSide {
                square: from,
                to_move: self.side_to_move,
            }),
            Some(_) if !self.is_legal(from, to) => Err(MoveError::Illegal { from, to }),
            Some(_) => Ok(()),
        }
    }

    /// Move the castling rook next to the king, if an own rook holds the
    /// corner.
    fn castle_rook(&mut self, color: Color, side: CastleSide) {
        let corner = side.rook_corner(color);
        let rook = Cell::Occupied(PieceKind::Rook, color);
        if self.board.cell(corner) != rook {
            return;
        }
        self.board.put(corner, Cell::Empty);
        self.board
            .put(Square::at(side.rook_target_file(), color.back_rank()), rook);
    }
}
