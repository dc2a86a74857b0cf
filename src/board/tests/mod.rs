//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `geometry.rs` - Piece movement shapes and path blocking
//! - `legality.rs` - Turn ownership, self-check filtering, simulation purity
//! - `make_move.rs` - Move application, castling, en passant, rights
//! - `status.rs` - Check, checkmate and full games
//! - `edge_cases.rs` - Rule simplifications kept on purpose
//! - `proptest.rs` - Property-based tests over random games

mod make_move;

use crate::board::{CastlingRights, Color, GameBuilder, GameState, PieceKind, Square};

pub(super) fn sq(file: usize, rank: usize) -> Square {
    Square::at(file, rank)
}

/// Build a position from `(file, rank, kind, color)` entries with no
/// castling rights.
pub(super) fn position(
    pieces: &[(usize, usize, PieceKind, Color)],
    side_to_move: Color,
) -> GameState {
    pieces
        .iter()
        .fold(GameBuilder::new(), |builder, &(file, rank, kind, color)| {
            builder.piece(sq(file, rank), kind, color)
        })
        .side_to_move(side_to_move)
        .castling(CastlingRights::none())
        .build()
        .expect("test position needs one king per side")
}

/// Apply a sequence of `(from_file, from_rank, to_file, to_rank)` moves,
/// asserting each one is legal first.
pub(super) fn play(game: &mut GameState, moves: &[(usize, usize, usize, usize)]) {
    for &(ff, fr, tf, tr) in moves {
        let (from, to) = (sq(ff, fr), sq(tf, tr));
        assert!(game.is_legal(from, to), "expected {from}-{to} to be legal");
        game.apply(from, to);
    }
}
