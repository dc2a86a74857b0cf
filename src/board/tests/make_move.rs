//! Move application tests.

use super::{play, position, sq};
use crate::board::{
    BoundsError, CastleSide, CastlingRights, Cell, Color, GameBuilder, GameState, MoveError,
    MoveKind, PieceKind,
};

use Color::{Black, White};
use PieceKind::{Bishop, King, Knight, Pawn, Rook};

fn castling_position() -> GameState {
    GameBuilder::new()
        .piece(sq(4, 7), King, White)
        .piece(sq(0, 7), Rook, White)
        .piece(sq(7, 7), Rook, White)
        .piece(sq(4, 0), King, Black)
        .piece(sq(0, 0), Rook, Black)
        .piece(sq(7, 0), Rook, Black)
        .castling(CastlingRights::all())
        .build()
        .unwrap()
}

#[test]
fn test_quiet_move_relocates_and_flips_turn() {
    let mut game = GameState::new();
    let mv = game.apply(sq(6, 7), sq(5, 5));

    assert_eq!(mv.kind, MoveKind::Quiet);
    assert!(!mv.is_capture() && !mv.is_castling() && !mv.is_en_passant());
    assert_eq!(mv.piece, Knight);
    assert_eq!(mv.color, White);
    assert_eq!(game.cell(sq(6, 7)), Cell::Empty);
    assert_eq!(game.cell(sq(5, 5)), Cell::Occupied(Knight, White));
    assert_eq!(game.side_to_move(), Black);
    assert_eq!(game.en_passant_target(), None);
}

#[test]
fn test_double_push_sets_en_passant_target() {
    let mut game = GameState::new();
    let mv = game.apply(sq(4, 6), sq(4, 4));
    assert_eq!(mv.kind, MoveKind::DoublePush);
    assert_eq!(game.en_passant_target(), Some(sq(4, 5)));

    game.apply(sq(6, 0), sq(5, 2));
    assert_eq!(game.en_passant_target(), None);

    game.apply(sq(3, 6), sq(3, 5));
    assert_eq!(game.en_passant_target(), None);
}

#[test]
fn test_black_double_push_target() {
    let mut game = GameState::new();
    play(&mut game, &[(0, 6, 0, 5), (2, 1, 2, 3)]);
    assert_eq!(game.en_passant_target(), Some(sq(2, 2)));
}

#[test]
fn test_en_passant_capture_removes_passed_pawn() {
    let mut game = GameBuilder::starting_position()
        .clear(sq(3, 1))
        .piece(sq(3, 4), Pawn, Black)
        .build()
        .unwrap();

    game.apply(sq(4, 6), sq(4, 4));
    assert_eq!(game.en_passant_target(), Some(sq(4, 5)));
    assert!(game.is_legal(sq(3, 4), sq(4, 5)));

    let mv = game.apply(sq(3, 4), sq(4, 5));
    assert_eq!(mv.kind, MoveKind::EnPassant);
    assert!(mv.is_en_passant());
    assert!(!mv.is_castling());
    assert_eq!(mv.captured, Some(Pawn));
    assert_eq!(game.cell(sq(4, 4)), Cell::Empty);
    assert_eq!(game.cell(sq(3, 4)), Cell::Empty);
    assert_eq!(game.cell(sq(4, 5)), Cell::Occupied(Pawn, Black));
    assert_eq!(game.en_passant_target(), None);
}

#[test]
fn test_en_passant_window_is_one_ply() {
    let mut game = GameBuilder::starting_position()
        .clear(sq(3, 1))
        .piece(sq(3, 4), Pawn, Black)
        .build()
        .unwrap();

    play(&mut game, &[(4, 6, 4, 4), (6, 0, 5, 2), (6, 7, 5, 5)]);
    assert!(!game.is_legal(sq(3, 4), sq(4, 5)));
}

#[test]
fn test_king_side_castling() {
    let mut game = castling_position();
    assert!(game.is_legal(sq(4, 7), sq(6, 7)));

    let mv = game.apply(sq(4, 7), sq(6, 7));
    assert_eq!(mv.kind, MoveKind::Castle(CastleSide::KingSide));
    assert!(mv.is_castling());
    assert!(!mv.is_en_passant());
    assert_eq!(game.cell(sq(6, 7)), Cell::Occupied(King, White));
    assert_eq!(game.cell(sq(5, 7)), Cell::Occupied(Rook, White));
    assert_eq!(game.cell(sq(7, 7)), Cell::Empty);
    assert_eq!(game.cell(sq(4, 7)), Cell::Empty);
    assert_eq!(game.king_square(White), sq(6, 7));

    let rights = game.castling_rights();
    assert!(!rights.has(White, CastleSide::KingSide));
    assert!(!rights.has(White, CastleSide::QueenSide));
    assert!(rights.has(Black, CastleSide::KingSide));
    assert!(rights.has(Black, CastleSide::QueenSide));
}

#[test]
fn test_queen_side_castling_for_black() {
    let mut game = castling_position();
    game.apply(sq(0, 7), sq(0, 6));

    let mv = game.apply(sq(4, 0), sq(2, 0));
    assert_eq!(mv.kind, MoveKind::Castle(CastleSide::QueenSide));
    assert_eq!(game.cell(sq(2, 0)), Cell::Occupied(King, Black));
    assert_eq!(game.cell(sq(3, 0)), Cell::Occupied(Rook, Black));
    assert_eq!(game.cell(sq(0, 0)), Cell::Empty);
    assert_eq!(game.king_square(Black), sq(2, 0));
    assert!(!game.castling_rights().has(Black, CastleSide::KingSide));
}

#[test]
fn test_king_step_clears_both_rights() {
    let mut game = castling_position();
    game.apply(sq(4, 7), sq(4, 6));
    assert!(!game.castling_rights().has(White, CastleSide::KingSide));
    assert!(!game.castling_rights().has(White, CastleSide::QueenSide));

    game.apply(sq(4, 0), sq(4, 1));
    game.apply(sq(4, 6), sq(4, 7));
    assert!(!game.basic_shape_allowed(sq(4, 7), sq(6, 7)));
    assert!(!game.basic_shape_allowed(sq(4, 7), sq(2, 7)));
}

#[test]
fn test_rook_move_clears_its_side_only() {
    let mut game = castling_position();
    game.apply(sq(7, 7), sq(7, 5));

    let rights = game.castling_rights();
    assert!(!rights.has(White, CastleSide::KingSide));
    assert!(rights.has(White, CastleSide::QueenSide));
}

#[test]
fn test_capturing_corner_rook_keeps_owner_right() {
    let mut game = castling_position();
    let mv = game.apply(sq(7, 7), sq(7, 0));
    assert_eq!(mv.captured, Some(Rook));

    // only the owner's own king or rook moves clear its flags
    let rights = game.castling_rights();
    assert!(rights.has(Black, CastleSide::KingSide));
    assert!(rights.has(Black, CastleSide::QueenSide));
    assert!(!rights.has(White, CastleSide::KingSide));
    assert!(game.basic_shape_allowed(sq(4, 0), sq(6, 0)));
}

#[test]
fn test_capture_records_piece() {
    let mut game = position(
        &[
            (4, 7, King, White),
            (2, 5, Bishop, White),
            (5, 2, Knight, Black),
            (4, 0, King, Black),
        ],
        White,
    );
    let mv = game.apply(sq(2, 5), sq(5, 2));
    assert_eq!(mv.kind, MoveKind::Capture);
    assert_eq!(mv.captured, Some(Knight));
    assert!(mv.is_capture());
    assert_eq!(game.board().pieces().count(), 3);
}

#[test]
fn test_pawn_on_last_rank_stays_pawn() {
    let mut game = position(
        &[(4, 7, King, White), (7, 7, King, Black), (0, 1, Pawn, White)],
        White,
    );
    game.apply(sq(0, 1), sq(0, 0));
    assert_eq!(game.cell(sq(0, 0)), Cell::Occupied(Pawn, White));
    assert!(game.board().pieces().all(|(_, kind, _)| kind != PieceKind::Queen));
}

#[test]
fn test_try_apply_reports_reason() {
    let mut game = GameState::new();
    assert_eq!(
        game.try_apply(sq(4, 4), sq(4, 3)),
        Err(MoveError::EmptySquare { square: sq(4, 4) })
    );
    assert_eq!(
        game.try_apply(sq(4, 1), sq(4, 3)),
        Err(MoveError::WrongSide {
            square: sq(4, 1),
            to_move: White
        })
    );
    assert_eq!(
        game.try_apply(sq(4, 6), sq(4, 3)),
        Err(MoveError::Illegal {
            from: sq(4, 6),
            to: sq(4, 3)
        })
    );
    assert_eq!(game, GameState::new());

    let mv = game.try_apply(sq(4, 6), sq(4, 4)).unwrap();
    assert_eq!(mv.to, sq(4, 4));
}

#[test]
fn test_try_apply_after_checkmate() {
    let mut game = GameState::new();
    play(&mut game, &[(5, 6, 5, 5), (4, 1, 4, 3), (6, 6, 6, 4), (3, 0, 7, 4)]);
    assert_eq!(game.try_apply(sq(0, 6), sq(0, 5)), Err(MoveError::GameOver));
}

#[test]
fn test_board_get_set_bounds() {
    let mut board = *GameState::new().board();
    assert_eq!(board.get(4, 7), Ok(Cell::Occupied(King, White)));
    assert_eq!(board.get(8, 0), Err(BoundsError::FileOutOfBounds { file: 8 }));
    assert_eq!(board.get(0, 8), Err(BoundsError::RankOutOfBounds { rank: 8 }));

    assert_eq!(board.set(3, 3, Cell::Occupied(Rook, Black)), Ok(()));
    assert_eq!(board.get(3, 3), Ok(Cell::Occupied(Rook, Black)));
    assert!(board.set(3, 9, Cell::Empty).is_err());
}
