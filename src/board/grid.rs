//! The 8×8 cell grid.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{BoundsError, Cell, Color, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement only. Turn, castling and en passant state live on
/// [`GameState`](super::GameState).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    /// `cells[rank][file]`
    cells: [[Cell; 8]; 8],
}

impl Board {
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; 8]; 8],
        }
    }

    /// The standard starting layout, Black on ranks 0-1 and White on 6-7.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            board.put(Square::at(file, 0), Cell::Occupied(kind, Color::Black));
            board.put(Square::at(file, 1), Cell::Occupied(PieceKind::Pawn, Color::Black));
            board.put(Square::at(file, 6), Cell::Occupied(PieceKind::Pawn, Color::White));
            board.put(Square::at(file, 7), Cell::Occupied(kind, Color::White));
        }
        board
    }

    /// Read a cell by raw coordinates.
    pub fn get(&self, file: usize, rank: usize) -> Result<Cell, BoundsError> {
        let sq = Square::try_from((file, rank))?;
        Ok(self.cell(sq))
    }

    /// Overwrite a cell by raw coordinates.
    pub fn set(&mut self, file: usize, rank: usize, cell: Cell) -> Result<(), BoundsError> {
        let sq = Square::try_from((file, rank))?;
        self.put(sq, cell);
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn cell(&self, sq: Square) -> Cell {
        self.cells[sq.rank()][sq.file()]
    }

    #[inline]
    pub fn put(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.rank()][sq.file()] = cell;
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self, sq: Square) -> bool {
        self.cell(sq).is_empty()
    }

    /// Rows in rank order, rank 0 first.
    #[must_use]
    pub const fn rows(&self) -> &[[Cell; 8]; 8] {
        &self.cells
    }

    /// Occupied squares in row-major scan order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, PieceKind, Color)> + '_ {
        Square::all().filter_map(move |sq| {
            self.cell(sq)
                .piece()
                .map(|(kind, color)| (sq, kind, color))
        })
    }

    /// First king of `color` in row-major scan order.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, kind, c)| kind == PieceKind::King && c == color)
            .map(|(sq, _, _)| sq)
    }
}
