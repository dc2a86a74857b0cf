pub mod board;
pub mod session;

pub use board::{Cell, Color, GameState, GameStatus, Move, PieceKind, Square};
pub use session::{ClickOutcome, Session};
