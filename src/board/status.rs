//! Check and checkmate detection.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, GameState};

/// Status of one side.
///
/// Stalemate is not detected; a side with no legal moves that is not in
/// check reads as `Ongoing`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    #[default]
    Ongoing,
    Check,
    Checkmate,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "Ongoing"),
            GameStatus::Check => write!(f, "Check"),
            GameStatus::Checkmate => write!(f, "Checkmate"),
        }
    }
}

impl GameState {
    /// True if any opposing piece's movement shape reaches `color`'s king.
    ///
    /// Uses plain geometry, not [`is_legal`](GameState::is_legal): a pinned
    /// piece still gives check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        let king = self.kings[color.index()];
        self.board
            .pieces()
            .any(|(sq, _, c)| c != color && self.basic_shape_allowed(sq, king))
    }

    /// True if `color` is in check and none of its pieces has a move that
    /// escapes.
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_safe_move(color)
    }

    #[must_use]
    pub fn status_for(&self, color: Color) -> GameStatus {
        if !self.is_in_check(color) {
            GameStatus::Ongoing
        } else if self.has_safe_move(color) {
            GameStatus::Check
        } else {
            GameStatus::Checkmate
        }
    }

    /// Recompute the stored status for the side to move. Checkmate ends the
    /// game.
    pub(crate) fn refresh_status(&mut self) {
        let status = self.status_for(self.side_to_move);

        #[cfg(feature = "logging")]
        match status {
            GameStatus::Checkmate => log::info!("{} is checkmated", self.side_to_move),
            GameStatus::Check => log::info!("{} is in check", self.side_to_move),
            GameStatus::Ongoing => {}
        }

        self.status = status;
        self.game_over = status == GameStatus::Checkmate;
    }
}
