//! Click-driven game session.
//!
//! The presentation layer reports square clicks; the session turns them into
//! piece selection, move highlighting and moves.

use crate::board::{GameState, Move, Snapshot, Square};

/// Result of one click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move was picked up
    Selected {
        from: Square,
        /// Legal destinations to highlight
        destinations: Vec<Square>,
    },
    /// The selected piece moved to the clicked square
    Moved(Move),
    /// The click was not a legal destination; the selection is dropped
    Deselected,
    /// Nothing selected and nothing selectable under the click
    Ignored,
}

/// One game plus the current selection.
#[derive(Clone, Debug, Default)]
pub struct Session {
    game: GameState,
    selected: Option<Square>,
}

impl Session {
    /// New game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue from an existing position.
    #[must_use]
    pub const fn from_state(game: GameState) -> Self {
        Session {
            game,
            selected: None,
        }
    }

    #[must_use]
    pub const fn game(&self) -> &GameState {
        &self.game
    }

    #[must_use]
    pub const fn selected(&self) -> Option<Square> {
        self.selected
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.game.snapshot()
    }

    /// Handle a click on `square`.
    ///
    /// With a piece selected, a legal destination plays the move and any
    /// other square drops the selection. With nothing selected, a piece of
    /// the side to move is selected. Every click is ignored once the game is
    /// over.
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        if self.game.is_game_over() {
            self.selected = None;
            return ClickOutcome::Ignored;
        }

        if let Some(from) = self.selected.take() {
            if self.game.is_legal(from, square) {
                return ClickOutcome::Moved(self.game.apply(from, square));
            }
            return ClickOutcome::Deselected;
        }

        if self.game.cell(square).color() != Some(self.game.side_to_move()) {
            return ClickOutcome::Ignored;
        }

        self.selected = Some(square);
        ClickOutcome::Selected {
            from: square,
            destinations: self.game.legal_destinations(square),
        }
    }

    /// Start over from the standard starting position.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
