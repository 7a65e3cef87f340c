//! Discrete commands a host sends to a session, and what they did.

use serde::{Deserialize, Serialize};

use crate::core::{Move, Position};
use crate::rules::{GameStatus, MoveError};

/// A player command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Start a new game.
    Reset,
    /// Select the piece at a cell, or move the selected piece there.
    SelectOrMove(Position),
    /// Drop the current selection.
    Cancel,
    Undo,
    Redo,
    /// Ask the host to exit.
    Quit,
}

/// Effect of a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    /// A new game was started.
    Reset,
    /// A piece was selected.
    Selected(Position),
    /// The selected piece jumped.
    Moved { mv: Move, status: GameStatus },
    /// The selected piece could not jump there; selection was dropped.
    MoveRejected(MoveError),
    /// The selection was dropped without a move attempt.
    Deselected,
    Undone(Move),
    /// Nothing to undo; a notification was raised.
    UndoRejected,
    Redone(Move),
    /// Nothing to redo; no notification.
    RedoIgnored,
    Quit,
    /// The command had no effect.
    Ignored,
}

impl CommandOutcome {
    /// Check whether the board changed.
    #[must_use]
    pub const fn changed_board(self) -> bool {
        matches!(
            self,
            CommandOutcome::Reset
                | CommandOutcome::Moved { .. }
                | CommandOutcome::Undone(_)
                | CommandOutcome::Redone(_)
        )
    }
}
