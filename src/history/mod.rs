//! Undo/redo history.
//!
//! Two [`BoundedStack`]s of moves share one cap:
//! - **undo**: moves that can be reversed, newest on top
//! - **redo**: moves that were reversed and can be replayed, newest on top
//!
//! Recording a fresh move discards the redo stack. There is no branching
//! history: once a new move is made, previously undone moves are gone.
//!
//! ```
//! use peg_solitaire::core::Move;
//! use peg_solitaire::history::History;
//!
//! let mut history = History::new(3);
//! let m = Move::from_coords((1, 3), (3, 3));
//!
//! history.record(m);
//! assert_eq!(history.take_undo(), Some(m));
//! assert_eq!(history.redo_len(), 1);
//! assert_eq!(history.take_redo(), Some(m));
//! assert_eq!(history.undo_len(), 1);
//! ```

mod bounded;

pub use bounded::BoundedStack;

use serde::{Deserialize, Serialize};

use crate::core::Move;

/// Paired undo and redo stacks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    undo: BoundedStack<Move>,
    redo: BoundedStack<Move>,
}

impl History {
    /// Create empty history with `depth` entries per stack.
    pub fn new(depth: usize) -> Self {
        Self {
            undo: BoundedStack::new(depth),
            redo: BoundedStack::new(depth),
        }
    }

    /// Record a freshly made move. Clears the redo stack.
    pub fn record(&mut self, mv: Move) {
        self.undo.push(mv);
        self.redo.clear();
    }

    /// Move the newest undoable move onto the redo stack and return it.
    pub fn take_undo(&mut self) -> Option<Move> {
        let mv = self.undo.pop()?;
        self.redo.push(mv);
        Some(mv)
    }

    /// Move the newest redoable move back onto the undo stack and return it.
    pub fn take_redo(&mut self) -> Option<Move> {
        let mv = self.redo.pop()?;
        self.undo.push(mv);
        Some(mv)
    }

    /// Empty both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Shared cap of both stacks.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.undo.capacity()
    }

    /// The move `take_undo` would return next.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.undo.peek().copied()
    }

    /// Undoable moves, oldest first.
    pub fn undo_moves(&self) -> impl Iterator<Item = &Move> {
        self.undo.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(i: usize) -> Move {
        Move::from_coords((i, 0), (i, 2))
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::new(3);
        history.record(mv(0));
        history.record(mv(1));
        history.take_undo();
        assert_eq!(history.redo_len(), 1);

        history.record(mv(2));
        assert_eq!(history.redo_len(), 0);
        assert_eq!(history.undo_len(), 2);
    }

    #[test]
    fn test_undo_cap() {
        let mut history = History::new(3);
        for i in 0..4 {
            history.record(mv(i));
        }

        assert_eq!(history.undo_len(), 3);
        assert_eq!(history.take_undo(), Some(mv(3)));
        assert_eq!(history.take_undo(), Some(mv(2)));
        assert_eq!(history.take_undo(), Some(mv(1)));
        assert_eq!(history.take_undo(), None);
    }

    #[test]
    fn test_redo_replays_in_order() {
        let mut history = History::new(3);
        history.record(mv(0));
        history.record(mv(1));
        history.take_undo();
        history.take_undo();

        assert_eq!(history.take_redo(), Some(mv(0)));
        assert_eq!(history.take_redo(), Some(mv(1)));
        assert_eq!(history.take_redo(), None);
        assert_eq!(history.last_move(), Some(mv(1)));
    }

    #[test]
    fn test_clear() {
        let mut history = History::new(2);
        history.record(mv(0));
        history.take_undo();
        history.record(mv(1));
        history.clear();

        assert_eq!(history.undo_len(), 0);
        assert_eq!(history.redo_len(), 0);
        assert_eq!(history.depth(), 2);
    }
}
