//! Read-only per-frame view of a session.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{CellState, Position};
use crate::rules::GameStatus;

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Grid side length.
    pub size: usize,

    /// Cell states, row-major.
    pub cells: Vec<CellState>,

    pub selection: Option<Position>,
    pub hover: Option<Position>,

    pub remaining_pieces: usize,
    pub status: GameStatus,

    /// Time since the current game started.
    pub elapsed: Duration,

    pub undo_depth: usize,
    pub redo_depth: usize,
    pub history_cap: usize,

    /// Message of the visible notification, if any.
    pub notification: Option<String>,
}

impl Snapshot {
    /// State of a cell, or `None` if off the grid.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<CellState> {
        if !pos.in_bounds(self.size) {
            return None;
        }
        self.cells.get(pos.row * self.size + pos.col).copied()
    }

    /// Elapsed time as `MM:SS`.
    #[must_use]
    pub fn clock(&self) -> String {
        let secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    /// Undo stack fill as `used/cap`.
    #[must_use]
    pub fn history_label(&self) -> String {
        format!("{}/{}", self.undo_depth, self.history_cap)
    }
}
