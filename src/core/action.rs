//! Move representation: a jump from one cell to another.
//!
//! A `Move` is only a pair of coordinates. Whether it is legal depends on the
//! board it is applied to; see `BoardEngine::is_legal_move`.

use serde::{Deserialize, Serialize};

use super::position::{Direction, Position};

/// A jump of one piece over a neighbour into a hole.
///
/// ## Example
///
/// ```
/// use peg_solitaire::core::{Move, Position};
///
/// let m = Move::new(Position::new(1, 3), Position::new(3, 3));
/// assert_eq!(m.midpoint(), Some(Position::new(2, 3)));
///
/// let diagonal = Move::new(Position::new(2, 2), Position::new(4, 4));
/// assert_eq!(diagonal.midpoint(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Cell the jumping piece starts on.
    pub from: Position,

    /// Cell the jumping piece lands on.
    pub to: Position,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// Build a move from `(row, col)` pairs.
    #[must_use]
    pub fn from_coords(from: (usize, usize), to: (usize, usize)) -> Self {
        Self::new(from.into(), to.into())
    }

    /// Check that `from` and `to` are exactly two cells apart along one axis.
    #[must_use]
    pub fn is_jump_shape(&self) -> bool {
        let dr = self.from.row.abs_diff(self.to.row);
        let dc = self.from.col.abs_diff(self.to.col);
        (dr == 2 && dc == 0) || (dr == 0 && dc == 2)
    }

    /// The jumped-over cell, if this move has a jump shape.
    #[must_use]
    pub fn midpoint(&self) -> Option<Position> {
        self.is_jump_shape().then(|| {
            Position::new(
                (self.from.row + self.to.row) / 2,
                (self.from.col + self.to.col) / 2,
            )
        })
    }

    /// Direction of travel, if this move has a jump shape.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        if !self.is_jump_shape() {
            return None;
        }
        Some(if self.to.row < self.from.row {
            Direction::Up
        } else if self.to.row > self.from.row {
            Direction::Down
        } else if self.to.col < self.from.col {
            Direction::Left
        } else {
            Direction::Right
        })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
