//! Grid coordinates and axis directions.
//!
//! ## Position
//!
//! A `(row, col)` pair, 0-based, row 0 at the top. Positions carry no board
//! size; bounds are checked against the board they are used with.
//!
//! ## Direction
//!
//! The four axis directions a jump can travel. Diagonals are never legal.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether this position lies on a `size`×`size` grid.
    #[must_use]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Step `distance` cells in `direction`.
    ///
    /// Returns `None` if the result would leave a `size`×`size` grid.
    ///
    /// ```
    /// use peg_solitaire::core::{Direction, Position};
    ///
    /// let p = Position::new(1, 3);
    /// assert_eq!(p.step(Direction::Down, 2, 7), Some(Position::new(3, 3)));
    /// assert_eq!(p.step(Direction::Up, 2, 7), None);
    /// ```
    #[must_use]
    pub fn step(self, direction: Direction, distance: usize, size: usize) -> Option<Position> {
        let (dr, dc) = direction.offset();
        let row = offset_coord(self.row, dr, distance)?;
        let col = offset_coord(self.col, dc, distance)?;
        let next = Position::new(row, col);
        next.in_bounds(size).then_some(next)
    }

    /// Row-major index into a `size`-wide grid.
    #[must_use]
    pub(crate) const fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }
}

fn offset_coord(coord: usize, delta: isize, distance: usize) -> Option<usize> {
    match delta {
        0 => Some(coord),
        d if d < 0 => coord.checked_sub(distance),
        _ => coord.checked_add(distance),
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four axis directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in scan order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit `(row, col)` offset.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}
