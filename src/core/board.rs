//! Board grid and cell states.
//!
//! The board is a square `size`×`size` grid stored row-major. Cells in the
//! four 2×2 corner blocks are `Invalid` for the lifetime of the board; every
//! other cell alternates between `Empty` and `Filled` as jumps are made.

use serde::{Deserialize, Serialize};

use super::config::{validate_size, ConfigError, CORNER_SPAN};
use super::position::Position;

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Outside the playable cross. Never changes.
    Invalid,
    /// A hole. Can be jumped into.
    Empty,
    /// Holds a piece. Can jump or be jumped over.
    Filled,
}

impl CellState {
    /// Check if the cell is part of the playable cross.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        !matches!(self, CellState::Invalid)
    }
}

/// Square grid of cell states.
///
/// Deserializing checks the cell count and the corner layout, so a decoded
/// board upholds the same geometry as one built with [`Board::new`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct BoardData {
    size: usize,
    cells: Vec<CellState>,
}

impl TryFrom<BoardData> for Board {
    type Error = ConfigError;

    fn try_from(data: BoardData) -> Result<Self, Self::Error> {
        validate_size(data.size)?;
        let expected = data.size * data.size;
        if data.cells.len() != expected {
            return Err(ConfigError::CellCount {
                size: data.size,
                expected,
                found: data.cells.len(),
            });
        }

        let board = Self {
            size: data.size,
            cells: data.cells,
        };
        if let Some((pos, _)) = board
            .iter()
            .find(|&(pos, state)| board.is_corner(pos) == state.is_playable())
        {
            return Err(ConfigError::MisplacedCell(pos));
        }
        Ok(board)
    }
}

impl Board {
    /// Create a board in the starting configuration: corners invalid, center
    /// empty, everything else filled.
    ///
    /// # Panics
    ///
    /// Panics if `size` is too small or even.
    #[must_use]
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Ok(board) => board,
            Err(e) => panic!("invalid board size: {e}"),
        }
    }

    /// Create a starting board, rejecting sizes without a center cell or a
    /// legal opening jump.
    pub fn try_new(size: usize) -> Result<Self, ConfigError> {
        validate_size(size)?;
        let mut board = Self {
            size,
            cells: vec![CellState::Filled; size * size],
        };
        board.fill_start();
        Ok(board)
    }

    /// Reset every cell to the starting configuration in place.
    pub fn fill_start(&mut self) {
        for row in 0..self.size {
            for col in 0..self.size {
                let pos = Position::new(row, col);
                let state = if self.is_corner(pos) {
                    CellState::Invalid
                } else {
                    CellState::Filled
                };
                self.cells[pos.index(self.size)] = state;
            }
        }
        let center = self.center();
        self.cells[center.index(self.size)] = CellState::Empty;
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The geometric center, which starts empty.
    #[must_use]
    pub fn center(&self) -> Position {
        Position::new(self.size / 2, self.size / 2)
    }

    /// Check if a position falls in one of the four corner blocks.
    #[must_use]
    pub fn is_corner(&self, pos: Position) -> bool {
        let edge = |c: usize| c < CORNER_SPAN || c >= self.size.saturating_sub(CORNER_SPAN);
        edge(pos.row) && edge(pos.col)
    }

    /// Get the state of a cell, or `None` if `pos` is off the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<CellState> {
        pos.in_bounds(self.size)
            .then(|| self.cells[pos.index(self.size)])
    }

    /// Check whether `pos` is on the grid and holds `state`.
    #[must_use]
    pub fn is(&self, pos: Position, state: CellState) -> bool {
        self.get(pos) == Some(state)
    }

    /// Overwrite a playable cell. Off-grid and corner positions are ignored.
    pub(crate) fn set(&mut self, pos: Position, state: CellState) {
        if pos.in_bounds(self.size) && !self.is_corner(pos) {
            self.cells[pos.index(self.size)] = state;
        }
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Iterate rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.size)
    }

    /// Iterate every position with its state, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| (Position::new(i / size, i % size), state))
    }

    /// Count cells in a given state.
    #[must_use]
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Count pieces on the board.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.count(CellState::Filled)
    }
}

impl std::fmt::Display for Board {
    /// Renders `o` for a piece, `.` for a hole and a blank for corner cells.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    CellState::Invalid => ' ',
                    CellState::Empty => '.',
                    CellState::Filled => 'o',
                })
                .collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
