//! Board configuration.
//!
//! The engine is configured once at construction with:
//! - `size`: side length of the square grid (canonical 7)
//! - `history_depth`: cap on each of the undo and redo stacks (canonical 3)
//!
//! Every board uses the same geometry: the four 2×2 corner blocks are
//! unplayable and the center cell starts empty.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Side length of the standard English board.
pub const DEFAULT_BOARD_SIZE: usize = 7;

/// Number of moves kept on each history stack.
pub const DEFAULT_HISTORY_DEPTH: usize = 3;

/// Smallest board whose cross shape still has a center cell and a legal jump.
pub const MIN_BOARD_SIZE: usize = 5;

/// Side length of each unplayable corner block.
pub const CORNER_SPAN: usize = 2;

/// Errors from validating a [`BoardConfig`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size {0} is too small")]
    SizeTooSmall(usize),

    #[error("board size {0} must be odd so the board has a center cell")]
    SizeNotOdd(usize),

    #[error("history depth must be at least 1")]
    ZeroHistoryDepth,

    #[error("board of size {size} needs {expected} cells, found {found}")]
    CellCount {
        size: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell {0} does not match the corner layout")]
    MisplacedCell(Position),

    #[error("history holds {len} entries but its depth is {capacity}")]
    HistoryOverflow { capacity: usize, len: usize },
}

/// Check that `size` gives a board with a center cell and a legal jump.
pub fn validate_size(size: usize) -> Result<(), ConfigError> {
    if size < MIN_BOARD_SIZE {
        return Err(ConfigError::SizeTooSmall(size));
    }
    if size % 2 == 0 {
        return Err(ConfigError::SizeNotOdd(size));
    }
    Ok(())
}

/// Engine configuration.
///
/// ## Example
///
/// ```
/// use peg_solitaire::core::BoardConfig;
///
/// let config = BoardConfig::new().with_history_depth(5);
/// assert_eq!(config.size, 7);
/// assert_eq!(config.history_depth, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Grid side length.
    pub size: usize,

    /// Maximum entries on each of the undo and redo stacks.
    pub history_depth: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            history_depth: DEFAULT_HISTORY_DEPTH,
        }
    }
}

impl BoardConfig {
    /// Create the standard 7×7 configuration with a history depth of 3.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the history depth.
    #[must_use]
    pub fn with_history_depth(mut self, depth: usize) -> Self {
        self.history_depth = depth;
        self
    }

    /// Check that this configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_size(self.size)?;
        if self.history_depth == 0 {
            return Err(ConfigError::ZeroHistoryDepth);
        }
        Ok(())
    }

    /// Number of cells outside the corner blocks.
    #[must_use]
    pub fn playable_cells(&self) -> usize {
        self.size * self.size - 4 * CORNER_SPAN * CORNER_SPAN
    }

    /// Number of pieces on a freshly initialized board.
    #[must_use]
    pub fn starting_pieces(&self) -> usize {
        self.playable_cells() - 1
    }
}
