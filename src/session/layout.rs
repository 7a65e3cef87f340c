//! Mapping between window pixels and grid cells.
//!
//! The board fills the whole window. Normalized device coordinates run from
//! -1 to 1 on both axes with +y up; pixel coordinates start at the top-left
//! corner with +y down.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Window geometry for a `size`×`size` board.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    width: f64,
    height: f64,
    size: usize,
}

impl BoardLayout {
    /// Create a layout for a window of `width`×`height` pixels.
    #[must_use]
    pub fn new(width: f64, height: f64, size: usize) -> Self {
        assert!(size > 0, "Board size must be at least 1");
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            size,
        }
    }

    /// Update the window size.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
    }

    #[must_use]
    pub fn window_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Cell under a pixel, clamped to the grid.
    ///
    /// Pointers outside the window resolve to the nearest edge cell.
    ///
    /// ```
    /// use peg_solitaire::core::Position;
    /// use peg_solitaire::session::BoardLayout;
    ///
    /// let layout = BoardLayout::new(700.0, 700.0, 7);
    /// assert_eq!(layout.cell_at(350.0, 350.0), Position::new(3, 3));
    /// assert_eq!(layout.cell_at(-20.0, 9000.0), Position::new(6, 0));
    /// ```
    #[must_use]
    pub fn cell_at(&self, x: f64, y: f64) -> Position {
        let row = self.clamp_index(y * self.size as f64 / self.height);
        let col = self.clamp_index(x * self.size as f64 / self.width);
        Position::new(row, col)
    }

    /// Center of a cell in normalized device coordinates.
    #[must_use]
    pub fn cell_center(&self, pos: Position) -> (f32, f32) {
        let cell = 2.0 / self.size as f32;
        let x = -1.0 + pos.col as f32 * cell + cell / 2.0;
        let y = 1.0 - pos.row as f32 * cell - cell / 2.0;
        (x, y)
    }

    fn clamp_index(&self, value: f64) -> usize {
        // Float-to-int casts truncate toward zero and saturate; NaN maps to 0.
        (value as isize).clamp(0, self.size as isize - 1) as usize
    }
}
