//! Board module - manages the game grid
//!
//! A fixed `width x height` grid stored as a flat row-major array for cache
//! locality. Coordinates: (x, y) where x grows to the right and y grows
//! downwards; row 0 is the top row.
//!
//! The region above row 0 is treated as open space: reads there are empty,
//! collisions are never reported there and locking skips those cells.

use crate::shape::Shape;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    /// Build a board from rows (top to bottom).
    ///
    /// Returns `None` for empty or ragged input.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.as_ref().len();
        if width == 0 {
            return None;
        }

        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return None;
            }
            cells.extend_from_slice(row);
        }

        Some(Self {
            width,
            height,
            cells,
        })
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.width > 0 && y < self.height && self.row(y).iter().all(|&c| c != EMPTY)
    }

    /// Cells of row `y`; empty slice when out of bounds
    pub fn row(&self, y: usize) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Rows top to bottom; none for a zero-width board
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width.max(1))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Whether `shape` anchored at (x, y) overlaps a wall, the floor or an
    /// occupied cell. Cells above the top edge never collide.
    pub fn collides(&self, shape: &Shape, x: i32, y: i32) -> bool {
        shape.occupied().any(|(dx, dy, _)| {
            let bx = x + dx;
            let by = y + dy;
            bx < 0
                || bx >= self.width as i32
                || by >= self.height as i32
                || self.is_occupied(bx, by)
        })
    }

    /// Write the occupied cells of `shape` anchored at (x, y).
    ///
    /// Cells outside the board are skipped; occupied board cells are
    /// overwritten. Returns the number of cells written.
    pub fn lock(&mut self, shape: &Shape, x: i32, y: i32) -> usize {
        let mut written = 0;
        for (dx, dy, value) in shape.occupied() {
            if self.set(x + dx, y + dy, value) {
                written += 1;
            }
        }
        written
    }

    /// Remove every full row, shifting the rows above down and refilling the
    /// top with empty rows. Returns the number of rows removed.
    ///
    /// Single bottom-to-top pass with a separate write cursor, so adjacent
    /// full rows are all removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width;
        let mut write_y = self.height;
        let mut cleared = 0;

        for read_y in (0..self.height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }

            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(EMPTY);
        cleared
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
