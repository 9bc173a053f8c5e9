//! Shape module - small cell matrices for falling pieces
//!
//! A shape is at most 4x4 and lives on the stack. Rotation never edits a
//! shape in place; it produces a new one.

use arrayvec::ArrayVec;

use crate::types::{Cell, EMPTY};

/// Largest side length of any shape
pub const MAX_SIDE: usize = 4;

const MAX_CELLS: usize = MAX_SIDE * MAX_SIDE;

/// Row-major matrix of cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    cells: ArrayVec<Cell, MAX_CELLS>,
}

impl Shape {
    /// Build a shape from rows.
    ///
    /// Returns `None` for empty, ragged or oversized input.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.as_ref().len();
        if width == 0 || width > MAX_SIDE || height > MAX_SIDE {
            return None;
        }

        let mut cells = ArrayVec::new();
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return None;
            }
            cells.extend(row.iter().copied());
        }

        Some(Self {
            width: width as u8,
            height: height as u8,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Cell at (x, y), `None` outside the matrix
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.cells[y * self.width() + x])
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width())
    }

    /// Occupied cells as `(dx, dy, value)` offsets from the top-left anchor
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        let w = self.width();
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != EMPTY)
            .map(move |(i, &v)| ((i % w) as i32, (i / w) as i32, v))
    }

    /// Clockwise quarter turn: transpose, then reverse each new row.
    ///
    /// Row `i` of the result is column `i` of `self` read bottom to top.
    pub fn rotated_cw(&self) -> Self {
        let (w, h) = (self.width(), self.height());
        let mut cells = ArrayVec::new();
        for i in 0..w {
            for j in 0..h {
                cells.push(self.cells[(h - 1 - j) * w + i]);
            }
        }

        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_bad_input() {
        let empty: [[Cell; 0]; 0] = [];
        assert!(Shape::from_rows(&empty).is_none());
        assert!(Shape::from_rows(&[vec![1u8, 1], vec![1u8]]).is_none());
        assert!(Shape::from_rows(&[[1u8, 1, 1, 1, 1]]).is_none());
    }

    #[test]
    fn rotation_of_t_points_left() {
        let t = Shape::from_rows(&[[1, 1, 1], [0, 1, 0]]).unwrap();
        let r = t.rotated_cw();

        assert_eq!((r.width(), r.height()), (2, 3));
        let rows: Vec<Vec<Cell>> = r.rows().map(|row| row.to_vec()).collect();
        assert_eq!(rows, vec![vec![0, 1], vec![1, 1], vec![0, 1]]);
    }

    #[test]
    fn occupied_skips_empty_cells() {
        let s = Shape::from_rows(&[[0, 5, 5], [5, 5, 0]]).unwrap();
        let cells: Vec<_> = s.occupied().collect();
        assert_eq!(cells, vec![(1, 0, 5), (2, 0, 5), (0, 1, 5), (1, 1, 5)]);
    }
}
