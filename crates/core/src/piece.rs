//! Active falling piece

use crate::pieces::spawn_shape;
use crate::shape::Shape;
use crate::types::PieceKind;

/// A shape plus the board position of its top-left corner
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Spawn orientation at the spawn column of a board `board_width` wide
    pub fn spawn(kind: PieceKind, board_width: usize) -> Self {
        Self {
            kind,
            shape: spawn_shape(kind),
            x: spawn_x(board_width),
            y: 0,
        }
    }

    /// Absolute board coordinates of the occupied cells
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied()
            .map(move |(dx, dy, _)| (self.x + dx, self.y + dy))
    }
}

/// Spawn column, left of centre on even widths
pub fn spawn_x(board_width: usize) -> i32 {
    (board_width / 2) as i32 - 1
}
