//! Pieces module - the seven-shape catalog
//!
//! Spawn orientation of every kind. Occupied cells carry the kind's code so a
//! locked piece can still be told apart on the board.

use crate::shape::Shape;
use crate::types::{Cell, PieceKind};

const I_ROWS: &[&[u8]] = &[&[1, 1, 1, 1]];
const T_ROWS: &[&[u8]] = &[&[1, 1, 1], &[0, 1, 0]];
const L_ROWS: &[&[u8]] = &[&[1, 1, 1], &[1, 0, 0]];
const J_ROWS: &[&[u8]] = &[&[1, 1, 1], &[0, 0, 1]];
const S_ROWS: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];
const Z_ROWS: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];
const O_ROWS: &[&[u8]] = &[&[1, 1], &[1, 1]];

/// 0/1 layout of a kind in spawn orientation
pub fn mask(kind: PieceKind) -> &'static [&'static [u8]] {
    match kind {
        PieceKind::I => I_ROWS,
        PieceKind::T => T_ROWS,
        PieceKind::L => L_ROWS,
        PieceKind::J => J_ROWS,
        PieceKind::S => S_ROWS,
        PieceKind::Z => Z_ROWS,
        PieceKind::O => O_ROWS,
    }
}

/// Spawn shape for a kind, occupied cells set to `kind.code()`
pub fn spawn_shape(kind: PieceKind) -> Shape {
    let code = kind.code();
    let rows: Vec<Vec<Cell>> = mask(kind)
        .iter()
        .map(|row| row.iter().map(|&m| m * code).collect())
        .collect();

    // Every catalog entry is rectangular and at most 4 wide.
    Shape::from_rows(&rows).unwrap_or_else(|| unreachable!("catalog shape for {:?}", kind))
}
