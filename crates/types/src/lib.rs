//! Core types module - shared data structures and constants
//!
//! Pure data with no external dependencies, usable from the game logic, the
//! terminal painter and the input layer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: (`width / 2 - 1`, 0)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DROP_INTERVAL_MS` | 1000 | Gravity threshold |
//! | `FRAME_MS` | 16 | Frame pacing of the terminal loop (~60 FPS) |
//!
//! # Cells
//!
//! A [`Cell`] is `0` when empty. Occupied cells hold the code of the piece
//! kind that produced them (1..=7), see [`PieceKind::code`].

/// Board dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

/// Gravity fires once the accumulated frame time exceeds this (milliseconds)
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Frame pacing for the terminal loop (milliseconds)
pub const FRAME_MS: u32 = 16;

/// Canvas pixels per board cell (each side)
pub const DEFAULT_BLOCK_SIZE: u16 = 2;

/// Board/shape cell value
pub type Cell = u8;

/// The empty cell
pub const EMPTY: Cell = 0;

/// Tetromino kinds, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    T,
    L,
    J,
    S,
    Z,
    O,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::O,
    ];

    /// Nonzero cell value written for this kind
    pub fn code(self) -> Cell {
        match self {
            PieceKind::I => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
            PieceKind::O => 7,
        }
    }
}

/// Player commands (one per key)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}
