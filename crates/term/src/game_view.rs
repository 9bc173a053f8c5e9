//! GameView: paints a `core::GameState` onto a pixel [`Surface`].
//!
//! Pure (no I/O). The surface is cleared, every occupied board cell is
//! filled, then every occupied cell of the active piece at its offset.
//! Cells above the top edge are clipped.

use crate::canvas::{PixelCanvas, Surface};
use crate::core::{Board, GameState, Piece};
use crate::fb::Rgb;
use crate::types::{DEFAULT_BLOCK_SIZE, EMPTY};

/// Colors used by the painter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub locked: Rgb,
    pub active: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::BLACK,
            locked: Rgb::new(255, 255, 0),
            active: Rgb::new(255, 0, 0),
        }
    }
}

/// Paints the board and the active piece, `block_size` pixels per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    block_size: u32,
    palette: Palette,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCK_SIZE)
    }
}

impl GameView {
    /// A zero block size is bumped to 1.
    pub fn new(block_size: u16) -> Self {
        Self {
            block_size: block_size.max(1) as u32,
            palette: Palette::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Pixel size of a surface that fits `board` exactly.
    pub fn surface_size(&self, board: &Board) -> (u32, u32) {
        (
            board.width() as u32 * self.block_size,
            board.height() as u32 * self.block_size,
        )
    }

    /// A black canvas sized for `board`.
    pub fn canvas_for(&self, board: &Board) -> PixelCanvas {
        let (w, h) = self.surface_size(board);
        PixelCanvas::new(w, h)
    }

    /// Paint one full frame.
    pub fn draw(&self, state: &GameState, surface: &mut impl Surface) {
        surface.clear(self.palette.background);
        self.draw_board(state.board(), surface);
        self.draw_piece(state.piece(), surface);
    }

    pub fn draw_board(&self, board: &Board, surface: &mut impl Surface) {
        for (y, row) in board.rows().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell != EMPTY {
                    self.fill_block(surface, x as i32, y as i32, self.palette.locked);
                }
            }
        }
    }

    pub fn draw_piece(&self, piece: &Piece, surface: &mut impl Surface) {
        for (x, y) in piece.cells() {
            self.fill_block(surface, x, y, self.palette.active);
        }
    }

    fn fill_block(&self, surface: &mut impl Surface, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 {
            return;
        }
        let b = self.block_size;
        surface.fill_rect(x as u32 * b, y as u32 * b, b, b, color);
    }
}
