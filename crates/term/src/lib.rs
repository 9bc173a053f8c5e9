//! Terminal rendering for blockfall.
//!
//! The game is painted in pixel units onto a [`Surface`] by [`GameView`],
//! composited onto a terminal [`FrameBuffer`] two pixels per cell, and
//! flushed by [`TerminalRenderer`]. Everything except the renderer is pure
//! and unit-testable.

pub mod canvas;
pub mod compose;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use canvas::{PixelCanvas, Surface};
pub use compose::{compose_into, Placement, Viewport};
pub use fb::{Cell, FrameBuffer, Rgb};
pub use game_view::{GameView, Palette};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
