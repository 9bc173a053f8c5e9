//! Compositor: pixel canvas -> terminal framebuffer.
//!
//! Terminal glyphs are roughly twice as tall as they are wide, so each
//! terminal cell shows two vertically stacked pixels with the upper half
//! block glyph: foreground is the upper pixel, background the lower one.
//! The picture is framed by a border and centered in the viewport.

use crate::canvas::PixelCanvas;
use crate::fb::{Cell, FrameBuffer, Rgb};

const UPPER_HALF: char = '▀';

const BORDER_FG: Rgb = Rgb::new(200, 200, 200);
const HINT_FG: Rgb = Rgb::new(140, 140, 150);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the canvas landed inside the framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Top-left of the border
    pub x: u16,
    pub y: u16,
    /// Border size including the border itself
    pub width: u16,
    pub height: u16,
}

/// Terminal cells needed for a canvas, border excluded.
pub fn cells_for(canvas: &PixelCanvas) -> (u16, u16) {
    let w = canvas.width().min(u16::MAX as u32) as u16;
    let h = canvas.height().div_ceil(2).min(u16::MAX as u32) as u16;
    (w, h)
}

/// Render `canvas` into `fb`, resized to `viewport`. An optional hint line
/// goes right under the border when there is room.
pub fn compose_into(
    canvas: &PixelCanvas,
    viewport: Viewport,
    hint: Option<&str>,
    fb: &mut FrameBuffer,
) -> Placement {
    fb.resize(viewport.width, viewport.height);
    fb.clear(Cell::default());

    let (inner_w, inner_h) = cells_for(canvas);
    let frame_w = inner_w.saturating_add(2);
    let frame_h = inner_h.saturating_add(2);
    let x0 = viewport.width.saturating_sub(frame_w) / 2;
    let y0 = viewport.height.saturating_sub(frame_h) / 2;

    draw_border(fb, x0, y0, frame_w, frame_h);

    for row in 0..inner_h {
        for col in 0..inner_w {
            let top = canvas.get(col as u32, row as u32 * 2).unwrap_or(Rgb::BLACK);
            let bottom = canvas
                .get(col as u32, row as u32 * 2 + 1)
                .unwrap_or(Rgb::BLACK);
            fb.set(
                x0.saturating_add(1 + col),
                y0.saturating_add(1 + row),
                Cell::new(UPPER_HALF, top, bottom),
            );
        }
    }

    if let Some(text) = hint {
        let hint_y = y0.saturating_add(frame_h);
        if hint_y < viewport.height {
            let len = text.chars().count() as u16;
            let hint_x = viewport.width.saturating_sub(len) / 2;
            fb.put_str(hint_x, hint_y, text, HINT_FG, Rgb::BLACK);
        }
    }

    Placement {
        x: x0,
        y: y0,
        width: frame_w,
        height: frame_h,
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let put = |fb: &mut FrameBuffer, cx: u16, cy: u16, ch: char| {
        fb.set(cx, cy, Cell::new(ch, BORDER_FG, Rgb::BLACK));
    };

    let right = x + w - 1;
    let bottom = y + h - 1;
    put(fb, x, y, '┌');
    put(fb, right, y, '┐');
    put(fb, x, bottom, '└');
    put(fb, right, bottom, '┘');
    for cx in x + 1..right {
        put(fb, cx, y, '─');
        put(fb, cx, bottom, '─');
    }
    for cy in y + 1..bottom {
        put(fb, x, cy, '│');
        put(fb, right, cy, '│');
    }
}
