//! Pixel surfaces.
//!
//! The game is painted onto a [`Surface`] in pixel units; one board cell
//! covers a `block_size x block_size` square. [`PixelCanvas`] is the
//! in-memory implementation the terminal compositor reads from.

use crate::fb::Rgb;

/// Something the game can be painted on.
pub trait Surface {
    /// (width, height) in pixels
    fn size(&self) -> (u32, u32);

    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Rgb);

    /// Fill a rectangle, clipped to the surface.
    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb);
}

/// Row-major RGB pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Number of pixels equal to `color`
    pub fn count(&self, color: Rgb) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }
}

impl Surface for PixelCanvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        if x >= x_end {
            return;
        }

        let stride = self.width as usize;
        for py in y..y_end {
            let row = py as usize * stride;
            self.pixels[row + x as usize..row + x_end as usize].fill(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rect_is_clipped() {
        let red = Rgb::new(255, 0, 0);
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.fill_rect(2, 2, 5, 5, red);

        assert_eq!(canvas.count(red), 4);
        assert_eq!(canvas.get(3, 3), Some(red));
        assert_eq!(canvas.get(1, 3), Some(Rgb::BLACK));
    }

    #[test]
    fn fill_rect_outside_is_noop() {
        let mut canvas = PixelCanvas::new(2, 2);
        canvas.fill_rect(5, 0, 1, 1, Rgb::new(1, 2, 3));
        canvas.fill_rect(0, 5, 1, 1, Rgb::new(1, 2, 3));
        assert_eq!(canvas.count(Rgb::BLACK), 4);
    }
}
