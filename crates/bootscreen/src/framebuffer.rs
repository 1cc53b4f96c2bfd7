//! Linear RGBX framebuffer.

use crate::constants::BYTES_PER_PIXEL;

/// One pixel: red, green, blue, padding.
pub type Pixel = [u8; BYTES_PER_PIXEL];

/// Background: black with zero padding.
pub const BLACK: Pixel = [0x00, 0x00, 0x00, 0x00];

/// Ink: opaque white with zero padding.
pub const WHITE: Pixel = [0xFF, 0xFF, 0xFF, 0x00];

/// A row-major RGBX pixel buffer, four bytes per pixel.
///
/// Every byte starts at zero. Writes outside the canvas are dropped.
///
/// # Example
///
/// ```
/// use bootscreen::{Framebuffer, WHITE};
///
/// let mut fb = Framebuffer::new(4, 2);
/// assert_eq!(fb.len(), 32);
///
/// assert!(fb.put_pixel(3, 1, WHITE));
/// assert!(!fb.put_pixel(4, 1, WHITE));
/// assert_eq!(fb.pixel(3, 1), Some(WHITE));
/// assert_eq!(&fb.as_bytes()[28..], &[0xFF, 0xFF, 0xFF, 0x00]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    bytes: Vec<u8>,
}

impl Framebuffer {
    /// Allocates a zeroed `width`×`height` framebuffer.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bytes: vec![0; width * height * BYTES_PER_PIXEL],
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True for a zero-area framebuffer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Raw bytes, row-major, top to bottom.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the framebuffer, returning its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) * BYTES_PER_PIXEL)
    }

    /// Reads the pixel at `(x, y)`.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        let at = self.offset(x as i64, y as i64)?;
        let mut px = BLACK;
        px.copy_from_slice(&self.bytes[at..at + BYTES_PER_PIXEL]);
        Some(px)
    }

    /// Writes `color` at `(x, y)`. Returns false if the point is off-canvas.
    pub fn put_pixel(&mut self, x: i64, y: i64, color: Pixel) -> bool {
        match self.offset(x, y) {
            Some(at) => {
                self.bytes[at..at + BYTES_PER_PIXEL].copy_from_slice(&color);
                true
            }
            None => false,
        }
    }

    /// Fills the `size`×`size` square whose top-left corner is `(x, y)`,
    /// clipping to the canvas.
    pub fn fill_square(&mut self, x: i64, y: i64, size: usize, color: Pixel) {
        for dy in 0..size as i64 {
            for dx in 0..size as i64 {
                self.put_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Iterates pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.bytes.chunks_exact(BYTES_PER_PIXEL)
    }

    /// Coordinates of the first non-black pixel in row-major order.
    #[must_use]
    pub fn first_lit(&self) -> Option<(usize, usize)> {
        let index = self.pixels().position(|px| px != BLACK)?;
        Some((index % self.width, index / self.width))
    }

    /// Number of pixels that are not black.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.pixels().filter(|px| *px != BLACK).count()
    }
}

impl core::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Framebuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}
