//! Fixed geometry of the boot splash.
//!
//! The canvas constants match the linear framebuffer the kernel programs at
//! boot: 1280×720, four bytes per pixel.

/// Unicode Braille base codepoint (U+2800).
///
/// Value 0 maps to U+2800 (BRAILLE PATTERN BLANK).
pub const BRAILLE_BASE: u32 = 0x2800;

/// Unicode Braille maximum codepoint (U+28FF).
///
/// Value 255 maps to U+28FF (BRAILLE PATTERN DOTS-12345678).
pub const BRAILLE_MAX: u32 = 0x28FF;

/// Number of dots encoded by one braille glyph.
pub const DOTS_PER_GLYPH: usize = 8;

/// Width of a glyph cell, in dots.
pub const CELL_WIDTH: usize = 2;

/// Height of a glyph cell, in dots.
pub const CELL_HEIGHT: usize = 4;

/// Bytes per framebuffer pixel (R, G, B, padding).
pub const BYTES_PER_PIXEL: usize = 4;

/// Default canvas width in pixels.
pub const CANVAS_WIDTH: usize = 1280;

/// Default canvas height in pixels.
pub const CANVAS_HEIGHT: usize = 720;

/// Default magnification: each dot becomes a `SCALE`×`SCALE` pixel block.
pub const SCALE: usize = 4;

/// Default artifact file name.
pub const OUTPUT_FILE: &str = "cross_framebuffer.raw";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_braille_range() {
        assert_eq!(BRAILLE_MAX - BRAILLE_BASE + 1, 1 << DOTS_PER_GLYPH);
    }

    #[test]
    fn test_cell_holds_every_dot() {
        assert_eq!(CELL_WIDTH * CELL_HEIGHT, DOTS_PER_GLYPH);
    }

    #[test]
    fn test_default_framebuffer_size() {
        assert_eq!(
            CANVAS_WIDTH * CANVAS_HEIGHT * BYTES_PER_PIXEL,
            3_686_400
        );
    }
}
