//! Braille art rasterization.

use crate::art::ArtBlock;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::framebuffer::{Framebuffer, Pixel, WHITE};
use crate::glyph::{decode, DOT_POSITIONS};
use crate::layout::Layout;

/// Draws an art block into a fresh framebuffer.
///
/// Each raised dot becomes a `scale`×`scale` square of [`WHITE`]; the art is
/// centered per [`Layout::center`] and anything past the canvas edge is
/// clipped.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) if `config`
/// has a zero dimension.
///
/// # Example
///
/// ```
/// use bootscreen::{rasterize, ArtBlock, RenderConfig, WHITE};
///
/// let art = ArtBlock::from_rows(["⠁"]).unwrap();
/// let config = RenderConfig::new(4, 8, 2).unwrap();
/// let fb = rasterize(&art, &config).unwrap();
///
/// // art is 4×8, so it sits at the origin; dot 0 is the top-left 2×2 block
/// assert_eq!(fb.pixel(1, 1), Some(WHITE));
/// assert_eq!(fb.lit_count(), 4);
/// ```
pub fn rasterize(art: &ArtBlock, config: &RenderConfig) -> Result<Framebuffer> {
    config.validate()?;
    let mut fb = Framebuffer::new(config.width, config.height);
    let layout = Layout::center(art.rows(), art.columns(), config);
    draw(&mut fb, art, &layout, config.scale, WHITE);
    Ok(fb)
}

/// Renders the built-in cross with `config`.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) if `config`
/// has a zero dimension.
pub fn render(config: &RenderConfig) -> Result<Framebuffer> {
    rasterize(&ArtBlock::cross()?, config)
}

fn draw(fb: &mut Framebuffer, art: &ArtBlock, layout: &Layout, scale: usize, ink: Pixel) {
    for (r, row) in art.iter_rows().enumerate() {
        for (c, &ch) in row.iter().enumerate() {
            for (d, on) in decode(ch).into_iter().enumerate() {
                if !on {
                    continue;
                }
                let (dx, dy) = DOT_POSITIONS[d];
                let x = layout.dot_x(c, dx, scale);
                let y = layout.dot_y(r, dy, scale);
                fb.fill_square(x, y, scale, ink);
            }
        }
    }
}
