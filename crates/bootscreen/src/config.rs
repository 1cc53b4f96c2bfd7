//! Render configuration.

use crate::constants::{BYTES_PER_PIXEL, CANVAS_HEIGHT, CANVAS_WIDTH, SCALE};
use crate::error::{Error, Result};

/// Canvas size and dot magnification for a render.
///
/// The default is the boot framebuffer: 1280×720 at scale 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Canvas width in pixels.
    pub width: usize,
    /// Canvas height in pixels.
    pub height: usize,
    /// Side length, in pixels, of the square drawn for each dot.
    pub scale: usize,
}

impl RenderConfig {
    /// Creates a validated config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if any value is zero.
    pub fn new(width: usize, height: usize, scale: usize) -> Result<Self> {
        let config = Self {
            width,
            height,
            scale,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that every dimension is non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the first zero field.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::InvalidConfig("canvas width must be non-zero"));
        }
        if self.height == 0 {
            return Err(Error::InvalidConfig("canvas height must be non-zero"));
        }
        if self.scale == 0 {
            return Err(Error::InvalidConfig("scale must be non-zero"));
        }
        Ok(())
    }

    /// Size of the framebuffer this config produces, in bytes.
    #[must_use]
    pub const fn framebuffer_len(&self) -> usize {
        self.width * self.height * BYTES_PER_PIXEL
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            scale: SCALE,
        }
    }
}
