//! Placement of an art block on the canvas.

use core::ops::Range;

use crate::config::RenderConfig;
use crate::constants::{CELL_HEIGHT, CELL_WIDTH};

/// Pixel size and top-left origin of an art block centered on the canvas.
///
/// Origins are signed: art larger than the canvas gets a negative offset and
/// is clipped when drawn.
///
/// # Example
///
/// ```
/// use bootscreen::{Layout, RenderConfig};
///
/// let layout = Layout::center(10, 14, &RenderConfig::default());
/// assert_eq!((layout.art_width, layout.art_height), (112, 160));
/// assert_eq!((layout.start_x, layout.start_y), (584, 280));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Art width in pixels (`columns × 2 × scale`).
    pub art_width: i64,
    /// Art height in pixels (`rows × 4 × scale`).
    pub art_height: i64,
    /// Canvas x of the art's left edge.
    pub start_x: i64,
    /// Canvas y of the art's top edge.
    pub start_y: i64,
}

impl Layout {
    /// Centers a `rows`×`columns` glyph grid on the configured canvas.
    ///
    /// Offsets use integer division truncating toward zero.
    #[must_use]
    pub fn center(rows: usize, columns: usize, config: &RenderConfig) -> Self {
        let scale = config.scale as i64;
        let art_width = columns as i64 * CELL_WIDTH as i64 * scale;
        let art_height = rows as i64 * CELL_HEIGHT as i64 * scale;

        Self {
            art_width,
            art_height,
            start_x: (config.width as i64 - art_width) / 2,
            start_y: (config.height as i64 - art_height) / 2,
        }
    }

    /// Canvas x of glyph column `column`'s dot column `dx`.
    #[inline]
    #[must_use]
    pub fn dot_x(&self, column: usize, dx: usize, scale: usize) -> i64 {
        self.start_x + ((column * CELL_WIDTH + dx) * scale) as i64
    }

    /// Canvas y of glyph row `row`'s dot row `dy`.
    #[inline]
    #[must_use]
    pub fn dot_y(&self, row: usize, dy: usize, scale: usize) -> i64 {
        self.start_y + ((row * CELL_HEIGHT + dy) * scale) as i64
    }

    /// The art rectangle clipped to the canvas, as pixel ranges.
    ///
    /// Returns `None` when the art lies entirely off the canvas.
    #[must_use]
    pub fn visible(&self, config: &RenderConfig) -> Option<(Range<usize>, Range<usize>)> {
        let xs = clip(self.start_x, self.art_width, config.width);
        let ys = clip(self.start_y, self.art_height, config.height);
        if xs.is_empty() || ys.is_empty() {
            None
        } else {
            Some((xs, ys))
        }
    }
}

fn clip(start: i64, len: i64, limit: usize) -> Range<usize> {
    let lo = start.clamp(0, limit as i64) as usize;
    let hi = (start + len).clamp(0, limit as i64) as usize;
    lo..hi
}
