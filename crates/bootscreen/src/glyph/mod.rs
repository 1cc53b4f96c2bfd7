//! Braille glyph decoding.
//!
//! A braille pattern character packs a 2-column × 4-row dot grid into the low
//! eight bits of its offset from U+2800. [`decode`] turns any character into
//! the eight dot flags; [`dot_position`] places a dot inside its cell.
//!
//! # Example
//!
//! ```
//! use bootscreen::glyph::{decode, dot_position};
//!
//! // ⠑ = U+2811: dots 0 and 4
//! let dots = decode('⠑');
//! assert_eq!(dots, [true, false, false, false, true, false, false, false]);
//! assert_eq!(dot_position(4), Some((1, 1)));
//!
//! // Anything outside the braille block is blank
//! assert_eq!(decode('A'), [false; 8]);
//! ```

mod pattern;

pub use pattern::Glyph;

use crate::constants::DOTS_PER_GLYPH;

/// Cell coordinates `(column, row)` of each dot, indexed by bit.
///
/// Dots 0-2 run down the left column, 3-5 down the right, and the two
/// bottom-row dots (6, 7) were added to the 6-dot system last.
pub const DOT_POSITIONS: [(usize, usize); DOTS_PER_GLYPH] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 1),
    (1, 2),
    (0, 3),
    (1, 3),
];

/// Decodes a character into its eight dot flags.
///
/// Characters outside U+2800-U+28FF decode to all-false.
#[must_use]
pub fn decode(c: char) -> [bool; DOTS_PER_GLYPH] {
    Glyph::from_char(c).unwrap_or(Glyph::BLANK).dots()
}

/// Returns the `(column, row)` of dot `index` within its cell.
#[inline]
#[must_use]
pub const fn dot_position(index: usize) -> Option<(usize, usize)> {
    if index < DOTS_PER_GLYPH {
        Some(DOT_POSITIONS[index])
    } else {
        None
    }
}

#[cfg(test)]
mod tests;
