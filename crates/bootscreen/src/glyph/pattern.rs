//! Single braille glyph and its dot bitmask.

use core::fmt;

use crate::constants::{BRAILLE_BASE, BRAILLE_MAX, DOTS_PER_GLYPH};

/// A single braille character, stored as the 8-bit dot mask it encodes.
///
/// Each glyph corresponds to a Unicode codepoint in the Braille Patterns
/// block (U+2800-U+28FF). Bit `i` of the mask is dot `i`:
///
/// ```text
/// Dot Pattern:    Bit Mapping:
/// ┌───┬───┐       ┌───┬───┐
/// │ 1 │ 4 │       │ 0 │ 3 │
/// │ 2 │ 5 │       │ 1 │ 4 │
/// │ 3 │ 6 │       │ 2 │ 5 │
/// │ 7 │ 8 │       │ 6 │ 7 │
/// └───┴───┘       └───┴───┘
/// ```
///
/// # Example
///
/// ```
/// use bootscreen::Glyph;
///
/// let g = Glyph::new(17);
/// assert_eq!(g.byte_value(), 17);
/// assert_eq!(g.codepoint(), 0x2811);
/// assert_eq!(g.character(), '⠑');
/// assert_eq!(g.to_string(), "⠑");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Glyph(u8);

impl Glyph {
    /// The blank glyph (value 0, U+2800).
    pub const BLANK: Self = Self(0);

    /// The full glyph (value 255, U+28FF, all dots).
    pub const FULL: Self = Self(u8::MAX);

    /// Creates a glyph from its dot mask.
    #[inline]
    #[must_use]
    pub const fn new(mask: u8) -> Self {
        Self(mask)
    }

    /// Creates a glyph from a Unicode character.
    ///
    /// Returns `None` if the character is not in the Braille Patterns block.
    ///
    /// # Example
    ///
    /// ```
    /// use bootscreen::Glyph;
    ///
    /// assert_eq!(Glyph::from_char('⠑').map(Glyph::byte_value), Some(17));
    /// assert!(Glyph::from_char('A').is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        Self::from_codepoint(c as u32)
    }

    /// Creates a glyph from a Unicode codepoint.
    ///
    /// Returns `None` if the codepoint is not in the Braille Patterns block.
    #[must_use]
    pub const fn from_codepoint(cp: u32) -> Option<Self> {
        if cp >= BRAILLE_BASE && cp <= BRAILLE_MAX {
            Some(Self((cp - BRAILLE_BASE) as u8))
        } else {
            None
        }
    }

    /// Returns the dot mask (0-255) encoded by this glyph.
    #[inline]
    #[must_use]
    pub const fn byte_value(self) -> u8 {
        self.0
    }

    /// Returns the Unicode codepoint (U+2800-U+28FF).
    #[inline]
    #[must_use]
    pub const fn codepoint(self) -> u32 {
        BRAILLE_BASE + self.0 as u32
    }

    /// Returns the braille character.
    #[must_use]
    pub const fn character(self) -> char {
        match char::from_u32(self.codepoint()) {
            Some(c) => c,
            None => '\u{2800}',
        }
    }

    /// Returns the number of raised dots.
    #[inline]
    #[must_use]
    pub const fn dot_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if dot `index` (0-7) is raised. Indices past 7 are never set.
    #[inline]
    #[must_use]
    pub const fn is_set(self, index: usize) -> bool {
        index < DOTS_PER_GLYPH && (self.0 >> index) & 1 == 1
    }

    /// Expands the mask into one flag per dot, in bit order.
    #[must_use]
    pub fn dots(self) -> [bool; DOTS_PER_GLYPH] {
        core::array::from_fn(|i| self.is_set(i))
    }
}

impl From<u8> for Glyph {
    #[inline]
    fn from(mask: u8) -> Self {
        Self::new(mask)
    }
}

impl From<Glyph> for char {
    #[inline]
    fn from(glyph: Glyph) -> Self {
        glyph.character()
    }
}

impl fmt::Debug for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Glyph({:#010b}, U+{:04X}, {})",
            self.byte_value(),
            self.codepoint(),
            self.character()
        )
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.character())
    }
}
