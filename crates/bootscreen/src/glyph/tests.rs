//! Tests for glyph decoding.

use super::{decode, dot_position, Glyph, DOT_POSITIONS};

// ============================================================================
// Glyph tests
// ============================================================================

#[test]
fn test_glyph_codepoint() {
    assert_eq!(Glyph::new(0).codepoint(), 0x2800);
    assert_eq!(Glyph::new(1).codepoint(), 0x2801);
    assert_eq!(Glyph::new(17).codepoint(), 0x2811);
    assert_eq!(Glyph::new(255).codepoint(), 0x28FF);
}

#[test]
fn test_glyph_character() {
    assert_eq!(Glyph::new(0).character(), '⠀');
    assert_eq!(Glyph::new(1).character(), '⠁');
    assert_eq!(Glyph::new(17).character(), '⠑');
    assert_eq!(Glyph::new(255).character(), '⣿');
}

#[test]
fn test_glyph_from_char() {
    assert_eq!(Glyph::from_char('⠀'), Some(Glyph::BLANK));
    assert_eq!(Glyph::from_char('⠑'), Some(Glyph::new(17)));
    assert_eq!(Glyph::from_char('⣿'), Some(Glyph::FULL));

    // Non-braille characters
    assert_eq!(Glyph::from_char('A'), None);
    assert_eq!(Glyph::from_char(' '), None);
    assert_eq!(Glyph::from_char('\u{2900}'), None);
}

#[test]
fn test_glyph_from_codepoint_bounds() {
    assert_eq!(Glyph::from_codepoint(0x2800), Some(Glyph::BLANK));
    assert_eq!(Glyph::from_codepoint(0x28FF), Some(Glyph::FULL));
    assert_eq!(Glyph::from_codepoint(0x27FF), None);
    assert_eq!(Glyph::from_codepoint(0x2900), None);
}

#[test]
fn test_glyph_dot_count() {
    assert_eq!(Glyph::BLANK.dot_count(), 0);
    assert_eq!(Glyph::new(0b0000_0011).dot_count(), 2);
    assert_eq!(Glyph::FULL.dot_count(), 8);
}

#[test]
fn test_glyph_is_set_out_of_range() {
    assert!(Glyph::FULL.is_set(7));
    assert!(!Glyph::FULL.is_set(8));
}

#[test]
fn test_glyph_display() {
    assert_eq!(Glyph::new(17).to_string(), "⠑");
    assert_eq!(format!("{:?}", Glyph::new(17)), "Glyph(0b00010001, U+2811, ⠑)");
}

// ============================================================================
// Decode tests
// ============================================================================

#[test]
fn test_decode_blank_and_full() {
    assert_eq!(decode('⠀'), [false; 8]);
    assert_eq!(decode('⣿'), [true; 8]);
}

#[test]
fn test_decode_single_dots() {
    // U+2801 .. U+2880 light exactly one dot each
    for bit in 0..8u32 {
        let c = char::from_u32(0x2800 + (1 << bit)).unwrap();
        let dots = decode(c);
        for (i, on) in dots.iter().enumerate() {
            assert_eq!(*on, i == bit as usize, "char {c} dot {i}");
        }
    }
}

#[test]
fn test_decode_art_glyphs() {
    // ⡠ = U+2860: dots 5 and 6
    assert_eq!(
        decode('⡠'),
        [false, false, false, false, false, true, true, false]
    );
    // ⢀ = U+2880: dot 7 only
    assert_eq!(
        decode('⢀'),
        [false, false, false, false, false, false, false, true]
    );
}

#[test]
fn test_decode_outside_block() {
    for c in ['A', ' ', '#', '\u{27FF}', '\u{2900}', '\u{1F600}'] {
        assert_eq!(decode(c), [false; 8], "{c:?}");
    }
}

// ============================================================================
// Dot layout tests
// ============================================================================

#[test]
fn test_dot_positions_cover_cell() {
    let mut seen = [[false; 4]; 2];
    for (col, row) in DOT_POSITIONS {
        assert!(!seen[col][row], "duplicate position ({col}, {row})");
        seen[col][row] = true;
    }
    assert!(seen.iter().flatten().all(|s| *s));
}

#[test]
fn test_dot_position_lookup() {
    assert_eq!(dot_position(0), Some((0, 0)));
    assert_eq!(dot_position(2), Some((0, 2)));
    assert_eq!(dot_position(3), Some((1, 0)));
    assert_eq!(dot_position(6), Some((0, 3)));
    assert_eq!(dot_position(7), Some((1, 3)));
    assert_eq!(dot_position(8), None);
}
