//! Property-based tests for decoding and rasterization.
//!
//! Uses proptest to check the output invariants for arbitrary glyphs, art
//! blocks and canvas sizes, not just the built-in cross.

use std::fs;

use bootscreen::{
    decode, rasterize, render, write_raw, ArtBlock, Layout, RenderConfig, BLACK, WHITE,
};
use proptest::prelude::*;

fn braille() -> impl Strategy<Value = char> {
    (0x2800u32..=0x28FF).prop_map(|cp| char::from_u32(cp).unwrap())
}

fn art_block() -> impl Strategy<Value = ArtBlock> {
    (1usize..6, 1usize..6).prop_flat_map(|(rows, columns)| {
        prop::collection::vec(prop::collection::vec(braille(), columns), rows).prop_map(
            |grid| {
                let lines: Vec<String> = grid.into_iter().map(|r| r.into_iter().collect()).collect();
                ArtBlock::from_rows(lines).unwrap()
            },
        )
    })
}

// =============================================================================
// Decoding
// =============================================================================

proptest! {
    /// Every character outside the braille block decodes blank.
    #[test]
    fn prop_outside_block_is_blank(c in any::<char>().prop_filter("non-braille", |c| {
        !(0x2800..=0x28FF).contains(&(*c as u32))
    })) {
        prop_assert_eq!(decode(c), [false; 8]);
    }

    /// Inside the block, dot i is bit i of the offset.
    #[test]
    fn prop_dots_match_offset_bits(offset in 0u32..=0xFF) {
        let c = char::from_u32(0x2800 + offset).unwrap();
        let dots = decode(c);
        for (i, on) in dots.iter().enumerate() {
            prop_assert_eq!(*on, (offset >> i) & 1 == 1);
        }
    }
}

// =============================================================================
// Rasterization
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Buffer size depends only on the canvas, never on the art.
    #[test]
    fn prop_size_is_canvas_size(
        art in art_block(),
        width in 1usize..64,
        height in 1usize..64,
        scale in 1usize..6,
    ) {
        let config = RenderConfig::new(width, height, scale).unwrap();
        let fb = rasterize(&art, &config).unwrap();
        prop_assert_eq!(fb.len(), width * height * 4);
    }

    /// Only black and white pixels are ever produced, and every lit pixel
    /// falls inside the centered art rectangle.
    #[test]
    fn prop_two_colors_inside_art_box(
        art in art_block(),
        width in 1usize..64,
        height in 1usize..64,
        scale in 1usize..6,
    ) {
        let config = RenderConfig::new(width, height, scale).unwrap();
        let fb = rasterize(&art, &config).unwrap();
        let layout = Layout::center(art.rows(), art.columns(), &config);
        let visible = layout.visible(&config);

        for (i, px) in fb.pixels().enumerate() {
            prop_assert!(px == BLACK || px == WHITE, "pixel {} = {:?}", i, px);
            if px == WHITE {
                let (x, y) = (i % width, i / width);
                let (xs, ys) = visible.clone().unwrap();
                prop_assert!(xs.contains(&x) && ys.contains(&y));
            }
        }
    }

    /// On a canvas big enough to hold the art, the lit area is exactly
    /// dots × scale².
    #[test]
    fn prop_lit_area_counts_dots(art in art_block(), scale in 1usize..5) {
        let config = RenderConfig::new(96, 96, scale).unwrap();
        let fb = rasterize(&art, &config).unwrap();
        let dots: usize = art
            .iter_rows()
            .flatten()
            .map(|c| decode(*c).iter().filter(|on| **on).count())
            .sum();
        prop_assert_eq!(fb.lit_count(), dots * scale * scale);
    }

    /// Rendering is a pure function of its inputs.
    #[test]
    fn prop_render_is_deterministic(art in art_block(), scale in 1usize..5) {
        let config = RenderConfig::new(48, 32, scale).unwrap();
        prop_assert_eq!(rasterize(&art, &config).unwrap(), rasterize(&art, &config).unwrap());
    }
}

// =============================================================================
// Fixed art
// =============================================================================

#[test]
fn cross_first_lit_pixel_in_art_box() {
    let fb = render(&RenderConfig::default()).unwrap();
    assert_eq!(fb.len(), 3_686_400);
    let (x, y) = fb.first_lit().unwrap();
    assert!((584..696).contains(&x));
    assert!((280..440).contains(&y));
}

#[test]
fn cross_clips_on_tiny_canvas() {
    for (width, height, scale) in [(16, 16, 4), (100, 50, 16), (1, 1, 1), (1280, 720, 64)] {
        let config = RenderConfig::new(width, height, scale).unwrap();
        let fb = render(&config).unwrap();
        assert_eq!(fb.len(), width * height * 4);
        assert!(fb.pixels().all(|px| px == BLACK || px == WHITE));
    }
}

#[test]
fn written_artifacts_are_identical() {
    let dir = std::env::temp_dir().join(format!("bootscreen-idem-{}", std::process::id()));
    let (a, b) = (dir.join("a.raw"), dir.join("b.raw"));
    let config = RenderConfig::default();

    write_raw(&a, &render(&config).unwrap()).unwrap();
    let summary = write_raw(&b, &render(&config).unwrap()).unwrap();

    assert_eq!(summary.bytes, 3_686_400);
    assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
    fs::remove_dir_all(&dir).unwrap();
}
