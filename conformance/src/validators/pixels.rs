//! Pixel palette validator.
//!
//! The splash is strictly two-tone: every 4-byte pixel is either background
//! (`00 00 00 00`) or ink (`FF FF FF 00`).

use bootscreen::constants::BYTES_PER_PIXEL;
use bootscreen::{BLACK, WHITE};

use super::MAX_DETAILS;
use crate::report::TestResult;

const VALIDATOR: &str = "pixels";

/// Checks that every pixel is black or white, with zero padding.
pub fn validate(bytes: &[u8]) -> TestResult {
    let mut stray = 0usize;
    let mut details = Vec::new();

    for (index, px) in bytes.chunks(BYTES_PER_PIXEL).enumerate() {
        if px == BLACK || px == WHITE {
            continue;
        }
        stray += 1;
        if details.len() < MAX_DETAILS {
            details.push(format!(
                "pixel {} at byte {}: {:02x?}",
                index,
                index * BYTES_PER_PIXEL,
                px
            ));
        }
    }

    if stray == 0 {
        let lit = bytes
            .chunks(BYTES_PER_PIXEL)
            .filter(|px| *px == WHITE)
            .count();
        TestResult::pass(VALIDATOR, format!("two-tone, {lit} lit pixels"))
    } else {
        TestResult::fail(VALIDATOR, format!("{stray} pixels are neither black nor white"))
            .with_details(details)
    }
}
