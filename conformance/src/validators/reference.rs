//! Reference validator: the artifact must equal a fresh render.

use anyhow::{Context, Result};
use bootscreen::constants::BYTES_PER_PIXEL;
use bootscreen::{rasterize, ArtBlock, RenderConfig};

use crate::report::TestResult;

const VALIDATOR: &str = "reference";

/// Renders `art` with `config` in memory and compares it to the artifact
/// byte for byte.
///
/// # Errors
///
/// Returns an error if `config` is invalid and nothing can be rendered.
pub fn validate(bytes: &[u8], art: &ArtBlock, config: &RenderConfig) -> Result<TestResult> {
    let expected = rasterize(art, config).context("Failed to render reference image")?;
    let expected = expected.as_bytes();

    if bytes == expected {
        return Ok(TestResult::pass(VALIDATOR, "byte-identical to a fresh render"));
    }

    let message = match bytes.iter().zip(expected).position(|(a, b)| a != b) {
        Some(at) => {
            let pixel = at / BYTES_PER_PIXEL;
            format!(
                "first difference at byte {} (pixel {}, {})",
                at,
                pixel % config.width,
                pixel / config.width
            )
        }
        None => format!(
            "length differs: {} bytes, reference has {}",
            bytes.len(),
            expected.len()
        ),
    };
    Ok(TestResult::fail(VALIDATOR, message))
}
