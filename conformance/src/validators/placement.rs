//! Placement validator: ink only inside the centered art rectangle.

use bootscreen::constants::BYTES_PER_PIXEL;
use bootscreen::{ArtBlock, Layout, RenderConfig, BLACK};

use super::MAX_DETAILS;
use crate::report::TestResult;

const VALIDATOR: &str = "placement";

/// Checks that every non-black pixel lies inside the art rectangle centered
/// on the canvas, clipped to the canvas edges.
///
/// Skipped with a warning when the artifact has the wrong size, since pixel
/// coordinates are then meaningless.
pub fn validate(bytes: &[u8], art: &ArtBlock, config: &RenderConfig) -> TestResult {
    if bytes.len() != config.framebuffer_len() {
        return TestResult::warn(VALIDATOR, "skipped: artifact size does not match canvas");
    }

    let layout = Layout::center(art.rows(), art.columns(), config);
    let visible = layout.visible(config);

    let mut outside = 0usize;
    let mut first_lit = None;
    let mut details = Vec::new();

    for (index, px) in bytes.chunks_exact(BYTES_PER_PIXEL).enumerate() {
        if px == BLACK {
            continue;
        }
        let (x, y) = (index % config.width, index / config.width);
        first_lit.get_or_insert((x, y));

        let inside = visible
            .as_ref()
            .is_some_and(|(xs, ys)| xs.contains(&x) && ys.contains(&y));
        if !inside {
            outside += 1;
            if details.len() < MAX_DETAILS {
                details.push(format!("lit pixel at ({x}, {y})"));
            }
        }
    }

    let bounds = match &visible {
        Some((xs, ys)) => format!("[{}, {})x[{}, {})", xs.start, xs.end, ys.start, ys.end),
        None => "off-canvas".to_string(),
    };

    if outside > 0 {
        return TestResult::fail(
            VALIDATOR,
            format!("{outside} lit pixels outside art rectangle {bounds}"),
        )
        .with_details(details);
    }

    match first_lit {
        Some((x, y)) => TestResult::pass(
            VALIDATOR,
            format!("first lit pixel ({x}, {y}) inside {bounds}"),
        ),
        None => TestResult::warn(VALIDATOR, "no lit pixels"),
    }
}
