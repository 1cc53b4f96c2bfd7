//! Artifact size validator.

use bootscreen::RenderConfig;

use crate::report::TestResult;

const VALIDATOR: &str = "size";

/// Checks that the artifact is exactly `width × height × 4` bytes.
pub fn validate(bytes: &[u8], config: &RenderConfig) -> TestResult {
    let expected = config.framebuffer_len();
    if bytes.len() == expected {
        TestResult::pass(
            VALIDATOR,
            format!(
                "{} bytes = {}x{} RGBX",
                expected, config.width, config.height
            ),
        )
    } else {
        TestResult::fail(
            VALIDATOR,
            format!(
                "{} bytes, expected {} for {}x{} RGBX",
                bytes.len(),
                expected,
                config.width,
                config.height
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_size_passes() {
        let config = RenderConfig::new(2, 2, 1).unwrap();
        assert!(!validate(&[0; 16], &config).is_failure());
    }

    #[test]
    fn short_or_long_fails() {
        let config = RenderConfig::new(2, 2, 1).unwrap();
        assert!(validate(&[0; 15], &config).is_failure());
        assert!(validate(&[0; 17], &config).is_failure());
        assert!(validate(&[], &config).is_failure());
    }
}
