//! Boot splash artifact conformance suite.
//!
//! Validates a written raw framebuffer against the invariants the kernel
//! relies on when it copies the file straight into video memory.
//!
//! # Conformance Scope
//!
//! | Validator | Invariant |
//! |-----------|-----------|
//! | `artifact` | the file exists |
//! | `size` | exactly width × height × 4 bytes |
//! | `pixels` | every pixel is `00 00 00 00` or `FF FF FF 00` |
//! | `placement` | ink only inside the centered art rectangle |
//! | `reference` | byte-identical to a fresh render |
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::Path;
//! use bootscreen::{ArtBlock, RenderConfig};
//! use bootscreen_conformance::run_all;
//!
//! let art = ArtBlock::cross()?;
//! let report = run_all(Path::new("cross_framebuffer.raw"), &art, &RenderConfig::default())?;
//! assert!(report.all_passed());
//! # Ok::<(), anyhow::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod report;
pub mod validators;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bootscreen::{ArtBlock, RenderConfig};

pub use report::{ConformanceReport, Severity, TestResult};

/// Runs all validators against the artifact at `artifact`.
///
/// Validators run in this order:
/// 1. Size
/// 2. Pixel palette
/// 3. Placement
/// 4. Reference render
///
/// A missing artifact yields a report with a single `artifact` failure.
///
/// # Errors
///
/// Returns an error if the artifact exists but cannot be read, or if
/// `config` is invalid.
pub fn run_all(
    artifact: &Path,
    art: &ArtBlock,
    config: &RenderConfig,
) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    if !artifact.exists() {
        report.push(TestResult::fail(
            "artifact",
            format!("{} not found", artifact.display()),
        ));
        return Ok(report);
    }

    let bytes =
        fs::read(artifact).with_context(|| format!("Failed to read {}", artifact.display()))?;

    report.push(validators::size::validate(&bytes, config));
    report.push(validators::pixels::validate(&bytes));
    report.push(validators::placement::validate(&bytes, art, config));
    report.push(validators::reference::validate(&bytes, art, config)?);

    Ok(report)
}
