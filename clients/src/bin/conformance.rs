//! `bootscreen-conformance`: validates a raw boot splash artifact.
//!
//! Runs the conformance suite against the artifact:
//! - size (width × height × 4 bytes)
//! - two-tone palette
//! - placement of ink inside the centered art rectangle
//! - byte equality with a fresh render
//!
//! **Usage:**
//! ```text
//! bootscreen-conformance [--artifact <path>]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use bootscreen::constants::OUTPUT_FILE;
use bootscreen::{ArtBlock, RenderConfig};
use bootscreen_conformance::{run_all, Severity};
use clap::Parser;

/// Run the boot splash conformance suite.
#[derive(Parser)]
#[command(
    name = "bootscreen-conformance",
    about = "Validate a boot splash framebuffer artifact"
)]
struct Args {
    /// Path to the raw framebuffer artifact.
    #[arg(long, default_value = OUTPUT_FILE)]
    artifact: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let art = ArtBlock::cross()?;
    let report = run_all(&args.artifact, &art, &RenderConfig::default())?;

    println!("Boot Splash Conformance Report");
    println!("==============================");
    println!();

    for result in &report.results {
        println!("{result}");
    }

    let failed = report.failure_count();
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
