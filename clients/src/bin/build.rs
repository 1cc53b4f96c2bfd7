//! `bootscreen-build`: rasterizes the boot splash cross and writes the raw
//! framebuffer image the kernel links in.
//!
//! **Output:**
//! - `<out>` (default `cross_framebuffer.raw`): 1280×720 RGBX, no header
//!
//! **Usage:**
//! ```text
//! bootscreen-build [--out <path>] [--json]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use bootscreen::constants::OUTPUT_FILE;
use bootscreen::{render, write_raw, RenderConfig};
use clap::Parser;

/// Build the boot splash framebuffer image.
#[derive(Parser)]
#[command(name = "bootscreen-build", about = "Build the boot splash framebuffer image")]
struct Args {
    /// Output file for the raw framebuffer.
    #[arg(long, default_value = OUTPUT_FILE)]
    out: PathBuf,

    /// Print the summary as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = RenderConfig::default();

    let fb = render(&config).context("Failed to rasterize boot splash")?;
    let summary = write_raw(&args.out, &fb)?;

    if args.json {
        let json = serde_json::to_string_pretty(&summary)
            .context("Failed to serialize summary to JSON")?;
        println!("{json}");
    } else {
        println!("{summary}");
    }
    Ok(())
}
