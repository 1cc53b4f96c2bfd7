//! `bootscreen-preview`: prints the boot splash art to the terminal.
//!
//! By default prints the braille rows as the kernel echoes them on its serial
//! console. `--dots` prints the decoded dot grid instead, one character per
//! dot, which shows exactly what the rasterizer will draw.
//!
//! **Usage:**
//! ```text
//! bootscreen-preview [--dots]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{Context, Result};
use bootscreen::ArtBlock;
use clap::Parser;

/// Print the boot splash art.
#[derive(Parser)]
#[command(name = "bootscreen-preview", about = "Print the boot splash art")]
struct Args {
    /// Print the decoded dot grid (`#` raised, `.` flat) instead of braille.
    #[arg(long)]
    dots: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let art = ArtBlock::cross().context("Failed to load boot splash art")?;

    if args.dots {
        print!("{}", art.dot_matrix());
    } else {
        println!("{art}");
    }
    Ok(())
}
