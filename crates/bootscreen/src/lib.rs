//! Braille boot splash rasterizer.
//!
//! Turns a block of Unicode braille art into the raw framebuffer image the
//! kernel copies to the screen at boot. Each braille character carries a
//! 2×4 dot grid in the low eight bits of its codepoint; every raised dot
//! becomes a `scale`×`scale` white square on a black canvas.
//!
//! # Pipeline
//!
//! ```text
//! ArtBlock ──decode──▶ dots ──Layout::center──▶ pixels ──write_raw──▶ file
//!  10×14 glyphs        2×4 per glyph            1280×720 RGBX          3,686,400 bytes
//! ```
//!
//! # Output Format
//!
//! | Property | Value |
//! |----------|-------|
//! | Canvas | 1280 × 720 |
//! | Pixel | R, G, B, padding (4 bytes) |
//! | Order | row-major, top to bottom |
//! | Background | `00 00 00 00` |
//! | Ink | `FF FF FF 00` |
//! | Header | none |
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use bootscreen::{render, write_raw, RenderConfig};
//!
//! let fb = render(&RenderConfig::default())?;
//! let summary = write_raw(Path::new("cross_framebuffer.raw"), &fb)?;
//! println!("{summary}");
//! # Ok::<(), bootscreen::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod art;
pub mod config;
pub mod constants;
pub mod error;
pub mod framebuffer;
pub mod glyph;
pub mod layout;
pub mod raster;
pub mod summary;
pub mod writer;

pub use art::{ArtBlock, CROSS};
pub use config::RenderConfig;
pub use error::{Error, Result};
pub use framebuffer::{Framebuffer, Pixel, BLACK, WHITE};
pub use glyph::{decode, Glyph};
pub use layout::Layout;
pub use raster::{rasterize, render};
pub use summary::Summary;
pub use writer::write_raw;
