//! Post-write summary of a splash artifact.

use core::fmt;
use std::path::PathBuf;

use crate::constants::BYTES_PER_PIXEL;

/// What was written, and where.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Summary {
    /// Path of the written file.
    pub path: PathBuf,
    /// Bytes written.
    pub bytes: usize,
    /// Size in mebibytes (`bytes / 1024 / 1024`).
    pub mebibytes: f64,
    /// Canvas width in pixels.
    pub width: usize,
    /// Canvas height in pixels.
    pub height: usize,
}

impl Summary {
    /// Builds a summary for a `width`×`height` image of `bytes` bytes.
    #[must_use]
    pub fn new(path: PathBuf, bytes: usize, width: usize, height: usize) -> Self {
        Self {
            path,
            bytes,
            mebibytes: bytes as f64 / 1024.0 / 1024.0,
            width,
            height,
        }
    }
}

/// Two lines: byte size, then pixel format.
///
/// ```text
/// Size: 3686400 bytes (3.52 MiB)
/// Format: 1280x720 RGBX (4 bytes per pixel)
/// ```
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Size: {} bytes ({:.2} MiB)", self.bytes, self.mebibytes)?;
        write!(
            f,
            "Format: {}x{} RGBX ({} bytes per pixel)",
            self.width, self.height, BYTES_PER_PIXEL
        )
    }
}
