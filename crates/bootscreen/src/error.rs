//! Error type for building and writing a splash image.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building an art block, validating a render config, or
/// writing the framebuffer to disk.
///
/// Glyphs outside the braille block and pixels outside the canvas are not
/// errors: they are drawn blank and clipped respectively.
#[derive(Debug, Error)]
pub enum Error {
    /// The output file could not be created or written.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// Path of the file being written.
        path: PathBuf,
        /// Underlying platform error.
        #[source]
        source: io::Error,
    },

    /// An art row does not have the same glyph count as the first row.
    #[error("art row {row} has {found} glyphs, expected {expected}")]
    RaggedArt {
        /// Zero-based index of the offending row.
        row: usize,
        /// Glyph count of the first row.
        expected: usize,
        /// Glyph count of the offending row.
        found: usize,
    },

    /// The art block has no rows, or its rows are empty.
    #[error("art block is empty")]
    EmptyArt,

    /// A render config value is out of range.
    #[error("invalid render config: {0}")]
    InvalidConfig(&'static str),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
