//! Writes a framebuffer to disk as a raw image.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::summary::Summary;

/// Writes the framebuffer's bytes verbatim to `path`, replacing any existing
/// file and creating parent directories as needed.
///
/// The output has no header: it is exactly `width × height × 4` bytes.
///
/// # Errors
///
/// Returns [`Error::Io`] if a directory cannot be created or the file cannot
/// be created or written. A failed write may leave a truncated file behind.
pub fn write_raw(path: &Path, fb: &Framebuffer) -> Result<Summary> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    {
        let mut file = File::create(path).map_err(io_err)?;
        file.write_all(fb.as_bytes()).map_err(io_err)?;
        file.flush().map_err(io_err)?;
    }

    Ok(Summary::new(
        path.to_path_buf(),
        fb.len(),
        fb.width(),
        fb.height(),
    ))
}
