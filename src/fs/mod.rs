//! File access: turns a path into an owned, sequentially readable handle.
//!
//! The returned [`File`] is moved into the read loop, so the descriptor stays
//! open for every read and is closed by `Drop` when the loop ends, on success
//! and error paths alike.

use std::fs::{File, Metadata};
use std::io::{self, ErrorKind};
use std::path::Path;

use crate::error::ChunkError;

/// Opens `path` for sequential reading, positioned at byte 0.
///
/// # Errors
///
/// Returns [`ChunkError::Open`] if the path cannot be opened or does not
/// refer to a regular file.
pub fn open(path: impl AsRef<Path>) -> Result<File, ChunkError> {
    let path = path.as_ref();

    // Checked before opening: opening a FIFO without a writer blocks.
    let metadata = std::fs::metadata(path).map_err(|e| ChunkError::open(path, e))?;
    ensure_regular(path, &metadata)?;

    let file = File::open(path).map_err(|e| ChunkError::open(path, e))?;
    // The path may have been swapped between the check and the open.
    let metadata = file.metadata().map_err(|e| ChunkError::open(path, e))?;
    ensure_regular(path, &metadata)?;

    tracing::debug!(path = %path.display(), size = metadata.len(), "opened source file");
    Ok(file)
}

fn ensure_regular(path: &Path, metadata: &Metadata) -> Result<(), ChunkError> {
    if metadata.is_file() {
        return Ok(());
    }
    Err(ChunkError::open(
        path,
        io::Error::new(ErrorKind::InvalidInput, "not a regular file"),
    ))
}
