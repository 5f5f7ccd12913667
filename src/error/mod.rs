//! Error types for fixchunk.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during chunking operations.
///
/// Every variant aborts the whole operation: no partial chunk list is ever
/// returned alongside an error.
#[derive(Debug, Error)]
pub enum ChunkError {
    /// The source path could not be opened for reading.
    ///
    /// Covers missing files, permission failures and paths that are not
    /// regular files (directories, sockets, devices).
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying cause.
        #[source]
        source: io::Error,
    },

    /// Invalid configuration parameter.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// An I/O error occurred while reading content from an opened source.
    #[error("read failed at offset {offset}: {source}")]
    Read {
        /// Offset of the first byte of the segment being read.
        offset: u64,
        /// The underlying cause.
        #[source]
        source: io::Error,
    },
}

impl ChunkError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChunkError::Open {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn read(offset: u64, source: io::Error) -> Self {
        ChunkError::Read { offset, source }
    }
}
