//! Core chunking engine - Chunker.
//!
//! [`Chunker`] holds a validated [`ChunkConfig`] and turns a file path or any
//! [`std::io::Read`] source into the complete, ordered list of chunks.
//!
//! # Example
//!
//! ```
//! use fixchunk::{ChunkConfig, Chunker};
//!
//! let chunker = Chunker::new(ChunkConfig::new(4)?);
//! let chunks = chunker.chunk_reader(&b"ABCDEFGHIJ"[..])?;
//!
//! let offsets: Vec<u64> = chunks.iter().map(|c| c.offset).collect();
//! assert_eq!(offsets, [0, 4, 8]);
//! # Ok::<(), fixchunk::ChunkError>(())
//! ```

use std::io::Read;
use std::path::Path;

use crate::chunk::Chunk;
use crate::chunker::iter::ChunkIter;
use crate::config::ChunkConfig;
use crate::error::ChunkError;
use crate::fs;

/// A chunker that splits byte sources into fixed-size chunks.
///
/// Each call is independent: it owns its source handle and scratch buffer
/// for the duration of the call, so one `Chunker` can be shared freely.
#[derive(Debug, Clone)]
pub struct Chunker {
    config: ChunkConfig,
}

impl Chunker {
    /// Creates a new chunker with the given configuration.
    pub fn new(config: ChunkConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Chunks the file at `path`.
    ///
    /// The file handle is opened here and closed when this call returns,
    /// after the last read. An empty file yields an empty `Vec`.
    ///
    /// # Errors
    ///
    /// - [`ChunkError::InvalidConfig`] if the configuration is invalid
    /// - [`ChunkError::Open`] if the path cannot be opened as a regular file
    /// - [`ChunkError::Read`] if reading fails part way; no chunks are returned
    pub fn chunk_file(&self, path: impl AsRef<Path>) -> Result<Vec<Chunk>, ChunkError> {
        self.config.validate()?;

        let path = path.as_ref();
        let file = fs::open(path)?;
        let chunks = self.collect(file)?;

        tracing::debug!(
            path = %path.display(),
            chunks = chunks.len(),
            chunk_size = self.config.chunk_size(),
            "chunked file"
        );
        Ok(chunks)
    }

    /// Chunks any sequential byte source.
    ///
    /// The reader is consumed from its current position; offsets are counted
    /// from there.
    ///
    /// # Example
    ///
    /// ```
    /// use fixchunk::{ChunkConfig, Chunker};
    /// use std::io::Cursor;
    ///
    /// let chunker = Chunker::new(ChunkConfig::new(100)?);
    /// let chunks = chunker.chunk_reader(Cursor::new(b"X"))?;
    ///
    /// assert_eq!(chunks.len(), 1);
    /// assert_eq!(&chunks[0].data[..], b"X");
    /// # Ok::<(), fixchunk::ChunkError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`ChunkError::InvalidConfig`] or [`ChunkError::Read`].
    pub fn chunk_reader<R: Read>(&self, reader: R) -> Result<Vec<Chunk>, ChunkError> {
        self.config.validate()?;
        self.collect(reader)
    }

    /// Runs the read loop to completion, dropping everything on error.
    fn collect<R: Read>(&self, reader: R) -> Result<Vec<Chunk>, ChunkError> {
        ChunkIter::new(reader, self.config).collect()
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(ChunkConfig::default())
    }
}

/// Splits the file at `path` into chunks of `chunk_size` bytes.
///
/// Shorthand for `Chunker::new(ChunkConfig::new(chunk_size)?).chunk_file(path)`.
///
/// # Example
///
/// ```no_run
/// let chunks = fixchunk::chunk_file("data.bin", 4096)?;
/// for chunk in &chunks {
///     println!("{}", chunk);
/// }
/// # Ok::<(), fixchunk::ChunkError>(())
/// ```
///
/// # Errors
///
/// [`ChunkError::InvalidConfig`] when `chunk_size` is zero, otherwise the
/// errors of [`Chunker::chunk_file`].
pub fn chunk_file(path: impl AsRef<Path>, chunk_size: usize) -> Result<Vec<Chunk>, ChunkError> {
    Chunker::new(ChunkConfig::new(chunk_size)?).chunk_file(path)
}
