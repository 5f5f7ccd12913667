//! fixchunk
//!
//! Fixed-size chunking of files for Rust.
//!
//! `fixchunk` splits a file into an ordered list of byte chunks, each tagged
//! with the offset of its first byte. It is a small building block for:
//!
//! - hashing files piecewise
//! - diffing or comparing files by block
//! - streaming large files in bounded units
//!
//! The crate intentionally:
//! - does NOT decide what happens to chunks
//! - does NOT use content-defined boundaries
//! - does NOT manage concurrency
//! - does NOT resume partially read files
//!
//! It only does one thing: **Read bytes → yield chunks**
//!
//! # Guarantees
//!
//! For a successful call with chunk size `S`:
//!
//! - chunks are contiguous: `chunks[i].end() == chunks[i + 1].offset`
//! - every chunk but the last is exactly `S` bytes; the last is `1..=S`
//! - concatenating all chunk data reproduces the source exactly
//! - every chunk owns its bytes; none alias the internal read buffer
//!
//! Any open or read failure returns an error and no chunks.
//!
//! # Example
//!
//! ```no_run
//! use fixchunk::{ChunkConfig, ChunkError, Chunker};
//!
//! fn main() -> Result<(), ChunkError> {
//!     let chunker = Chunker::new(ChunkConfig::new(4096)?);
//!
//!     for chunk in chunker.chunk_file("data.bin")? {
//!         println!("chunk {} bytes at {}", chunk.len(), chunk.offset);
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod chunker;
mod config;
mod error;

pub mod fs;

mod buffer; // internal scratch buffer

//
// Public surface (intentionally tiny)
//

pub use chunk::Chunk;
pub use chunker::{Chunker, chunk_file};
pub use config::{ChunkConfig, DEFAULT_CHUNK_SIZE};
pub use error::ChunkError;
