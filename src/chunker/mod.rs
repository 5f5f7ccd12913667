//! Chunking engine for byte sources.
//!
//! - [`Chunker`] - Configured front end: `chunk_file()` / `chunk_reader()`
//! - `ChunkIter` - Internal fixed-size read loop

mod engine;
mod iter;

pub use engine::{Chunker, chunk_file};
