//! Chunk types.
//!
//! - [`Chunk`] - Offset-tagged, independently owned segment of a source

mod data;

pub use data::Chunk;
