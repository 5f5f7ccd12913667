//! The read loop - ChunkIter.
//!
//! [`ChunkIter`] pulls fixed-size segments out of a [`std::io::Read`] source
//! and turns each one into an owned [`Chunk`] tagged with its offset.

use std::io::Read;

use crate::buffer::ReadBuffer;
use crate::chunk::Chunk;
use crate::config::ChunkConfig;
use crate::error::ChunkError;

/// An iterator that yields fixed-size chunks from a reader.
///
/// Segment boundaries depend only on byte count. Every chunk is exactly
/// `chunk_size` bytes except the last, which holds the remainder. No empty
/// chunk is ever produced, so a source whose length is a multiple of
/// `chunk_size` ends on a full chunk.
///
/// The iterator is fused: after end-of-input or the first error it yields
/// `None` forever.
pub(crate) struct ChunkIter<R> {
    reader: R,
    buffer: ReadBuffer,
    offset: u64,
    finished: bool,
}

impl<R: Read> ChunkIter<R> {
    /// Creates a new chunk iterator.
    ///
    /// `config` must already be validated.
    pub(crate) fn new(reader: R, config: ChunkConfig) -> Self {
        Self {
            reader,
            buffer: ReadBuffer::new(config.chunk_size()),
            offset: 0,
            finished: false,
        }
    }
}

impl<R: Read> Iterator for ChunkIter<R> {
    type Item = Result<Chunk, ChunkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let segment = match self.buffer.fill(&mut self.reader) {
            Ok(segment) => segment,
            Err(e) => {
                self.finished = true;
                return Some(Err(ChunkError::read(self.offset, e)));
            }
        };

        if segment.is_empty() {
            self.finished = true;
            return None;
        }

        // The scratch buffer is overwritten by the next fill; copy out.
        let chunk = Chunk::copied(self.offset, segment);
        if chunk.len() < self.buffer.segment_len() {
            // A short segment only happens at end-of-input.
            self.finished = true;
        }

        self.offset += chunk.len() as u64;

        Some(Ok(chunk))
    }
}

impl<R: Read> std::iter::FusedIterator for ChunkIter<R> {}
