//! Segment-sized scratch buffer filled from a reader.

use std::io::{self, Read};

/// A reusable byte buffer holding at most one segment.
///
/// Storage grows on demand up to the segment length, so a huge segment
/// length over a small source only costs what the source actually holds.
pub struct ReadBuffer {
    data: Vec<u8>,
    segment_len: usize,
}

impl ReadBuffer {
    /// Creates an empty buffer for segments of `segment_len` bytes.
    pub fn new(segment_len: usize) -> Self {
        Self {
            data: Vec::new(),
            segment_len,
        }
    }

    /// Returns the segment length this buffer fills up to.
    pub fn segment_len(&self) -> usize {
        self.segment_len
    }

    /// Reads the next segment from `reader`.
    ///
    /// Keeps reading until the segment is full or the reader reports
    /// end-of-input, so short reads never shorten a segment and
    /// `ErrorKind::Interrupted` is retried. Returns the filled prefix, which
    /// is empty only at end-of-input.
    ///
    /// On error the bytes read so far are discarded with the rest of the run.
    pub fn fill<R: Read>(&mut self, reader: &mut R) -> io::Result<&[u8]> {
        self.data.clear();
        Read::take(&mut *reader, self.segment_len as u64).read_to_end(&mut self.data)?;

        Ok(&self.data)
    }
}
