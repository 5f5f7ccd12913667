//! The Chunk type - an offset-tagged segment of a source.

use bytes::Bytes;
use std::fmt;

/// A fixed-size segment of a byte source with its starting offset.
///
/// The data is always an independent allocation: mutating a copy of one
/// chunk's bytes never affects another chunk.
///
/// Chunks produced by this crate are never empty and their offsets are
/// contiguous. Values built by hand through [`Chunk::new`] or the public
/// fields carry no such guarantee.
///
/// # Example
///
/// ```
/// use fixchunk::Chunk;
///
/// let chunk = Chunk::new(8, &b"IJ"[..]);
///
/// assert_eq!(chunk.len(), 2);
/// assert_eq!(chunk.range(), 8..10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The offset of the first byte within the original source.
    pub offset: u64,

    /// The chunk data.
    pub data: Bytes,
}

impl Chunk {
    /// Creates a new chunk at `offset`.
    pub fn new(offset: u64, data: impl Into<Bytes>) -> Self {
        Self {
            offset,
            data: data.into(),
        }
    }

    /// Creates a chunk that owns a fresh copy of `data`.
    pub(crate) fn copied(offset: u64, data: &[u8]) -> Self {
        Self {
            offset,
            data: Bytes::copy_from_slice(data),
        }
    }

    /// Returns the length of the chunk data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the chunk has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the chunk data.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns the start offset.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the end offset (exclusive).
    pub fn end(&self) -> u64 {
        self.offset + self.data.len() as u64
    }

    /// Returns the chunk as a range.
    pub fn range(&self) -> std::ops::Range<u64> {
        self.offset..self.end()
    }

    /// Consumes the chunk and returns the underlying data.
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chunk({} bytes @ {})", self.len(), self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let chunk = Chunk::new(0, &b"hello"[..]);
        assert_eq!(chunk.len(), 5);
        assert!(!chunk.is_empty());
        assert_eq!(chunk.offset(), 0);
    }

    #[test]
    fn test_empty() {
        let chunk = Chunk::new(0, &b""[..]);
        assert!(chunk.is_empty());
    }

    #[test]
    fn test_copied_does_not_alias_source() {
        let mut scratch = *b"ABCD";
        let chunk = Chunk::copied(0, &scratch);

        scratch.copy_from_slice(b"WXYZ");
        assert_eq!(&chunk.data[..], b"ABCD");
    }

    #[test]
    fn test_end() {
        let chunk = Chunk::new(100, &b"hello"[..]);
        assert_eq!(chunk.end(), 105);
    }

    #[test]
    fn test_range() {
        let chunk = Chunk::new(100, &b"hello"[..]);
        assert_eq!(chunk.range(), 100..105);
    }

    #[test]
    fn test_display() {
        let chunk = Chunk::new(100, &b"hello"[..]);
        let s = format!("{}", chunk);
        assert!(s.contains("5 bytes"));
        assert!(s.contains("@ 100"));
    }

    #[test]
    fn test_into_data() {
        let chunk = Chunk::new(4, vec![1u8, 2, 3]);
        assert_eq!(chunk.into_data(), Bytes::from_static(&[1, 2, 3]));
    }
}
