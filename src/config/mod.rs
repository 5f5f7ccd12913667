//! Configuration for chunking behavior.
//!
//! - [`ChunkConfig`] - Controls the fixed chunk size
//!
//! # Example
//!
//! ```
//! use fixchunk::ChunkConfig;
//!
//! let config = ChunkConfig::new(4096)?;
//! assert_eq!(config.chunk_size(), 4096);
//!
//! // Zero is rejected rather than silently replaced by a default.
//! assert!(ChunkConfig::new(0).is_err());
//! # Ok::<(), fixchunk::ChunkError>(())
//! ```

use crate::error::ChunkError;

/// Default chunk size (64 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Configuration for fixed-size chunking.
///
/// Every chunk except the last one is exactly `chunk_size` bytes long; the
/// last one holds whatever remains (at least one byte).
///
/// # Size Constraints
///
/// Non-zero. There is no upper bound: read storage grows with the data
/// actually read, never past the source length.
///
/// # Example
///
/// ```
/// use fixchunk::ChunkConfig;
///
/// let config = ChunkConfig::default().with_chunk_size(1024);
/// assert!(config.validate().is_ok());
///
/// let config = ChunkConfig::default().with_chunk_size(0);
/// assert!(config.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkConfig {
    /// Chunk size in bytes.
    chunk_size: usize,
}

impl ChunkConfig {
    /// Creates a new configuration with the given chunk size.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] if `chunk_size` is zero.
    pub fn new(chunk_size: usize) -> Result<Self, ChunkError> {
        if chunk_size == 0 {
            return Err(ChunkError::InvalidConfig {
                message: "chunk size must be non-zero",
            });
        }

        Ok(Self { chunk_size })
    }

    /// Sets the chunk size.
    ///
    /// Note: This does not validate the configuration. Use [`ChunkConfig::validate`]
    /// to check if the configuration is valid.
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Returns the chunk size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), ChunkError> {
        Self::new(self.chunk_size).map(|_| ())
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChunkConfig::default();
        assert_eq!(config.chunk_size(), DEFAULT_CHUNK_SIZE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ChunkConfig::default().with_chunk_size(8192);
        assert_eq!(config.chunk_size(), 8192);
    }

    #[test]
    fn test_invalid_config_zero_size() {
        let result = ChunkConfig::new(0);
        assert!(matches!(result, Err(ChunkError::InvalidConfig { .. })));
    }

    #[test]
    fn test_huge_chunk_size_allowed() {
        assert!(ChunkConfig::new((1 << 30) + 1).is_ok());
        assert!(ChunkConfig::new(usize::MAX).is_ok());
    }

    #[test]
    fn test_one_byte_chunks_allowed() {
        assert_eq!(ChunkConfig::new(1).unwrap().chunk_size(), 1);
    }
}
