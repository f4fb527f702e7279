//! Configuration for leaf sources.
//!
//! Combinators never choose chunk sizes; they inherit whatever shape their
//! source produces. Only the leaf sources in [`crate::sources`] need to know
//! how many items to put in a chunk, and that is what [`SourceConfig`] holds.
//!
//! # Example
//!
//! ```
//! use chunkpipe::SourceConfig;
//!
//! let config = SourceConfig::new(16, 4096)?;
//! assert_eq!(config.batch_size(), 16);
//!
//! let config = SourceConfig::default().with_read_capacity(64 * 1024);
//! assert_eq!(config.read_capacity(), 64 * 1024);
//! # Ok::<(), chunkpipe::PipeError>(())
//! ```

use crate::error::{PipeError, Result};

/// Default number of items generated per chunk.
pub const DEFAULT_BATCH_SIZE: usize = 8;

/// Default maximum number of bytes read per chunk (1 KiB).
pub const DEFAULT_READ_CAPACITY: usize = 1024;

/// Chunk sizing for leaf sources.
///
/// - `batch_size` - items per chunk for the generators
///   ([`Counting`](crate::sources::Counting), [`Constant`](crate::sources::Constant),
///   [`IterSource`](crate::sources::IterSource))
/// - `read_capacity` - upper bound on bytes per chunk for
///   [`ReaderSource`](crate::sources::ReaderSource)
///
/// Both must be non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceConfig {
    batch_size: usize,
    read_capacity: usize,
}

impl SourceConfig {
    /// Creates a new configuration.
    ///
    /// Returns error if either size is zero.
    pub fn new(batch_size: usize, read_capacity: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(PipeError::InvalidConfig {
                message: "batch_size must be non-zero",
            });
        }

        if read_capacity == 0 {
            return Err(PipeError::InvalidConfig {
                message: "read_capacity must be non-zero",
            });
        }

        Ok(Self {
            batch_size,
            read_capacity,
        })
    }

    /// Sets the number of items per generated chunk.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    /// Sets the maximum number of bytes per read.
    pub fn with_read_capacity(mut self, capacity: usize) -> Self {
        self.read_capacity = capacity;
        self
    }

    /// Returns the number of items per generated chunk.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Returns the maximum number of bytes per read.
    pub fn read_capacity(&self) -> usize {
        self.read_capacity
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<()> {
        Self::new(self.batch_size, self.read_capacity).map(|_| ())
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            read_capacity: DEFAULT_READ_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_config_default() {
        let config = SourceConfig::default();
        assert_eq!(config.batch_size(), 8);
        assert_eq!(config.read_capacity(), 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_source_config_builder() {
        let config = SourceConfig::default()
            .with_batch_size(32)
            .with_read_capacity(8192);
        assert_eq!(config.batch_size(), 32);
        assert_eq!(config.read_capacity(), 8192);
    }

    #[test]
    fn test_source_config_invalid_zero() {
        assert!(SourceConfig::new(0, 1024).is_err());
        assert!(SourceConfig::new(8, 0).is_err());
    }

    #[test]
    fn test_validate_catches_builder_zero() {
        let config = SourceConfig::default().with_batch_size(0);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("batch_size"));
    }
}
