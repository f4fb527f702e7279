//! Error types for chunkpipe.

use std::collections::TryReserveError;

use thiserror::Error;

/// Result alias used by every stage of a pipeline.
pub type Result<T> = std::result::Result<T, PipeError>;

/// Errors that can occur while pulling from a pipeline.
///
/// Allocation failure is the only error a combinator produces itself. The
/// other variants come from leaf sources and configuration.
#[derive(Debug, Error)]
pub enum PipeError {
    /// Growing a chunk or buffer failed.
    #[error("allocation failed: {0}")]
    Alloc(#[from] TryReserveError),

    /// An I/O error occurred while reading input data.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration parameter.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: PipeError = io_err.into();
        assert!(matches!(err, PipeError::Io(_)));
    }

    #[test]
    fn test_alloc_error_conversion() {
        let reserve_err = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        let err: PipeError = reserve_err.into();
        assert!(matches!(err, PipeError::Alloc(_)));
        assert!(err.to_string().starts_with("allocation failed"));
    }

    #[test]
    fn test_display() {
        let err = PipeError::InvalidConfig {
            message: "batch_size must be non-zero",
        };
        assert_eq!(err.to_string(), "invalid config: batch_size must be non-zero");
    }
}
