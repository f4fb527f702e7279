//! Unbounded generators.

use std::iter;

use crate::buffer;
use crate::chunk::Chunk;
use crate::config::{DEFAULT_BATCH_SIZE, SourceConfig};
use crate::error::Result;
use crate::source::ChunkSource;

/// Counts upward from a start value, `batch_size` numbers per chunk.
///
/// The sequence ends only when `u64` runs out.
///
/// # Example
///
/// ```
/// use chunkpipe::{ChunkSource, sources::Counting};
///
/// let mut counting = Counting::new(10);
/// let chunk = counting.next()?.unwrap();
/// assert_eq!(&chunk[..], &[10, 11, 12, 13, 14, 15, 16, 17]);
/// # Ok::<(), chunkpipe::PipeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Counting {
    next: Option<u64>,
    batch_size: usize,
}

impl Counting {
    /// Counts from `start` with the default batch size.
    pub fn new(start: u64) -> Self {
        Self {
            next: Some(start),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Counts from `start` with the batch size of `config`.
    ///
    /// Returns error if `config` does not validate.
    pub fn with_config(start: u64, config: &SourceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            next: Some(start),
            batch_size: config.batch_size(),
        })
    }
}

impl ChunkSource for Counting {
    type Item = u64;

    fn next(&mut self) -> Result<Option<Chunk<u64>>> {
        let Some(start) = self.next else {
            return Ok(None);
        };

        let mut items = buffer::with_capacity(self.batch_size)?;
        match start.checked_add(self.batch_size as u64) {
            Some(end) => {
                items.extend(start..end);
                self.next = Some(end);
            }
            None => {
                log::debug!("counting: reached u64::MAX");
                items.extend(start..=u64::MAX);
                self.next = None;
            }
        }
        Ok(Some(items.into()))
    }
}

/// Repeats one value, `batch_size` copies per chunk, forever.
#[derive(Debug, Clone)]
pub struct Constant<T> {
    value: T,
    batch_size: usize,
}

impl<T: Clone> Constant<T> {
    /// Repeats `value` with the default batch size.
    pub fn new(value: T) -> Self {
        Self {
            value,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Repeats `value` with the batch size of `config`.
    ///
    /// Returns error if `config` does not validate.
    pub fn with_config(value: T, config: &SourceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            value,
            batch_size: config.batch_size(),
        })
    }
}

impl<T: Clone> ChunkSource for Constant<T> {
    type Item = T;

    fn next(&mut self) -> Result<Option<Chunk<T>>> {
        let mut items = buffer::with_capacity(self.batch_size)?;
        items.extend(iter::repeat_n(&self.value, self.batch_size).cloned());
        Ok(Some(items.into()))
    }
}

/// Emits the same literal pattern on every pull, forever.
///
/// The pattern is the chunk: an empty pattern yields empty chunks.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    pattern: Vec<T>,
}

impl<T: Clone> Repeat<T> {
    /// Creates a source re-emitting `pattern`.
    pub fn new(pattern: impl Into<Vec<T>>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl<T: Clone> ChunkSource for Repeat<T> {
    type Item = T;

    fn next(&mut self) -> Result<Option<Chunk<T>>> {
        let mut items = buffer::with_capacity(self.pattern.len())?;
        items.extend_from_slice(&self.pattern);
        Ok(Some(items.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipeError;

    #[test]
    fn test_counting_strictly_increasing() {
        let config = SourceConfig::default().with_batch_size(3);
        let mut counting = Counting::with_config(5, &config).unwrap();

        assert_eq!(counting.next().unwrap().unwrap().into_vec(), vec![5, 6, 7]);
        assert_eq!(counting.next().unwrap().unwrap().into_vec(), vec![8, 9, 10]);
    }

    #[test]
    fn test_counting_ends_at_u64_max() {
        let mut counting = Counting::new(u64::MAX - 2);

        let last = counting.next().unwrap().unwrap();
        assert_eq!(last.into_vec(), vec![u64::MAX - 2, u64::MAX - 1, u64::MAX]);
        assert!(counting.next().unwrap().is_none());
        assert!(counting.next().unwrap().is_none());
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let config = SourceConfig::default().with_batch_size(0);

        let err = Counting::with_config(0, &config).unwrap_err();
        assert!(matches!(err, PipeError::InvalidConfig { .. }));
        assert!(matches!(
            Constant::with_config('x', &config),
            Err(PipeError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_constant_with_config() {
        let config = SourceConfig::default().with_batch_size(2);
        let mut constant = Constant::with_config(7u8, &config).unwrap();
        assert_eq!(constant.next().unwrap().unwrap().into_vec(), vec![7, 7]);
    }

    #[test]
    fn test_constant() {
        let mut constant = Constant::new('x');
        for _ in 0..3 {
            assert_eq!(constant.next().unwrap().unwrap().into_vec(), vec!['x'; 8]);
        }
    }

    #[test]
    fn test_repeat() {
        let mut repeat = Repeat::new(*b"ab\n");
        assert_eq!(&repeat.next().unwrap().unwrap()[..], b"ab\n");
        assert_eq!(&repeat.next().unwrap().unwrap()[..], b"ab\n");
    }

    #[test]
    fn test_repeat_empty_pattern() {
        let mut repeat = Repeat::<u8>::new(Vec::new());
        assert!(repeat.next().unwrap().unwrap().is_empty());
    }
}
