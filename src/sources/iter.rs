//! In-memory sources.

use std::vec;

use crate::buffer;
use crate::chunk::Chunk;
use crate::config::{DEFAULT_BATCH_SIZE, SourceConfig};
use crate::error::Result;
use crate::source::ChunkSource;

/// Batches the items of an iterator into chunks of `batch_size`.
///
/// The last chunk may be shorter. The stream ends the first time the
/// iterator yields nothing, and the iterator is not polled after that.
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iter: I,
    batch_size: usize,
    finished: bool,
}

impl<I: Iterator> IterSource<I> {
    /// Batches `iter` with the default batch size.
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iter: iter.into_iter(),
            batch_size: DEFAULT_BATCH_SIZE,
            finished: false,
        }
    }

    /// Batches `iter` with the batch size of `config`.
    ///
    /// Returns error if `config` does not validate.
    pub fn with_config(
        iter: impl IntoIterator<IntoIter = I>,
        config: &SourceConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            iter: iter.into_iter(),
            batch_size: config.batch_size(),
            finished: false,
        })
    }
}

impl<I: Iterator> ChunkSource for IterSource<I> {
    type Item = I::Item;

    fn next(&mut self) -> Result<Option<Chunk<I::Item>>> {
        if self.finished {
            return Ok(None);
        }

        let mut items = buffer::with_capacity(self.batch_size)?;
        items.extend(self.iter.by_ref().take(self.batch_size));
        if items.is_empty() {
            self.finished = true;
            return Ok(None);
        }
        Ok(Some(items.into()))
    }
}

/// Replays a fixed list of chunks exactly as given, then ends.
///
/// Empty entries are returned as empty chunks, which makes this the source
/// of choice for exercising chunk-boundary behaviour.
///
/// # Example
///
/// ```
/// use chunkpipe::{ChunkSource, sources::ChunkList};
///
/// let mut list = ChunkList::new(vec![vec![1, 2], vec![]]);
/// assert_eq!(list.next()?.unwrap().len(), 2);
/// assert!(list.next()?.unwrap().is_empty());
/// assert!(list.next()?.is_none());
/// # Ok::<(), chunkpipe::PipeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ChunkList<T> {
    chunks: vec::IntoIter<Vec<T>>,
}

impl<T> ChunkList<T> {
    /// Creates a source replaying `chunks` in order.
    pub fn new(chunks: Vec<Vec<T>>) -> Self {
        Self {
            chunks: chunks.into_iter(),
        }
    }
}

impl<T> ChunkSource for ChunkList<T> {
    type Item = T;

    fn next(&mut self) -> Result<Option<Chunk<T>>> {
        Ok(self.chunks.next().map(Chunk::from))
    }
}
