//! Iterator adapter over a chunk source.

use crate::chunk::Chunk;
use crate::error::Result;

use super::ChunkSource;

/// An iterator that yields the chunks of a [`ChunkSource`].
///
/// Stops after the first `None` or the first error.
///
/// # Example
///
/// ```
/// use chunkpipe::{SourceExt, sources::Counting};
///
/// for chunk in Counting::new(0).take(20).chunks() {
///     let chunk = chunk?;
///     println!("{} items", chunk.len());
/// }
/// # Ok::<(), chunkpipe::PipeError>(())
/// ```
#[derive(Debug)]
pub struct ChunkIter<S> {
    source: S,
    finished: bool,
}

impl<S: ChunkSource> ChunkIter<S> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            source,
            finished: false,
        }
    }

    /// Consumes the iterator and returns the wrapped source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: ChunkSource> Iterator for ChunkIter<S> {
    type Item = Result<Chunk<S::Item>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match ChunkSource::next(&mut self.source) {
            Ok(Some(chunk)) => Some(Ok(chunk)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipeError;
    use crate::source::SourceExt;
    use crate::sources::{ChunkList, ReaderSource};
    use std::io::{self, Read};

    #[test]
    fn test_iterates_chunks_in_order() {
        let chunks: Vec<_> = ChunkList::new(vec![vec![1, 2], vec![], vec![3]])
            .chunks()
            .collect::<Result<Vec<_>>>()
            .unwrap();

        assert_eq!(chunks.len(), 3);
        assert!(chunks[1].is_empty());
        assert_eq!(&chunks[2][..], &[3]);
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("broken pipe"))
        }
    }

    #[test]
    fn test_stops_after_error() {
        let mut iter = ReaderSource::new(Broken).chunks();
        assert!(matches!(iter.next(), Some(Err(PipeError::Io(_)))));
        assert!(iter.next().is_none());
    }
}
