//! Take - bounds a stream to a fixed number of items.

use std::cmp::Ordering;

use crate::chunk::Chunk;
use crate::error::Result;
use crate::source::ChunkSource;

/// Yields at most `count` items of the wrapped source.
///
/// Chunks pass through untouched until the quota is reached; the chunk that
/// crosses the quota is truncated and the stream ends with it.
///
/// Created by [`SourceExt::take`](crate::SourceExt::take).
#[derive(Debug)]
pub struct Take<S> {
    source: S,
    state: TakeState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TakeState {
    Active { remaining: usize },
    Exhausted,
}

impl<S: ChunkSource> Take<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        Self {
            source,
            state: TakeState::Active { remaining: count },
        }
    }

    /// Returns how many more items this stage may yield.
    pub fn remaining(&self) -> usize {
        match self.state {
            TakeState::Active { remaining } => remaining,
            TakeState::Exhausted => 0,
        }
    }
}

impl<S: ChunkSource> ChunkSource for Take<S> {
    type Item = S::Item;

    fn next(&mut self) -> Result<Option<Chunk<S::Item>>> {
        let remaining = match self.state {
            TakeState::Active { remaining } => remaining,
            TakeState::Exhausted => return Ok(None),
        };

        let Some(mut chunk) = self.source.next()? else {
            log::trace!("take: source exhausted with {} items left", remaining);
            self.state = TakeState::Exhausted;
            return Ok(None);
        };

        match chunk.len().cmp(&remaining) {
            Ordering::Less => {
                self.state = TakeState::Active {
                    remaining: remaining - chunk.len(),
                };
                Ok(Some(chunk))
            }
            Ordering::Equal => {
                log::trace!("take: quota reached on chunk boundary");
                self.state = TakeState::Exhausted;
                Ok(Some(chunk))
            }
            Ordering::Greater => {
                log::trace!("take: quota reached, truncating chunk to {}", remaining);
                self.state = TakeState::Exhausted;
                if remaining == 0 {
                    return Ok(None);
                }
                chunk.truncate(remaining);
                Ok(Some(chunk))
            }
        }
    }
}
