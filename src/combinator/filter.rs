//! Filter - keeps the items satisfying a predicate.

use crate::chunk::Chunk;
use crate::error::Result;
use crate::source::ChunkSource;

use super::State;

/// Keeps the items for which `predicate` holds, in their original order.
///
/// A chunk where every item is rejected comes back empty, not as
/// end-of-stream. Filtering happens in place on the pulled chunk.
///
/// Created by [`SourceExt::filter`](crate::SourceExt::filter).
pub struct Filter<S, P> {
    source: S,
    predicate: P,
    state: State,
}

impl<S, P> Filter<S, P>
where
    S: ChunkSource,
    P: FnMut(&S::Item) -> bool,
{
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self {
            source,
            predicate,
            state: State::Active,
        }
    }
}

impl<S, P> ChunkSource for Filter<S, P>
where
    S: ChunkSource,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Result<Option<Chunk<S::Item>>> {
        if self.state == State::Exhausted {
            return Ok(None);
        }

        match self.source.next()? {
            Some(mut chunk) => {
                chunk.retain(&mut self.predicate);
                Ok(Some(chunk))
            }
            None => {
                self.state = State::Exhausted;
                Ok(None)
            }
        }
    }
}
