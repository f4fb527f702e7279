//! TakeWhile - yields the longest prefix satisfying a predicate.

use crate::chunk::Chunk;
use crate::error::Result;
use crate::source::ChunkSource;

use super::State;

/// Yields items while `predicate` holds.
///
/// The chunk containing the first failing item is cut just before it and
/// returned as the final chunk, which may be empty.
///
/// Created by [`SourceExt::take_while`](crate::SourceExt::take_while).
pub struct TakeWhile<S, P> {
    source: S,
    predicate: P,
    state: State,
}

impl<S, P> TakeWhile<S, P>
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

impl<S, P> ChunkSource for TakeWhile<S, P>
where
    S: ChunkSource,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Result<Option<Chunk<S::Item>>> {
        if self.state == State::Exhausted {
            return Ok(None);
        }

        let Some(mut chunk) = self.source.next()? else {
            self.state = State::Exhausted;
            return Ok(None);
        };

        let predicate = &mut self.predicate;
        let failed = chunk.iter().position(|item| !predicate(item));
        if let Some(end) = failed {
            log::trace!("take_while: predicate failed at index {}", end);
            chunk.truncate(end);
            self.state = State::Exhausted;
        }

        Ok(Some(chunk))
    }
}
