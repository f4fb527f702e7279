//! FlatMap - expands each item into a nested source and drains it.

use std::vec;

use crate::chunk::Chunk;
use crate::error::Result;
use crate::source::ChunkSource;

use super::State;

/// Expands every outer item into a nested [`ChunkSource`] and yields the
/// nested chunks, one nested stream after another.
///
/// Each pull does at most one unit of work:
///
/// 1. refill the buffered outer chunk if it is used up,
/// 2. open a nested stream for the next outer item if none is active,
/// 3. pull once from the active nested stream.
///
/// When the nested stream ends it is released and an empty chunk is
/// returned so the caller pulls again. The full output is the concatenation,
/// in outer order, of every nested stream drained to its end.
///
/// Use [`BoxSource`](crate::BoxSource) as `N` when the nested source type
/// varies between items.
///
/// Created by [`SourceExt::flat_map`](crate::SourceExt::flat_map).
pub struct FlatMap<S, F, N>
where
    S: ChunkSource,
{
    source: S,
    expand: F,
    batch: vec::IntoIter<S::Item>,
    current: Option<N>,
    state: State,
}

impl<S, F, N> FlatMap<S, F, N>
where
    S: ChunkSource,
    N: ChunkSource,
    F: FnMut(S::Item) -> Result<N>,
{
    pub(crate) fn new(source: S, expand: F) -> Self {
        Self {
            source,
            expand,
            batch: Vec::new().into_iter(),
            current: None,
            state: State::Active,
        }
    }
}

impl<S, F, N> ChunkSource for FlatMap<S, F, N>
where
    S: ChunkSource,
    N: ChunkSource,
    F: FnMut(S::Item) -> Result<N>,
{
    type Item = N::Item;

    fn next(&mut self) -> Result<Option<Chunk<N::Item>>> {
        if self.state == State::Exhausted {
            return Ok(None);
        }

        let nested = match self.current.as_mut() {
            Some(nested) => nested,
            None => {
                if self.batch.as_slice().is_empty() {
                    let Some(chunk) = self.source.next()? else {
                        log::trace!("flat_map: outer source exhausted");
                        self.state = State::Exhausted;
                        return Ok(None);
                    };
                    self.batch = chunk.into_iter();
                }

                let Some(item) = self.batch.next() else {
                    // Empty outer chunk, nothing to expand yet.
                    return Ok(Some(Chunk::new()));
                };
                self.current.insert((self.expand)(item)?)
            }
        };

        match nested.next()? {
            Some(chunk) => Ok(Some(chunk)),
            None => {
                log::trace!("flat_map: nested stream exhausted, advancing outer item");
                self.current = None;
                Ok(Some(Chunk::new()))
            }
        }
    }
}
