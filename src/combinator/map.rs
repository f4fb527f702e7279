//! Map and TryMap - 1:1 item transforms.

use crate::buffer;
use crate::chunk::Chunk;
use crate::error::Result;
use crate::source::ChunkSource;

use super::State;

/// Applies `transform` to every item, preserving length and order.
///
/// The output element type may differ from the input. The pulled chunk is
/// consumed; each item is moved into `transform`.
///
/// Created by [`SourceExt::map`](crate::SourceExt::map).
pub struct Map<S, F> {
    source: S,
    transform: F,
    state: State,
}

impl<S, F, U> Map<S, F>
where
    S: ChunkSource,
    F: FnMut(S::Item) -> U,
{
    pub(crate) fn new(source: S, transform: F) -> Self {
        Self {
            source,
            transform,
            state: State::Active,
        }
    }
}

impl<S, F, U> ChunkSource for Map<S, F>
where
    S: ChunkSource,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Result<Option<Chunk<U>>> {
        if self.state == State::Exhausted {
            return Ok(None);
        }

        let Some(chunk) = self.source.next()? else {
            self.state = State::Exhausted;
            return Ok(None);
        };

        let mut out = buffer::with_capacity(chunk.len())?;
        out.extend(chunk.into_iter().map(&mut self.transform));
        Ok(Some(out.into()))
    }
}

/// Applies a fallible `transform` to every item.
///
/// Like [`Map`], but `transform` may itself allocate and report
/// [`PipeError::Alloc`](crate::PipeError::Alloc). The first error aborts the
/// chunk: the items already transformed and the items not yet visited are
/// dropped before the error is returned.
///
/// Created by [`SourceExt::try_map`](crate::SourceExt::try_map).
pub struct TryMap<S, F> {
    source: S,
    transform: F,
    state: State,
}

impl<S, F, U> TryMap<S, F>
where
    S: ChunkSource,
    F: FnMut(S::Item) -> Result<U>,
{
    pub(crate) fn new(source: S, transform: F) -> Self {
        Self {
            source,
            transform,
            state: State::Active,
        }
    }
}

impl<S, F, U> ChunkSource for TryMap<S, F>
where
    S: ChunkSource,
    F: FnMut(S::Item) -> Result<U>,
{
    type Item = U;

    fn next(&mut self) -> Result<Option<Chunk<U>>> {
        if self.state == State::Exhausted {
            return Ok(None);
        }

        let Some(chunk) = self.source.next()? else {
            self.state = State::Exhausted;
            return Ok(None);
        };

        let mut out = buffer::with_capacity(chunk.len())?;
        for item in chunk {
            out.push((self.transform)(item)?);
        }
        Ok(Some(out.into()))
    }
}
