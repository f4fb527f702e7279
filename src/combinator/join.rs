//! Join - flattens chunks of sequences.

use crate::buffer;
use crate::chunk::Chunk;
use crate::error::Result;
use crate::source::ChunkSource;

use super::State;

/// Concatenates the sub-sequences of every pulled chunk into one flat chunk.
///
/// One chunk in, one chunk out: chunk boundaries of the source are kept,
/// only the nesting inside each chunk is removed.
///
/// Created by [`SourceExt::join`](crate::SourceExt::join).
#[derive(Debug)]
pub struct Join<S> {
    source: S,
    state: State,
}

impl<S> Join<S>
where
    S: ChunkSource,
    S::Item: IntoIterator,
{
    pub(crate) fn new(source: S) -> Self {
        Self {
            source,
            state: State::Active,
        }
    }
}

impl<S> ChunkSource for Join<S>
where
    S: ChunkSource,
    S::Item: IntoIterator,
{
    type Item = <S::Item as IntoIterator>::Item;

    fn next(&mut self) -> Result<Option<Chunk<Self::Item>>> {
        if self.state == State::Exhausted {
            return Ok(None);
        }

        let Some(chunk) = self.source.next()? else {
            self.state = State::Exhausted;
            return Ok(None);
        };

        let mut flat = Vec::new();
        for part in chunk {
            buffer::extend(&mut flat, part)?;
        }
        Ok(Some(flat.into()))
    }
}
