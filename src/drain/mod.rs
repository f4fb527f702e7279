//! Draining consumers.
//!
//! Draining pulls the outermost stage until end-of-stream and gathers every
//! chunk it returned, in arrival order. Empty chunks contribute nothing.
//!
//! - [`drain`] - Concatenates all items into one `Vec`
//! - [`drain_bytes`] - Same, for byte pipelines, as [`Bytes`]
//! - [`drain_chunks`] - Keeps chunk boundaries, empty chunks included

use bytes::Bytes;

use crate::buffer;
use crate::chunk::Chunk;
use crate::error::Result;
use crate::source::ChunkSource;

/// Pulls `source` until it returns `None` and concatenates every chunk.
///
/// # Example
///
/// ```
/// use chunkpipe::{drain, SourceExt, sources::Counting};
///
/// let items = drain(Counting::new(0).take_while(|x| *x < 50).skip_while(|x| *x < 25)
///     .filter(|x| x % 3 == 0))?;
///
/// assert_eq!(items, vec![27, 30, 33, 36, 39, 42, 45, 48]);
/// # Ok::<(), chunkpipe::PipeError>(())
/// ```
pub fn drain<S: ChunkSource>(mut source: S) -> Result<Vec<S::Item>> {
    let mut items = Vec::new();
    while let Some(chunk) = source.next()? {
        buffer::extend(&mut items, chunk)?;
    }
    Ok(items)
}

/// Drains a byte pipeline into a single [`Bytes`] buffer.
pub fn drain_bytes<S>(source: S) -> Result<Bytes>
where
    S: ChunkSource<Item = u8>,
{
    drain(source).map(Bytes::from)
}

/// Drains `source` but keeps every chunk as it was returned.
///
/// Useful to observe how a pipeline shapes its output, including the empty
/// chunks that signal progress without data.
pub fn drain_chunks<S: ChunkSource>(mut source: S) -> Result<Vec<Chunk<S::Item>>> {
    let mut chunks = Vec::new();
    while let Some(chunk) = source.next()? {
        chunks.try_reserve(1)?;
        chunks.push(chunk);
    }
    Ok(chunks)
}
