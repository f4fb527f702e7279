//! The chunk source contract and its extension methods.
//!
//! - [`ChunkSource`] - One pull: `next()` returns a chunk, or `None` at end-of-stream
//! - [`SourceExt`] - Combinator constructors available on every source
//! - [`ChunkIter`] - Adapts a source into a standard [`Iterator`]
//!
//! # Example
//!
//! ```
//! use chunkpipe::{SourceExt, sources::Counting};
//!
//! let items = Counting::new(0)
//!     .filter(|x| x % 3 == 0)
//!     .skip(4)
//!     .take(4)
//!     .drain()?;
//!
//! assert_eq!(items, vec![12, 15, 18, 21]);
//! # Ok::<(), chunkpipe::PipeError>(())
//! ```

mod iter;

pub use iter::ChunkIter;

use crate::chunk::Chunk;
use crate::combinator::{
    Collate, Filter, FlatMap, Join, Map, Skip, SkipWhile, Take, TakeWhile, TryMap,
};
use crate::error::Result;

/// A pull-based producer of chunks.
///
/// Every stage of a pipeline, leaf or combinator, implements this trait.
///
/// # Contract
///
/// - `Ok(Some(chunk))` while the stream continues. The chunk may be empty,
///   which means "nothing to hand out yet, call again".
/// - `Ok(None)` once the stream is exhausted, and on every call after that.
/// - `Err(_)` only for allocation failure or a failing leaf (I/O). Errors are
///   never retried by combinators.
///
/// The returned chunk is owned by the caller.
pub trait ChunkSource {
    /// The element type of the chunks this source produces.
    type Item;

    /// Pulls the next chunk.
    fn next(&mut self) -> Result<Option<Chunk<Self::Item>>>;
}

impl<S: ChunkSource + ?Sized> ChunkSource for &mut S {
    type Item = S::Item;

    fn next(&mut self) -> Result<Option<Chunk<Self::Item>>> {
        (**self).next()
    }
}

impl<S: ChunkSource + ?Sized> ChunkSource for Box<S> {
    type Item = S::Item;

    fn next(&mut self) -> Result<Option<Chunk<Self::Item>>> {
        (**self).next()
    }
}

/// A type-erased, heap-allocated source.
///
/// Useful as the nested stream of [`SourceExt::flat_map`] when the concrete
/// source type depends on the outer item.
pub type BoxSource<'a, T> = Box<dyn ChunkSource<Item = T> + 'a>;

/// Combinator constructors for every [`ChunkSource`].
///
/// Each method wraps `self` in a new stage; nothing is pulled until the
/// outermost stage is asked for its next chunk.
pub trait SourceExt: ChunkSource + Sized {
    /// Yields at most `count` items.
    fn take(self, count: usize) -> Take<Self> {
        Take::new(self, count)
    }

    /// Discards the first `count` items.
    fn skip(self, count: usize) -> Skip<Self> {
        Skip::new(self, count)
    }

    /// Yields items while `predicate` holds, then ends the stream.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Discards items while `predicate` holds, then passes everything through.
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    /// Keeps only the items for which `predicate` holds.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Transforms every item 1:1.
    fn map<U, F>(self, transform: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, transform)
    }

    /// Transforms every item 1:1 with a transform that may fail to allocate.
    fn try_map<U, F>(self, transform: F) -> TryMap<Self, F>
    where
        F: FnMut(Self::Item) -> Result<U>,
    {
        TryMap::new(self, transform)
    }

    /// Expands every item into a nested source and drains each in turn.
    fn flat_map<N, F>(self, expand: F) -> FlatMap<Self, F, N>
    where
        N: ChunkSource,
        F: FnMut(Self::Item) -> Result<N>,
    {
        FlatMap::new(self, expand)
    }

    /// Reassembles the stream into records delimited by `separator`.
    fn collate(self, separator: impl Into<Vec<Self::Item>>) -> Collate<Self>
    where
        Self::Item: PartialEq,
    {
        Collate::new(self, separator)
    }

    /// Flattens chunks of sequences into chunks of their items.
    fn join(self) -> Join<Self>
    where
        Self::Item: IntoIterator,
    {
        Join::new(self)
    }

    /// Pulls until end-of-stream and concatenates everything.
    fn drain(self) -> Result<Vec<Self::Item>> {
        crate::drain::drain(self)
    }

    /// Turns this source into an [`Iterator`] over its chunks.
    fn chunks(self) -> ChunkIter<Self> {
        ChunkIter::new(self)
    }

    /// Erases the concrete type of this source.
    fn boxed<'a>(self) -> BoxSource<'a, Self::Item>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

impl<S: ChunkSource> SourceExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{ChunkList, Counting};

    #[test]
    fn test_mut_ref_is_a_source() {
        let mut counting = Counting::new(0);
        let first = (&mut counting).take(3).drain().unwrap();
        assert_eq!(first, vec![0, 1, 2]);

        // The borrowed source keeps its position.
        let next = counting.next().unwrap().unwrap();
        assert_eq!(next[0], 8);
    }

    #[test]
    fn test_boxed_source() {
        let mut boxed: BoxSource<'_, u32> = ChunkList::new(vec![vec![1, 2], vec![3]]).boxed();
        assert_eq!(boxed.next().unwrap().unwrap().into_vec(), vec![1, 2]);
        assert_eq!(boxed.next().unwrap().unwrap().into_vec(), vec![3]);
        assert!(boxed.next().unwrap().is_none());
    }
}
