//! Collate - reassembles a raw item stream into delimited records.
//!
//! Records rarely line up with the chunks a source produces. `Collate`
//! keeps the items seen since the last separator in an accumulation buffer
//! and searches the *buffer*, not just the newest chunk, so a separator
//! split across two chunks is still found.
//!
//! Scanning resumes `separator.len() - 1` items before the end of the old
//! buffer: the retained fragment never holds a complete separator, so
//! anything earlier has already been ruled out.

use crate::buffer;
use crate::chunk::Chunk;
use crate::error::Result;
use crate::source::ChunkSource;

use super::State;

/// Splits the stream into records on every occurrence of `separator`.
///
/// Each pull returns a batch of zero or more completed records, in order.
/// Consecutive separators produce empty records. When the source ends, a
/// non-empty leftover is emitted as one final record; a stream ending in a
/// separator produces no trailing empty record.
///
/// An empty separator never matches, so the whole stream becomes a single
/// record at end-of-stream.
///
/// An allocation failure while cutting records aborts the pull. Every record
/// completed by that pull has already been removed from the pending buffer,
/// so those records are dropped together with the returned
/// [`PipeError::Alloc`](crate::PipeError::Alloc). A pipeline that sees an
/// error should be abandoned; pulling again does not recover them.
///
/// Created by [`SourceExt::collate`](crate::SourceExt::collate).
///
/// # Example
///
/// ```
/// use chunkpipe::{SourceExt, sources::ChunkList};
///
/// let records = ChunkList::new(vec![b"ab\nc".to_vec(), b"d\n\ne".to_vec()])
///     .collate(*b"\n")
///     .drain()?;
///
/// assert_eq!(records, vec![b"ab".to_vec(), b"cd".to_vec(), vec![], b"e".to_vec()]);
/// # Ok::<(), chunkpipe::PipeError>(())
/// ```
#[derive(Debug)]
pub struct Collate<S>
where
    S: ChunkSource,
{
    source: S,
    separator: Vec<S::Item>,
    pending: Vec<S::Item>,
    state: State,
}

impl<S> Collate<S>
where
    S: ChunkSource,
    S::Item: PartialEq,
{
    pub(crate) fn new(source: S, separator: impl Into<Vec<S::Item>>) -> Self {
        Self {
            source,
            separator: separator.into(),
            pending: Vec::new(),
            state: State::Active,
        }
    }

    /// Returns the number of items waiting for a separator.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Splits every complete record off the front of the pending buffer.
    fn split_records(&mut self, scan_from: usize) -> Result<Chunk<Vec<S::Item>>> {
        let sep_len = self.separator.len();
        if sep_len == 0 {
            return Ok(Chunk::new());
        }

        let mut ends: Vec<usize> = Vec::new();
        let mut at = scan_from;
        while let Some(pos) = find(&self.pending[at..], &self.separator) {
            ends.try_reserve(1)?;
            ends.push(at + pos);
            at += pos + sep_len;
        }

        let Some(&last) = ends.last() else {
            return Ok(Chunk::new());
        };

        let mut records = Chunk::with_capacity(ends.len())?;
        let mut drained = self.pending.drain(..last + sep_len);
        let mut start = 0;
        for end in ends {
            let mut record = buffer::with_capacity(end - start)?;
            record.extend(drained.by_ref().take(end - start));
            drained.by_ref().take(sep_len).for_each(drop);
            records.push(record)?;
            start = end + sep_len;
        }

        Ok(records)
    }
}

impl<S> ChunkSource for Collate<S>
where
    S: ChunkSource,
    S::Item: PartialEq,
{
    type Item = Vec<S::Item>;

    fn next(&mut self) -> Result<Option<Chunk<Vec<S::Item>>>> {
        if self.state == State::Exhausted {
            return Ok(None);
        }

        let Some(chunk) = self.source.next()? else {
            if self.pending.is_empty() {
                self.state = State::Exhausted;
                return Ok(None);
            }

            log::debug!("collate: flushing final record of {} items", self.pending.len());
            let mut last = Chunk::with_capacity(1)?;
            last.push(std::mem::take(&mut self.pending))?;
            self.state = State::Exhausted;
            return Ok(Some(last));
        };

        let scan_from = self
            .pending
            .len()
            .saturating_sub(self.separator.len().saturating_sub(1));
        buffer::extend(&mut self.pending, chunk)?;

        self.split_records(scan_from).map(Some)
    }
}

fn find<T: PartialEq>(haystack: &[T], needle: &[T]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}
