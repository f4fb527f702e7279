//! Skip - discards a fixed number of leading items.

use crate::chunk::Chunk;
use crate::error::Result;
use crate::source::ChunkSource;

/// Discards the first `count` items of the wrapped source.
///
/// While the quota lasts, fully skipped chunks come back as empty chunks so
/// the caller keeps pulling. Once the quota is spent every chunk passes
/// through without inspection.
///
/// Created by [`SourceExt::skip`](crate::SourceExt::skip).
#[derive(Debug)]
pub struct Skip<S> {
    source: S,
    state: SkipState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipState {
    Skipping { remaining: usize },
    PassingThrough,
    Exhausted,
}

impl<S: ChunkSource> Skip<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        let state = if count == 0 {
            SkipState::PassingThrough
        } else {
            SkipState::Skipping { remaining: count }
        };
        Self { source, state }
    }
}

impl<S: ChunkSource> ChunkSource for Skip<S> {
    type Item = S::Item;

    fn next(&mut self) -> Result<Option<Chunk<S::Item>>> {
        if self.state == SkipState::Exhausted {
            return Ok(None);
        }

        let Some(mut chunk) = self.source.next()? else {
            log::trace!("skip: source exhausted");
            self.state = SkipState::Exhausted;
            return Ok(None);
        };

        if let SkipState::Skipping { remaining } = self.state {
            if chunk.len() <= remaining {
                let remaining = remaining - chunk.len();
                self.state = if remaining == 0 {
                    SkipState::PassingThrough
                } else {
                    SkipState::Skipping { remaining }
                };
                return Ok(Some(Chunk::new()));
            }

            chunk.split_front(remaining);
            self.state = SkipState::PassingThrough;
        }

        Ok(Some(chunk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceExt;
    use crate::sources::{ChunkList, Counting};

    #[test]
    fn test_skip_emits_empty_while_skipping() {
        let mut skip = Counting::new(0).skip(20);

        assert!(skip.next().unwrap().unwrap().is_empty());
        assert_eq!(skip.state, SkipState::Skipping { remaining: 12 });
        assert!(skip.next().unwrap().unwrap().is_empty());
        assert_eq!(skip.state, SkipState::Skipping { remaining: 4 });

        let straddling = skip.next().unwrap().unwrap();
        assert_eq!(&straddling[..], &[20, 21, 22, 23]);
        assert_eq!(skip.state, SkipState::PassingThrough);

        assert_eq!(skip.next().unwrap().unwrap()[0], 24);
    }

    #[test]
    fn test_skip_exact_chunk() {
        let mut skip = Counting::new(0).skip(8);
        assert!(skip.next().unwrap().unwrap().is_empty());
        assert_eq!(skip.state, SkipState::PassingThrough);
        assert_eq!(skip.next().unwrap().unwrap()[0], 8);
    }

    #[test]
    fn test_skip_zero_passes_through() {
        let skip = ChunkList::new(vec![vec![1, 2], vec![3]]).skip(0);
        assert_eq!(skip.state, SkipState::PassingThrough);
        assert_eq!(skip.drain().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_skip_past_end() {
        let mut skip = ChunkList::new(vec![vec![1, 2], vec![3]]).skip(10);
        assert!(skip.next().unwrap().unwrap().is_empty());
        assert!(skip.next().unwrap().unwrap().is_empty());
        assert!(skip.next().unwrap().is_none());
        assert_eq!(skip.state, SkipState::Exhausted);
        assert!(skip.next().unwrap().is_none());
    }
}
