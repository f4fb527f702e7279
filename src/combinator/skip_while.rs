//! SkipWhile - discards the longest prefix satisfying a predicate.

use crate::chunk::Chunk;
use crate::error::Result;
use crate::source::ChunkSource;

/// Discards items while `predicate` holds, then passes everything through.
///
/// The predicate is never consulted again after the first failing item,
/// even if later items would satisfy it.
///
/// Created by [`SourceExt::skip_while`](crate::SourceExt::skip_while).
pub struct SkipWhile<S, P> {
    source: S,
    predicate: P,
    state: SkipWhileState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipWhileState {
    Skipping,
    PassingThrough,
    Exhausted,
}

impl<S, P> SkipWhile<S, P>
where
    S: ChunkSource,
    P: FnMut(&S::Item) -> bool,
{
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self {
            source,
            predicate,
            state: SkipWhileState::Skipping,
        }
    }
}

impl<S, P> ChunkSource for SkipWhile<S, P>
where
    S: ChunkSource,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Result<Option<Chunk<S::Item>>> {
        if self.state == SkipWhileState::Exhausted {
            return Ok(None);
        }

        let Some(mut chunk) = self.source.next()? else {
            self.state = SkipWhileState::Exhausted;
            return Ok(None);
        };

        if self.state == SkipWhileState::Skipping {
            let predicate = &mut self.predicate;
            let failed = chunk.iter().position(|item| !predicate(item));
            match failed {
                Some(start) => {
                    log::trace!("skip_while: unlocked at index {}", start);
                    chunk.split_front(start);
                    self.state = SkipWhileState::PassingThrough;
                }
                None => return Ok(Some(Chunk::new())),
            }
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
    fn test_skip_while_unlocks_once() {
        let mut stage = Counting::new(0).skip_while(|x| *x < 10);

        assert!(stage.next().unwrap().unwrap().is_empty());
        assert_eq!(stage.state, SkipWhileState::Skipping);

        let first = stage.next().unwrap().unwrap();
        assert_eq!(&first[..], &[10, 11, 12, 13, 14, 15]);
        assert_eq!(stage.state, SkipWhileState::PassingThrough);
    }

    #[test]
    fn test_skip_while_latch_never_resets() {
        let items = ChunkList::new(vec![vec![1, 2, 7, 3], vec![1, 8]])
            .skip_while(|x| *x < 5)
            .drain()
            .unwrap();
        assert_eq!(items, vec![7, 3, 1, 8]);
    }

    #[test]
    fn test_skip_while_all_skipped() {
        let mut stage = ChunkList::new(vec![vec![1, 2]]).skip_while(|_| true);
        assert!(stage.next().unwrap().unwrap().is_empty());
        assert!(stage.next().unwrap().is_none());
        assert_eq!(stage.state, SkipWhileState::Exhausted);
        assert!(stage.next().unwrap().is_none());
    }
}
