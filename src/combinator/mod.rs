//! Chunk combinators.
//!
//! Each combinator wraps a [`ChunkSource`](crate::ChunkSource), pulls from it
//! only when it is itself pulled, and hands the caller an owned chunk. Chunk
//! boundaries of the wrapped source are preserved wherever the combinator
//! does not need to cut them.
//!
//! - Bounding: [`Take`], [`Skip`], [`TakeWhile`], [`SkipWhile`]
//! - Transformation: [`Filter`], [`Map`], [`TryMap`], [`FlatMap`]
//! - Records: [`Collate`], [`Join`]
//!
//! Once a combinator returns `None` it stays exhausted and never pulls its
//! source again.

mod collate;
mod filter;
mod flat_map;
mod join;
mod map;
mod skip;
mod skip_while;
mod take;
mod take_while;

pub use collate::Collate;
pub use filter::Filter;
pub use flat_map::FlatMap;
pub use join::Join;
pub use map::{Map, TryMap};
pub use skip::Skip;
pub use skip_while::SkipWhile;
pub use take::Take;
pub use take_while::TakeWhile;

/// Lifecycle of a combinator with no other latch.
///
/// Transitions only from `Active` to `Exhausted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    Active,
    Exhausted,
}
