//! Leaf sources.
//!
//! These sit at the bottom of a pipeline and produce chunks without pulling
//! from anything else.
//!
//! - [`Counting`] - Strictly increasing `u64` sequence, unbounded
//! - [`Constant`] - One value repeated, unbounded
//! - [`Repeat`] - One literal pattern re-emitted every pull, unbounded
//! - [`ReaderSource`] - Bytes from any [`std::io::Read`]
//! - [`IterSource`] - Any iterator, batched
//! - [`ChunkList`] - An explicit list of chunks, replayed as given

mod generate;
mod iter;
mod reader;

pub use generate::{Constant, Counting, Repeat};
pub use iter::{ChunkList, IterSource};
pub use reader::ReaderSource;
