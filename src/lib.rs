//! chunkpipe
//!
//! Composable, pull-based stream combinators over owned chunks of items.
//!
//! A pipeline is a stack of stages. The leaf produces chunks; every stage
//! above it pulls from the one below, reshapes what it gets and hands an
//! owned chunk to its caller. Nothing runs until the outermost stage is
//! pulled, so unbounded sources are fine as long as something bounds them.
//!
//! - bounding: `take`, `skip`, `take_while`, `skip_while`
//! - transformation: `filter`, `map`, `try_map`, `flat_map`
//! - records: `collate` (split on a separator), `join` (flatten)
//! - consumption: [`drain`], [`SourceExt::chunks`]
//!
//! The crate intentionally:
//! - does NOT run stages in parallel
//! - does NOT seek or offer random access
//! - does NOT signal backpressure beyond the synchronous pull
//! - does NOT persist anything
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
//!
//! # Records from a reader
//!
//! ```no_run
//! use std::fs::File;
//! use chunkpipe::{PipeError, SourceExt, sources::ReaderSource};
//!
//! fn main() -> Result<(), PipeError> {
//!     let file = File::open("data.log")?;
//!     for batch in ReaderSource::new(file).collate(*b"\n").chunks() {
//!         for line in batch? {
//!             println!("{} bytes", line.len());
//!         }
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod config;
mod drain;
mod error;
mod source;

mod buffer; // internal fallible allocation

pub mod combinator;
pub mod sources;

#[cfg(feature = "hash-blake3")]
mod hash;

//
// Public surface
//

pub use chunk::Chunk;
pub use config::{DEFAULT_BATCH_SIZE, DEFAULT_READ_CAPACITY, SourceConfig};
pub use drain::{drain, drain_bytes, drain_chunks};
pub use error::{PipeError, Result};
pub use source::{BoxSource, ChunkIter, ChunkSource, SourceExt};

#[cfg(feature = "hash-blake3")]
pub use hash::{Digest, digest};
