//! Record digests.
//!
//! - [`Digest`] - 32-byte BLAKE3 value of a record
//! - [`digest`] - One-shot hashing of a byte record
//!
//! Map a collated byte stream to its record digests:
//!
//! ```
//! use chunkpipe::{digest, SourceExt, sources::ChunkList};
//!
//! let digests = ChunkList::new(vec![b"a\nb\n".to_vec()])
//!     .collate(*b"\n")
//!     .map(|record| digest(&record))
//!     .drain()?;
//!
//! assert_eq!(digests, vec![digest(b"a"), digest(b"b")]);
//! # Ok::<(), chunkpipe::PipeError>(())
//! ```

mod blake3;

pub use self::blake3::{Digest, digest};
