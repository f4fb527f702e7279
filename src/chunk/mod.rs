//! Chunk types.
//!
//! - [`Chunk`] - Owned batch of items produced by one pull

mod data;

pub use data::Chunk;
