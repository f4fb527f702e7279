//! The Chunk type - one owned batch of items returned by a single pull.

use std::fmt;
use std::ops::Deref;

use bytes::Bytes;

use crate::buffer;
use crate::error::Result;

/// An owned, ordered, finite batch of items.
///
/// A chunk may be empty. An empty chunk is *not* end-of-stream: it means the
/// stage made progress but has nothing to hand out yet. End-of-stream is
/// signalled by `Ok(None)` from [`ChunkSource::next`](crate::ChunkSource::next).
///
/// `Chunk` derefs to `[T]`, so slice methods such as `len`, `iter` and
/// indexing are available directly.
///
/// # Example
///
/// ```
/// use chunkpipe::Chunk;
///
/// let mut chunk = Chunk::from(vec![1, 2, 3, 4]);
/// chunk.split_front(1);
/// chunk.truncate(2);
///
/// assert_eq!(&chunk[..], &[2, 3]);
/// assert_eq!(chunk.into_vec(), vec![2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chunk<T> {
    items: Vec<T>,
}

impl<T> Chunk<T> {
    /// Creates an empty chunk.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty chunk with room for `capacity` items.
    ///
    /// Fails with [`PipeError::Alloc`](crate::PipeError::Alloc) instead of
    /// aborting when the memory is not available.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            items: buffer::with_capacity(capacity)?,
        })
    }

    /// Appends an item.
    pub fn push(&mut self, item: T) -> Result<()> {
        self.items.try_reserve(1)?;
        self.items.push(item);
        Ok(())
    }

    /// Shortens the chunk to its first `len` items, dropping the rest.
    pub fn truncate(&mut self, len: usize) {
        self.items.truncate(len);
    }

    /// Drops the first `n` items in place.
    ///
    /// Dropping more items than the chunk holds empties it.
    pub fn split_front(&mut self, n: usize) {
        let n = n.min(self.items.len());
        self.items.drain(..n);
    }

    /// Keeps only the items for which `keep` returns `true`, in order.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.items.retain(keep);
    }

    /// Consumes the chunk and returns its items.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Chunk<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Chunk<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for Chunk<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> From<Chunk<T>> for Vec<T> {
    fn from(chunk: Chunk<T>) -> Self {
        chunk.items
    }
}

impl<T> FromIterator<T> for Chunk<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Chunk<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Chunk<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl From<Bytes> for Chunk<u8> {
    fn from(data: Bytes) -> Self {
        Self {
            items: data.to_vec(),
        }
    }
}

impl From<Chunk<u8>> for Bytes {
    fn from(chunk: Chunk<u8>) -> Self {
        Bytes::from(chunk.items)
    }
}

impl<T> fmt::Display for Chunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chunk({} items)", self.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let chunk: Chunk<u8> = Chunk::new();
        assert!(chunk.is_empty());
        assert_eq!(chunk, Chunk::default());
    }

    #[test]
    fn test_with_capacity() {
        let chunk: Chunk<u32> = Chunk::with_capacity(10).unwrap();
        assert!(chunk.is_empty());
        assert!(Chunk::<u64>::with_capacity(usize::MAX).is_err());
    }

    #[test]
    fn test_push() {
        let mut chunk = Chunk::new();
        chunk.push(1).unwrap();
        chunk.push(2).unwrap();
        assert_eq!(&chunk[..], &[1, 2]);
    }

    #[test]
    fn test_truncate() {
        let mut chunk = Chunk::from(vec![1, 2, 3]);
        chunk.truncate(1);
        assert_eq!(chunk.into_vec(), vec![1]);
    }

    #[test]
    fn test_split_front() {
        let mut chunk = Chunk::from(vec![1, 2, 3]);
        chunk.split_front(2);
        assert_eq!(&chunk[..], &[3]);

        chunk.split_front(5);
        assert!(chunk.is_empty());
    }

    #[test]
    fn test_retain_keeps_order() {
        let mut chunk: Chunk<u32> = (0..10).collect();
        chunk.retain(|x| x % 3 == 0);
        assert_eq!(&chunk[..], &[0, 3, 6, 9]);
    }

    #[test]
    fn test_bytes_conversion() {
        let chunk = Chunk::from(Bytes::from_static(b"hello"));
        assert_eq!(chunk.len(), 5);

        let bytes: Bytes = chunk.into();
        assert_eq!(bytes, Bytes::from_static(b"hello"));
    }

    #[test]
    fn test_display() {
        let chunk = Chunk::from(vec!['a', 'b']);
        assert_eq!(chunk.to_string(), "Chunk(2 items)");
    }
}
