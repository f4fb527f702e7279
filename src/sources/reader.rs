//! Reader-backed byte source.

use std::io::{ErrorKind, Read};

use crate::buffer;
use crate::chunk::Chunk;
use crate::config::{DEFAULT_READ_CAPACITY, SourceConfig};
use crate::error::Result;
use crate::source::ChunkSource;

/// Reads bytes from a [`std::io::Read`], up to `read_capacity` per chunk.
///
/// Every successful read becomes one chunk, so short reads produce short
/// chunks. A read returning zero bytes ends the stream and is never
/// retried. Reads interrupted by a signal are retried; any other I/O error
/// is returned and ends the stream.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use chunkpipe::{SourceExt, SourceConfig, sources::ReaderSource};
///
/// let config = SourceConfig::default().with_read_capacity(4);
/// let lines = ReaderSource::with_config(Cursor::new("a\nbb\nccc"), &config)?
///     .collate(*b"\n")
///     .drain()?;
///
/// assert_eq!(lines, vec![b"a".to_vec(), b"bb".to_vec(), b"ccc".to_vec()]);
/// # Ok::<(), chunkpipe::PipeError>(())
/// ```
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    capacity: usize,
    finished: bool,
}

impl<R: Read> ReaderSource<R> {
    /// Creates a source with the default read capacity.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            capacity: DEFAULT_READ_CAPACITY,
            finished: false,
        }
    }

    /// Creates a source with the read capacity of `config`.
    ///
    /// Returns error if `config` does not validate. A zero capacity would
    /// read nothing and end the stream on the first pull.
    pub fn with_config(reader: R, config: &SourceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reader,
            capacity: config.read_capacity(),
            finished: false,
        })
    }

    /// Consumes the source and returns the reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ChunkSource for ReaderSource<R> {
    type Item = u8;

    fn next(&mut self) -> Result<Option<Chunk<u8>>> {
        if self.finished {
            return Ok(None);
        }

        let mut buf = buffer::with_capacity(self.capacity)?;
        buf.resize(self.capacity, 0);

        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => {
                    log::debug!("reader: end of stream");
                    self.finished = true;
                    return Ok(None);
                }
                Ok(n) => {
                    buf.truncate(n);
                    return Ok(Some(buf.into()));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.finished = true;
                    return Err(e.into());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipeError;
    use std::io::{self, Cursor};

    /// Hands out at most `step` bytes per read and counts reads.
    struct Trickle {
        data: Vec<u8>,
        pos: usize,
        step: usize,
        reads: usize,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.reads += 1;
            let n = self.step.min(buf.len()).min(self.data.len() - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    #[test]
    fn test_reader_respects_capacity() {
        let config = SourceConfig::default().with_read_capacity(4);
        let mut source =
            ReaderSource::with_config(Cursor::new(b"0123456789".to_vec()), &config).unwrap();

        assert_eq!(&source.next().unwrap().unwrap()[..], b"0123");
        assert_eq!(&source.next().unwrap().unwrap()[..], b"4567");
        assert_eq!(&source.next().unwrap().unwrap()[..], b"89");
        assert!(source.next().unwrap().is_none());
    }

    #[test]
    fn test_reader_zero_capacity_rejected() {
        let config = SourceConfig::default().with_read_capacity(0);
        let err = ReaderSource::with_config(Cursor::new(b"hello".to_vec()), &config).unwrap_err();
        assert!(matches!(err, PipeError::InvalidConfig { .. }));
    }

    #[test]
    fn test_reader_forwards_partial_reads() {
        let trickle = Trickle {
            data: b"hello".to_vec(),
            pos: 0,
            step: 2,
            reads: 0,
        };
        let mut source = ReaderSource::new(trickle);

        assert_eq!(source.next().unwrap().unwrap().len(), 2);
        assert_eq!(source.next().unwrap().unwrap().len(), 2);
        assert_eq!(source.next().unwrap().unwrap().len(), 1);
        assert!(source.next().unwrap().is_none());
        assert!(source.next().unwrap().is_none());

        // One read per chunk plus the single zero-length read.
        assert_eq!(source.into_inner().reads, 4);
    }

    struct Interrupted {
        interrupted: bool,
    }

    impl Read for Interrupted {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::from(ErrorKind::Interrupted));
            }
            buf[0] = b'!';
            Ok(1)
        }
    }

    #[test]
    fn test_reader_retries_interrupted() {
        let mut source = ReaderSource::new(Interrupted { interrupted: false });
        assert_eq!(&source.next().unwrap().unwrap()[..], b"!");
    }

    #[test]
    fn test_reader_error_ends_stream() {
        struct Failing;
        impl Read for Failing {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(ErrorKind::PermissionDenied, "denied"))
            }
        }

        let mut source = ReaderSource::new(Failing);
        assert!(matches!(source.next(), Err(PipeError::Io(_))));
        assert!(source.next().unwrap().is_none());
    }
}
