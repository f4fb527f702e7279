//! Fallible buffer growth.
//!
//! Every buffer a stage builds goes through these helpers so that running
//! out of memory surfaces as [`PipeError::Alloc`](crate::PipeError::Alloc)
//! instead of aborting the process. It is an implementation detail and not
//! part of the public API.

use crate::error::Result;

/// Allocates an empty vector able to hold `capacity` items.
pub(crate) fn with_capacity<T>(capacity: usize) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)?;
    Ok(buf)
}

/// Appends `items` to `buf`, reserving room first.
pub(crate) fn extend<T>(buf: &mut Vec<T>, items: impl IntoIterator<Item = T>) -> Result<()> {
    let items = items.into_iter();
    buf.try_reserve(items.size_hint().0)?;
    buf.extend(items);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipeError;

    #[test]
    fn test_with_capacity() {
        let buf = with_capacity::<u64>(16).unwrap();
        assert!(buf.is_empty());
        assert!(buf.capacity() >= 16);
    }

    #[test]
    fn test_with_capacity_overflow() {
        let err = with_capacity::<u64>(usize::MAX).unwrap_err();
        assert!(matches!(err, PipeError::Alloc(_)));
    }

    #[test]
    fn test_extend_appends_in_order() {
        let mut buf = vec![1, 2];
        extend(&mut buf, vec![3, 4, 5]).unwrap();
        assert_eq!(buf, [1, 2, 3, 4, 5]);
    }
}
