//! Error type for [`GrowableArray`](super::GrowableArray) operations.

use thiserror::Error;

/// Errors reported by fallible [`GrowableArray`](super::GrowableArray)
/// operations.
///
/// Every operation that returns one of these leaves the container exactly as
/// it was before the call.
///
/// # Examples
///
/// ```rust
/// use growable_array::sequence::{GrowableArray, GrowableArrayError};
///
/// let error = GrowableArray::<i32>::with_capacity(0).unwrap_err();
/// assert_eq!(error, GrowableArrayError::InvalidCapacity { requested: 0 });
/// assert_eq!(format!("{error}"), "invalid capacity 0: capacity must be at least 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrowableArrayError {
    /// A capacity below 1 was requested at construction.
    #[error("invalid capacity {requested}: capacity must be at least 1")]
    InvalidCapacity {
        /// The rejected capacity.
        requested: usize,
    },

    /// An insertion index outside `0..=size` was supplied.
    #[error("index {index} out of range for insertion into array of size {size}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The number of live elements at the time of the call.
        size: usize,
    },

    /// The allocator refused a buffer of the requested capacity.
    #[error("failed to allocate buffer with capacity {requested_capacity}")]
    AllocationFailed {
        /// The capacity the grow attempted to allocate.
        requested_capacity: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_index_out_of_range_display() {
        let error = GrowableArrayError::IndexOutOfRange { index: 7, size: 3 };
        assert_eq!(
            error.to_string(),
            "index 7 out of range for insertion into array of size 3"
        );
    }

    #[rstest]
    fn test_allocation_failed_display() {
        let error = GrowableArrayError::AllocationFailed {
            requested_capacity: 64,
        };
        assert_eq!(
            error.to_string(),
            "failed to allocate buffer with capacity 64"
        );
    }

    #[rstest]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&GrowableArrayError::InvalidCapacity { requested: 0 });
    }
}
