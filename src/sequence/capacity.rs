//! Capacity arithmetic for [`GrowableArray`](super::GrowableArray).
//!
//! The buffer doubles when it is full and halves once it is at most one-third
//! occupied. The gap between the two thresholds keeps a sequence of
//! alternating appends and deletions at one boundary from reallocating on
//! every call.

/// Capacity used by [`GrowableArray::new`](super::GrowableArray::new).
pub const DEFAULT_CAPACITY: usize = 10;

/// Multiplier applied on grow.
const GROWTH_FACTOR: usize = 2;

/// Divisor applied on shrink.
const SHRINK_FACTOR: usize = 2;

/// A shrink is considered once `size <= capacity / SHRINK_THRESHOLD_DIVISOR`.
const SHRINK_THRESHOLD_DIVISOR: usize = 3;

/// Growth and shrink rules for a buffer of a given capacity.
///
/// All functions are pure; the container decides when to call them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapacityPolicy;

impl CapacityPolicy {
    /// Returns `true` if a buffer holding `size` elements must grow before
    /// accepting another one.
    #[inline]
    #[must_use]
    pub const fn needs_growth(size: usize, capacity: usize) -> bool {
        size >= capacity
    }

    /// Returns the capacity after a grow, or `None` on arithmetic overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use growable_array::sequence::CapacityPolicy;
    ///
    /// assert_eq!(CapacityPolicy::grown(5), Some(10));
    /// assert_eq!(CapacityPolicy::grown(usize::MAX), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn grown(capacity: usize) -> Option<usize> {
        capacity.checked_mul(GROWTH_FACTOR)
    }

    /// Returns `true` if a buffer left with `size` elements after a removal
    /// is sparse enough to shrink.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use growable_array::sequence::CapacityPolicy;
    ///
    /// assert!(CapacityPolicy::should_shrink(3, 10));
    /// assert!(!CapacityPolicy::should_shrink(4, 10));
    /// ```
    #[inline]
    #[must_use]
    pub const fn should_shrink(size: usize, capacity: usize) -> bool {
        size <= capacity / SHRINK_THRESHOLD_DIVISOR
    }

    /// Returns the capacity after a shrink.
    ///
    /// Halves `capacity`, clamped to `max(size, capacity / 2, 1)`. Returns
    /// `None` when the clamped value would not be strictly smaller than
    /// `capacity`, meaning no reallocation should take place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use growable_array::sequence::CapacityPolicy;
    ///
    /// assert_eq!(CapacityPolicy::shrunk(3, 10), Some(5));
    /// assert_eq!(CapacityPolicy::shrunk(0, 2), Some(1));
    /// assert_eq!(CapacityPolicy::shrunk(0, 1), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn shrunk(size: usize, capacity: usize) -> Option<usize> {
        let halved = (capacity / SHRINK_FACTOR).max(size).max(1);
        (halved < capacity).then_some(halved)
    }
}
