//! Contiguous ordered sequence that grows and shrinks with its contents.
//!
//! This module provides [`GrowableArray`], a container backed by a single
//! owned buffer of slots. The first `len()` slots hold the elements in
//! positional order; the remaining slots are unused.
//!
//! # Overview
//!
//! - Appending to a full buffer doubles its capacity, so a run of N appends
//!   moves O(N) elements in total (amortized O(1) per append).
//! - Removing an element shifts its successors left; once the buffer is at
//!   most one-third full the capacity is halved (never below 1).
//! - Search and deletion compare with [`PartialEq`] only; no ordering or
//!   hashing is required of `T`.
//!
//! # Examples
//!
//! ```rust
//! use growable_array::sequence::GrowableArray;
//!
//! let mut array = GrowableArray::with_capacity(2).unwrap();
//! array.append("b");
//! array.append("c");
//! array.insert_at(0, "a").unwrap();
//!
//! assert_eq!(array.capacity(), 4);
//! assert_eq!(array.search(&"c"), Some(2));
//! assert_eq!(format!("{array}"), "[a, b, c]");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};

use super::capacity::{CapacityPolicy, DEFAULT_CAPACITY};
use super::error::GrowableArrayError;

// =============================================================================
// Buffer Allocation
// =============================================================================

/// Allocates `capacity` unused slots, reporting allocator refusal instead of
/// aborting.
fn allocate_slots<T>(capacity: usize) -> Result<Vec<Option<T>>, GrowableArrayError> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| GrowableArrayError::AllocationFailed {
            requested_capacity: capacity,
        })?;
    slots.resize_with(capacity, || None);
    Ok(slots)
}

// =============================================================================
// GrowableArray Definition
// =============================================================================

/// A growable, contiguous ordered sequence.
///
/// # Time Complexity
///
/// | Operation         | Complexity             |
/// |-------------------|------------------------|
/// | `append`          | amortized O(1)         |
/// | `insert_at`       | O(N - index)           |
/// | `delete_by_value` | O(N)                   |
/// | `search`          | O(N)                   |
/// | `get`             | O(1)                   |
/// | `len`, `is_empty` | O(1)                   |
///
/// # Examples
///
/// ```rust
/// use growable_array::sequence::GrowableArray;
///
/// let array: GrowableArray<i32> = (1..=5).collect();
/// assert_eq!(array.len(), 5);
/// assert_eq!(array.get(2), Some(&3));
/// ```
#[derive(Clone)]
pub struct GrowableArray<T> {
    /// Number of live elements, stored in `storage[..size]`
    size: usize,
    /// Slot buffer; its length is the capacity
    storage: Box<[Option<T>]>,
}

impl<T> GrowableArray<T> {
    /// Creates an empty array with [`DEFAULT_CAPACITY`] slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use growable_array::sequence::{GrowableArray, DEFAULT_CAPACITY};
    ///
    /// let array: GrowableArray<i32> = GrowableArray::new();
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), DEFAULT_CAPACITY);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            size: 0,
            storage: std::iter::repeat_with(|| None)
                .take(DEFAULT_CAPACITY)
                .collect(),
        }
    }

    /// Creates an empty array with exactly `capacity` slots.
    ///
    /// # Errors
    ///
    /// - [`GrowableArrayError::InvalidCapacity`] if `capacity` is 0.
    /// - [`GrowableArrayError::AllocationFailed`] if the buffer cannot be
    ///   allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use growable_array::sequence::{GrowableArray, GrowableArrayError};
    ///
    /// let array: GrowableArray<i32> = GrowableArray::with_capacity(5).unwrap();
    /// assert_eq!(array.capacity(), 5);
    ///
    /// assert_eq!(
    ///     GrowableArray::<i32>::with_capacity(0).unwrap_err(),
    ///     GrowableArrayError::InvalidCapacity { requested: 0 }
    /// );
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, GrowableArrayError> {
        if capacity == 0 {
            return Err(GrowableArrayError::InvalidCapacity {
                requested: capacity,
            });
        }
        Ok(Self {
            size: 0,
            storage: allocate_slots(capacity)?.into_boxed_slice(),
        })
    }

    /// Returns the number of live elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns the number of allocated slots, occupied or not.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the array holds no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use growable_array::sequence::GrowableArray;
    ///
    /// let mut array = GrowableArray::new();
    /// assert!(array.is_empty());
    ///
    /// array.append(1);
    /// assert!(!array.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The occupied prefix of the buffer.
    #[inline]
    fn live_slots(&self) -> &[Option<T>] {
        &self.storage[..self.size]
    }

    /// Returns a reference to the element at `index`, or `None` if
    /// `index >= len()`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.live_slots().get(index).and_then(Option::as_ref)
    }

    /// Returns the first element, if any.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the last element, if any.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.size.checked_sub(1).and_then(|index| self.get(index))
    }

    /// Returns an iterator over the elements in positional order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use growable_array::sequence::GrowableArray;
    ///
    /// let array: GrowableArray<i32> = (1..=3).collect();
    /// let doubled: Vec<i32> = array.iter().map(|element| element * 2).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    #[inline]
    pub fn iter(&self) -> GrowableArrayIterator<'_, T> {
        GrowableArrayIterator {
            slots: self.live_slots().iter(),
        }
    }

    /// Appends `element` at the end, doubling the capacity first if the
    /// buffer is full.
    ///
    /// # Panics
    ///
    /// Panics if the grown buffer cannot be allocated. Use
    /// [`try_append`](Self::try_append) to handle that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use growable_array::sequence::GrowableArray;
    ///
    /// let mut array = GrowableArray::with_capacity(1).unwrap();
    /// array.append('a');
    /// array.append('b');
    /// assert_eq!(array.len(), 2);
    /// assert_eq!(array.capacity(), 2);
    /// ```
    pub fn append(&mut self, element: T) {
        if let Err(error) = self.try_append(element) {
            panic!("{error}");
        }
    }

    /// Appends `element` at the end, reporting allocation failure instead of
    /// panicking.
    ///
    /// # Errors
    ///
    /// Returns [`GrowableArrayError::AllocationFailed`] if the buffer is full
    /// and a larger one cannot be allocated. The array is left unchanged.
    pub fn try_append(&mut self, element: T) -> Result<(), GrowableArrayError> {
        if CapacityPolicy::needs_growth(self.size, self.capacity()) {
            self.grow()?;
        }
        self.storage[self.size] = Some(element);
        self.size += 1;
        Ok(())
    }

    /// Inserts `element` at `index`, shifting the elements at `index..len()`
    /// one slot to the right.
    ///
    /// # Errors
    ///
    /// - [`GrowableArrayError::IndexOutOfRange`] if `index > len()`.
    /// - [`GrowableArrayError::AllocationFailed`] if the buffer is full and a
    ///   larger one cannot be allocated.
    ///
    /// On error nothing has been shifted and the array is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use growable_array::sequence::GrowableArray;
    ///
    /// let mut array: GrowableArray<i32> = [1, 3].into_iter().collect();
    /// array.insert_at(1, 2).unwrap();
    /// assert_eq!(format!("{array}"), "[1, 2, 3]");
    ///
    /// assert!(array.insert_at(9, 0).is_err());
    /// assert_eq!(array.len(), 3);
    /// ```
    pub fn insert_at(&mut self, index: usize, element: T) -> Result<(), GrowableArrayError> {
        if index > self.size {
            return Err(GrowableArrayError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        if CapacityPolicy::needs_growth(self.size, self.capacity()) {
            self.grow()?;
        }
        // Walk downward so no slot is overwritten before it has moved.
        for slot in (index..self.size).rev() {
            self.storage[slot + 1] = self.storage[slot].take();
        }
        self.storage[index] = Some(element);
        self.size += 1;
        Ok(())
    }

    /// Drops every element while keeping the current capacity.
    pub fn clear(&mut self) {
        for slot in &mut self.storage[..self.size] {
            *slot = None;
        }
        self.size = 0;
    }

    /// Moves the live elements into a freshly allocated buffer of
    /// `new_capacity` slots. `new_capacity` must be at least `size`.
    ///
    /// The current buffer is only touched once the new one exists, so a
    /// failed allocation leaves `self` as it was.
    fn relocate(&mut self, new_capacity: usize) -> Result<(), GrowableArrayError> {
        debug_assert!(new_capacity >= self.size);
        let mut slots = allocate_slots(new_capacity)?;
        for (target, source) in slots.iter_mut().zip(&mut self.storage[..self.size]) {
            *target = source.take();
        }
        self.storage = slots.into_boxed_slice();
        Ok(())
    }

    fn grow(&mut self) -> Result<(), GrowableArrayError> {
        let from = self.capacity();
        let to = CapacityPolicy::grown(from).ok_or(GrowableArrayError::AllocationFailed {
            requested_capacity: usize::MAX,
        })?;
        self.relocate(to)?;
        tracing::trace!(from, to, size = self.size, "grew growable array buffer");
        Ok(())
    }

    fn shrink(&mut self) {
        let from = self.capacity();
        let Some(to) = CapacityPolicy::shrunk(self.size, from) else {
            return;
        };
        match self.relocate(to) {
            Ok(()) => tracing::trace!(from, to, size = self.size, "shrank growable array buffer"),
            Err(error) => tracing::warn!(%error, from, to, "keeping larger buffer after failed shrink"),
        }
    }
}

impl<T: PartialEq> GrowableArray<T> {
    /// Returns the index of the first element equal to `element`, or `None`
    /// if there is none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use growable_array::sequence::GrowableArray;
    ///
    /// let array: GrowableArray<&str> = ["a", "b", "a"].into_iter().collect();
    /// assert_eq!(array.search(&"a"), Some(0));
    /// assert_eq!(array.search(&"z"), None);
    /// ```
    #[must_use]
    pub fn search(&self, element: &T) -> Option<usize> {
        self.iter().position(|candidate| candidate == element)
    }

    /// Returns `true` if an element equal to `element` is present.
    #[inline]
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.search(element).is_some()
    }

    /// Removes the first element equal to `element`, shifting its successors
    /// one slot to the left.
    ///
    /// If the array is then at most one-third full, the capacity is halved.
    /// An absent element is not an error: the array is left untouched and
    /// `false` is returned, so repeating the call is harmless.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use growable_array::sequence::GrowableArray;
    ///
    /// let mut array: GrowableArray<i32> = [1, 2, 3].into_iter().collect();
    /// assert!(array.delete_by_value(&2));
    /// assert!(!array.delete_by_value(&2));
    /// assert_eq!(format!("{array}"), "[1, 3]");
    /// ```
    pub fn delete_by_value(&mut self, element: &T) -> bool {
        let Some(position) = self.search(element) else {
            return false;
        };
        self.storage[position] = None;
        for slot in position + 1..self.size {
            self.storage[slot - 1] = self.storage[slot].take();
        }
        self.size -= 1;

        if CapacityPolicy::should_shrink(self.size, self.capacity()) {
            self.shrink();
        }
        true
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// Borrowing iterator over the elements of a [`GrowableArray`].
#[derive(Clone)]
pub struct GrowableArrayIterator<'a, T> {
    slots: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for GrowableArrayIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().and_then(Option::as_ref)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for GrowableArrayIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for GrowableArrayIterator<'_, T> {}

impl<T> FusedIterator for GrowableArrayIterator<'_, T> {}

/// Owning iterator over the elements of a [`GrowableArray`].
pub struct GrowableArrayIntoIterator<T> {
    slots: std::vec::IntoIter<Option<T>>,
}

impl<T> Iterator for GrowableArrayIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().flatten()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for GrowableArrayIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().flatten()
    }
}

impl<T> ExactSizeIterator for GrowableArrayIntoIterator<T> {}

impl<T> FusedIterator for GrowableArrayIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for GrowableArray<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.append(element);
        }
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;
    type IntoIter = GrowableArrayIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut slots = self.storage.into_vec();
        slots.truncate(self.size);
        GrowableArrayIntoIterator {
            slots: slots.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = GrowableArrayIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two arrays are equal when they hold equal elements in the same order.
/// Capacity does not take part in the comparison.
impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T: Hash> Hash for GrowableArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the live elements as `[a, b, c]`; unused slots are omitted.
impl<T: fmt::Display> fmt::Display for GrowableArray<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

static_assertions::assert_impl_all!(GrowableArray<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(GrowableArray<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for GrowableArray<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct GrowableArrayVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> GrowableArrayVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for GrowableArrayVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = GrowableArray<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq
            .size_hint()
            .unwrap_or(0)
            .min(MAX_PREALLOCATE)
            .max(DEFAULT_CAPACITY);
        let mut array = GrowableArray::with_capacity(capacity)
            .map_err(<A::Error as serde::de::Error>::custom)?;
        while let Some(element) = seq.next_element()? {
            array
                .try_append(element)
                .map_err(<A::Error as serde::de::Error>::custom)?;
        }
        Ok(array)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for GrowableArray<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(GrowableArrayVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
