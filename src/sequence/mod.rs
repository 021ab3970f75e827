//! Growable contiguous sequences.
//!
//! - [`GrowableArray`]: an ordered sequence over a single owned buffer that
//!   doubles when full and halves when at most one-third full
//! - [`CapacityPolicy`]: the growth and shrink arithmetic behind it
//! - [`GrowableArrayError`]: errors from fallible operations
//!
//! # Examples
//!
//! ```rust
//! use growable_array::sequence::GrowableArray;
//!
//! let mut array = GrowableArray::with_capacity(5).unwrap();
//! for letter in ["A", "B", "C", "D", "E", "F"] {
//!     array.append(letter);
//! }
//! assert_eq!(array.capacity(), 10);
//!
//! array.insert_at(0, "X").unwrap();
//! for letter in ["A", "B", "C", "D"] {
//!     array.delete_by_value(&letter);
//! }
//!
//! assert_eq!(array.search(&"C"), None);
//! assert_eq!(array.capacity(), 5);
//! assert_eq!(format!("{array}"), "[X, E, F]");
//! ```

mod capacity;
mod error;
mod growable_array;

pub use capacity::CapacityPolicy;
pub use capacity::DEFAULT_CAPACITY;
pub use error::GrowableArrayError;
pub use growable_array::GrowableArray;
pub use growable_array::GrowableArrayIntoIterator;
pub use growable_array::GrowableArrayIterator;
