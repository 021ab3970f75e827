//! # growable-array
//!
//! A contiguous, automatically resizing ordered sequence.
//!
//! ## Overview
//!
//! [`GrowableArray`](sequence::GrowableArray) keeps its elements in one
//! owned buffer. The buffer doubles when an insertion finds it full and
//! halves when a deletion leaves it at most one-third full, so appends are
//! amortized O(1) while search, positional insertion and deletion by value
//! are linear.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` as a plain sequence
//! - `full`: Enable all features
//!
//! ## Logging
//!
//! Buffer reallocations are reported through [`tracing`] at `TRACE` level
//! under the `growable_array` target. The library never installs a
//! subscriber.
//!
//! ## Example
//!
//! ```rust
//! use growable_array::prelude::*;
//!
//! let mut array = GrowableArray::new();
//! array.append(1);
//! array.append(3);
//! array.insert_at(1, 2).unwrap();
//!
//! assert_eq!(array.search(&3), Some(2));
//! assert_eq!(format!("{array}"), "[1, 2, 3]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use growable_array::prelude::*;
/// ```
pub mod prelude {
    pub use crate::sequence::*;
}

pub mod sequence;
