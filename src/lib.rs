//! # Circular Array
//!
//! A generic, mutable, double-ended, auto-resizing circular array.
//!
//! [`CircularArray<T>`] stores its elements in a contiguous slot buffer whose
//! logical window wraps around the physical end, giving amortized O(1) pushes
//! and pops at both ends and O(1) random access. The buffer doubles whenever a
//! push finds it full and only ever shrinks on an explicit
//! [`compact`](CircularArray::compact) or [`resize`](CircularArray::resize) —
//! elements are never silently dropped.
//!
//! ## Key Features
//!
//! * **Double-ended:** push, pop, pop-with-default, and bulk-pop at the front
//!   and the rear.
//! * **Auto-resizing:** capacity doubles on overflow (standard amortized O(1)
//!   doubling), with explicit shrink-to-fit compaction.
//! * **Python-style positional access:** negative indices on get/set, and
//!   [`slice`](CircularArray::slice) with clamping bounds and negative steps.
//! * **Snapshot iteration:** [`snapshot`](CircularArray::snapshot) copies the
//!   contents at creation time, so the array can be mutated while an earlier
//!   snapshot is still being consumed.
//! * **Identity-first equality:** positional pairs compare equal by storage
//!   identity before value equality, so an array always equals itself even
//!   when element equality is partial (e.g. NaN).
//!
//! ## Errors
//!
//! Exactly two operations are fallible, both returning [`Error`]: popping
//! without a default from an empty array ([`Error::EmptyContainer`]) and
//! single-element get/set with an index out of bounds after negative
//! resolution ([`Error::IndexOutOfBounds`]). Slicing clamps instead of
//! failing; default-returning and bulk pops substitute or come up short
//! instead of failing.
//!
//! ## Examples
//!
//! ```rust
//! use circular_array::carray;
//!
//! let mut ca = carray![1, 2, 3];
//!
//! ca.push_front(0);
//! ca.push_back(4);
//! assert_eq!(ca.len(), 5);
//!
//! assert_eq!(ca.pop_front(), Ok(0));
//! assert_eq!(ca.pop_back(), Ok(4));
//! assert_eq!(ca.get(-1), Ok(&3));
//!
//! // Slicing clamps out-of-range bounds and supports negative steps.
//! let reversed = ca.slice(None, None, -1);
//! assert_eq!(reversed, carray![3, 2, 1]);
//!
//! // A snapshot is unaffected by later mutation.
//! let snap = ca.snapshot();
//! ca.push_back(9);
//! assert_eq!(snap.collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```
//!
//! ## Concurrency
//!
//! The array has no internal synchronization; `&mut self` on every mutator
//! already restricts mutation to one context at a time, and resizing happens
//! as a single allocate-copy-swap step inside that call. Wrap the array in a
//! lock for shared mutation across threads.

// --- Module Declarations ---

pub mod array;
pub mod error;
mod index;

// --- Re-exports ---

pub use array::{CircularArray, IntoIter, Iter, Snapshot};
pub use error::Error;

/// Creates a [`CircularArray`] from the listed elements, front to rear.
///
/// # Examples
///
/// ```
/// use circular_array::{carray, CircularArray};
///
/// let ca = carray![1, 2, 3];
/// assert_eq!(ca.len(), 3);
/// assert_eq!(ca.get(0), Ok(&1));
///
/// let empty: CircularArray<i32> = carray![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! carray {
    () => {
        $crate::CircularArray::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::CircularArray::from([$($value),+])
    };
}
