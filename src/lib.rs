#![no_std]

//! `GrowableSequence`: a growable, bounds-checked, indexable sequence.
//!
//! `GrowableSequence<T>` owns a single buffer of slots and tracks how many of
//! them are live. It supports appending, bulk appending, indexed read and
//! write, insertion and removal at any position, positional exchange and
//! clearing. Every index-taking operation is bounds-checked and reports
//! failures as `SequenceError::IndexOutOfRange` without touching the sequence.
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! Buffer layout: [live elements][unused slots]
//! Live elements occupy slots `[0, len)`; slots `[len, capacity)` are empty.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `add()`: amortized O(1) - the buffer grows multiplicatively
//! - `add_range()`: O(n) - at most one reallocation for exact-size sources
//! - `get()`, `set()`, `exchange()`: O(1)
//! - `insert_at()`, `remove_at()`: O(len - index) - tail removal is O(1)
//! - `clear()`: O(len) - drops every live element
//!
//! ## Growth Policy
//! - An empty sequence starts with 16 slots (the baseline)
//! - When full, the new capacity is the largest of the required size, the
//!   current capacity times the growth factor (2 by default) and the baseline
//! - Capacity never shrinks: `remove_at()` and `clear()` keep the high-water mark
//!
//! Both numbers are configurable through `SequenceConfig`:
//!
//! ```
//! # use growseq::{GrowableSequence, SequenceConfig};
//! let config = SequenceConfig {
//!     baseline_capacity: 4,
//!     growth_factor: 3,
//! };
//! let mut sequence = GrowableSequence::with_config(config).unwrap();
//! sequence.add_range([1, 2, 3, 4, 5]);
//!
//! assert_eq!(sequence.len(), 5);
//! assert!(sequence.capacity() >= 5);
//! ```
//!
//! # Vector Interface
//!
//! ```
//! # use growseq::{growseq, SequenceError};
//! let mut names = growseq!["Peter", "Maria"];
//!
//! names.insert_at(0, "Steve").unwrap();
//! names.add("Mia");
//! assert_eq!(names.to_string(), "[Steve, Peter, Maria, Mia]");
//!
//! names.exchange(1, 2).unwrap();
//! assert_eq!(names.remove_at(3), Ok("Mia"));
//! assert_eq!(names.to_string(), "[Steve, Maria, Peter]");
//!
//! // Failed operations leave the sequence untouched
//! assert_eq!(
//!     names.get(3),
//!     Err(SequenceError::IndexOutOfRange { index: 3, length: 3 })
//! );
//! assert_eq!(names.len(), 3);
//! ```
//!
//! The `Index` operators are the panicking counterparts of `get` and
//! `get_mut`:
//!
//! ```
//! # use growseq::growseq;
//! let mut numbers = growseq![10, 20];
//! numbers[1] += 5;
//! assert_eq!(numbers[1], 25);
//! ```
//!
//! # Rendering
//!
//! `Display` renders elements in brackets, recursively for nested sequences:
//!
//! ```
//! # use growseq::{growseq, GrowableSequence};
//! let nested = growseq![growseq![1, 2], growseq![3], GrowableSequence::new()];
//! assert_eq!(nested.to_string(), "[[1, 2], [3], []]");
//! ```
//!
//! # Logging
//!
//! Buffer reallocations are reported through the `log` facade at `debug`
//! level. No logger is installed by this crate.

extern crate alloc;

mod config;
mod convert;
mod core;
mod error;
mod render;

// Re-export public types
pub use crate::core::GrowableSequence;
pub use config::SequenceConfig;
pub use error::SequenceError;

/// Creates a `GrowableSequence` holding the given elements in order.
///
/// ```
/// # use growseq::growseq;
/// let empty: growseq::GrowableSequence<i32> = growseq![];
/// let numbers = growseq![5, 6];
///
/// assert!(empty.is_empty());
/// assert_eq!(numbers.to_string(), "[5, 6]");
/// ```
#[macro_export]
macro_rules! growseq {
    () => {
        $crate::GrowableSequence::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::GrowableSequence::from([$($item),+])
    };
}
