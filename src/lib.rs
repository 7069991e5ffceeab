//! # `seqkit` - Sequence Containers with STL-Style Cursors
//!
//! Two generic, independent sequence containers:
//!
//! - [`Vector`]: contiguous, resizable storage. Amortized O(1) `append`,
//!   O(n) `prepend` / `insert` / `erase`. Cursors are indices.
//! - [`LinkedList`]: doubly linked nodes with a permanent end sentinel.
//!   O(1) `append` / `prepend` / `insert` / `erase` at a cursor. Cursors name nodes.
//!
//! ## Cursors
//!
//! Each container exposes the bidirectional iterator protocol of a C++ sequence
//! container, called a *cursor* here to keep it apart from [`Iterator`]:
//!
//! - `cbegin()` / `cend()` return a read-only `ConstCursor` borrowing the container.
//! - `begin()` / `end()` return a `CursorMut` borrowing it exclusively.
//! - Both support `get()`, prefix/postfix `inc`/`dec`, `+ isize` / `- isize`
//!   and equality. Every step is bounds-checked and fails with
//!   [`Error::InvalidIterator`] rather than walking off the ends.
//! - `position()` turns a cursor into a `Position`, a `Copy` handle that does
//!   not borrow the container and is what `insert` / `erase` accept.
//!
//! ### Invalidation
//!
//! While a cursor is alive the borrow checker rules out structural mutation.
//! A `Position` may outlive such a mutation; using it afterwards is memory
//! safe but unspecified for [`Vector`] (it names whatever index it held), and
//! always fails with [`Error::InvalidIterator`] for an erased [`LinkedList`] node.
//!
//! ## Example
//!
//! ```rust
//! use seqkit::{vector, Error, Vector};
//!
//! let mut v: Vector<i32> = vector![1, 2, 3, 4, 5];
//!
//! // Erase the sub-range [1, 3).
//! let first = (v.cbegin() + 1)?.position();
//! let last = (v.cbegin() + 3)?.position();
//! v.erase_range(first, last)?;
//! assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![1, 4, 5]);
//!
//! // The end cursor cannot be dereferenced or advanced.
//! let mut end = v.cend();
//! assert_eq!(end.get(), Err(Error::InvalidIterator));
//! assert!(end.inc().is_err());
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for buffer growth, slot reuse and
//!   rejected operations.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

pub mod collections;
pub mod error;

pub use collections::{LinkedList, Sequence, Vector};
pub use error::{Error, Result};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Positions stay small enough to pass around by value.
    assert!(mem::size_of::<collections::vec::Position>() <= 2 * mem::size_of::<u64>());
    assert!(mem::size_of::<collections::list::Position>() <= 3 * mem::size_of::<u64>());
};
