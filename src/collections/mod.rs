//! Sequence containers with STL-style cursors.
//!
//! Collections are organized by storage layout:
//! - `vec`: contiguous storage ([`Vector`])
//! - `list`: linked storage with an end sentinel ([`LinkedList`])
//!
//! Both implement [`Sequence`], the operations they share, so generic code
//! can be written once against either layout.

pub mod list;
pub(crate) mod owner;
mod serde_impl;
pub mod vec;

pub use list::LinkedList;
pub use vec::Vector;

use crate::error::Result;

/// Operations shared by every sequence container in the crate.
///
/// Positions are non-borrowing handles: obtain one, then hand it back to a
/// mutating call on the same container.
pub trait Sequence<T> {
    /// Handle naming a slot of the container, the end position included.
    type Position: Copy + Eq + core::fmt::Debug;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds an element at the back.
    fn append(&mut self, item: T);

    /// Adds an element at the front.
    fn prepend(&mut self, item: T);

    /// Removes and returns the first element.
    ///
    /// # Errors
    /// [`Error::EmptyContainer`](crate::Error::EmptyContainer) when empty.
    fn pop_first(&mut self) -> Result<T>;

    /// Removes and returns the last element.
    ///
    /// # Errors
    /// [`Error::EmptyContainer`](crate::Error::EmptyContainer) when empty.
    fn pop_last(&mut self) -> Result<T>;

    /// Removes every element.
    fn clear(&mut self);

    /// Position of the first element (the end position when empty).
    fn begin_position(&self) -> Self::Position;

    /// The one-past-the-last position.
    fn end_position(&self) -> Self::Position;

    /// Position of the `index`-th element; `len()` gives the end position.
    ///
    /// # Errors
    /// [`Error::InvalidIterator`](crate::Error::InvalidIterator) if `index > len()`.
    fn position(&self, index: usize) -> Result<Self::Position>;

    /// Inserts `item` before `pos`.
    ///
    /// # Errors
    /// [`Error::InvalidIterator`](crate::Error::InvalidIterator) for a position
    /// this container does not recognise.
    fn insert(&mut self, pos: Self::Position, item: T) -> Result<()>;

    /// Removes and returns the element at `pos`.
    ///
    /// # Errors
    /// [`Error::EmptyContainer`](crate::Error::EmptyContainer) when empty,
    /// [`Error::InvalidIterator`](crate::Error::InvalidIterator) at the end position.
    fn erase(&mut self, pos: Self::Position) -> Result<T>;

    /// Removes every element of `[first, last)`.
    ///
    /// # Errors
    /// [`Error::InvalidIterator`](crate::Error::InvalidIterator) for a position
    /// this container does not recognise.
    fn erase_range(&mut self, first: Self::Position, last: Self::Position) -> Result<()>;
}
