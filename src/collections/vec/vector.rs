//! `Vector`: a growable contiguous array with STL-style cursors.
//!
//! Storage is a single `Buffer` whose capacity starts at [`MIN_CAPACITY`] and
//! is multiplied by [`GROWTH_FACTOR`] whenever an insertion finds it full, which
//! keeps `append` amortized O(1). Every other insertion or removal shifts the
//! tail of the buffer and costs O(n).

use super::buffer::Buffer;
use super::cursor::{ConstCursor, CursorMut, Position};
use super::iter::{IntoIter, Iter, IterMut};
use crate::collections::owner::OwnerId;
use crate::collections::Sequence;
use crate::error::{Error, Result};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};

/// Capacity of a freshly constructed vector. Capacity never drops below this.
pub const MIN_CAPACITY: usize = 4;

/// Factor applied to the capacity when an insertion finds the buffer full.
pub const GROWTH_FACTOR: usize = 2;

/// Smallest `MIN_CAPACITY * GROWTH_FACTOR^k` that holds `len` elements.
fn capacity_for(len: usize) -> usize {
    let mut capacity = MIN_CAPACITY;
    while capacity < len {
        capacity = capacity.saturating_mul(GROWTH_FACTOR);
    }
    capacity
}

/// A dynamic array.
pub struct Vector<T> {
    pub(super) buffer: Buffer<T>,
    owner: OwnerId,
}

impl<T> Vector<T> {
    /// Creates an empty vector with capacity [`MIN_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Creates an empty vector able to hold at least `capacity` elements.
    ///
    /// The capacity is rounded up to the growth sequence `4, 8, 16, …`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Buffer::with_capacity(capacity_for(capacity)),
            owner: OwnerId::fresh(),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    /// Number of elements the current allocation can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Grows the buffer by [`GROWTH_FACTOR`] if it is full.
    fn reserve_one(&mut self) {
        if self.buffer.is_full() {
            let capacity = self.buffer.capacity().saturating_mul(GROWTH_FACTOR);
            trace_event!(
                trace,
                from = self.buffer.capacity(),
                to = capacity,
                "growing vector buffer"
            );
            self.buffer.reallocate(capacity);
        }
    }

    /// Reallocates to the smallest capacity in the growth sequence that still
    /// holds every element.
    pub fn shrink_to_fit(&mut self) {
        let capacity = capacity_for(self.len());
        if capacity < self.buffer.capacity() {
            trace_event!(
                trace,
                from = self.buffer.capacity(),
                to = capacity,
                "shrinking vector buffer"
            );
            self.buffer.reallocate(capacity);
        }
    }

    /// Appends an element at the back. Amortized O(1).
    pub fn append(&mut self, item: T) {
        self.reserve_one();
        self.buffer.push(item);
    }

    /// Inserts an element at the front, shifting every element right. O(n).
    pub fn prepend(&mut self, item: T) {
        self.reserve_one();
        self.buffer.insert(0, item);
    }

    /// Inserts `item` before `pos`. O(n).
    ///
    /// `pos` may be the end position, which makes this an `append`.
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] if `pos` belongs to another vector or lies
    /// beyond the end.
    pub fn insert(&mut self, pos: Position, item: T) -> Result<()> {
        let index = self.check(pos, "insert")?;
        self.reserve_one();
        self.buffer.insert(index, item);
        Ok(())
    }

    /// Removes and returns the first element. O(n).
    ///
    /// # Errors
    /// [`Error::EmptyContainer`] if the vector is empty.
    pub fn pop_first(&mut self) -> Result<T> {
        match self.buffer.remove(0) {
            Some(item) => Ok(item),
            None => Error::EmptyContainer.raise("pop_first"),
        }
    }

    /// Removes and returns the last element. O(1).
    ///
    /// # Errors
    /// [`Error::EmptyContainer`] if the vector is empty.
    pub fn pop_last(&mut self) -> Result<T> {
        match self.buffer.pop() {
            Some(item) => Ok(item),
            None => Error::EmptyContainer.raise("pop_last"),
        }
    }

    /// Removes and returns the element at `pos`, shifting the tail left. O(n).
    ///
    /// # Errors
    /// [`Error::EmptyContainer`] if the vector is empty,
    /// [`Error::InvalidIterator`] if `pos` is the end or not a position of
    /// this vector.
    pub fn erase(&mut self, pos: Position) -> Result<T> {
        if self.is_empty() {
            return Error::EmptyContainer.raise("erase");
        }
        let index = self.check(pos, "erase")?;
        match self.buffer.remove(index) {
            Some(item) => Ok(item),
            None => Error::InvalidIterator.raise("erase"),
        }
    }

    /// Removes the elements in `[first, last)`. O(n).
    ///
    /// A range with `last <= first` removes nothing.
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] if either position belongs to another
    /// vector or lies beyond the end.
    pub fn erase_range(&mut self, first: Position, last: Position) -> Result<()> {
        let first = self.check(first, "erase_range")?;
        let last = self.check(last, "erase_range")?;
        if last > first {
            self.buffer.remove_range(first, last);
        }
        Ok(())
    }

    /// Removes every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Validates that `pos` is a position of this vector in `[0, len]`.
    fn check(&self, pos: Position, operation: &'static str) -> Result<usize> {
        if pos.owner() != self.owner || pos.index() > self.len() {
            return Error::InvalidIterator.raise(operation);
        }
        Ok(pos.index())
    }

    /// Returns the position of `index`, which may equal `len` (the end).
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] if `index > len`.
    pub fn position(&self, index: usize) -> Result<Position> {
        if index > self.len() {
            return Error::InvalidIterator.raise("position");
        }
        Ok(Position::new(self.owner, index))
    }

    /// Read-only cursor at the first element (or the end, if empty).
    pub fn cbegin(&self) -> ConstCursor<'_, T> {
        ConstCursor::new(self, Position::new(self.owner, 0))
    }

    /// Read-only cursor one past the last element.
    pub fn cend(&self) -> ConstCursor<'_, T> {
        ConstCursor::new(self, Position::new(self.owner, self.len()))
    }

    /// Mutable cursor at the first element (or the end, if empty).
    pub fn begin(&mut self) -> CursorMut<'_, T> {
        let pos = Position::new(self.owner, 0);
        CursorMut::new(self, pos)
    }

    /// Mutable cursor one past the last element.
    pub fn end(&mut self) -> CursorMut<'_, T> {
        let pos = Position::new(self.owner, self.len());
        CursorMut::new(self, pos)
    }

    /// Read-only cursor at `pos`.
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] if `pos` is not a position of this vector.
    pub fn cursor(&self, pos: Position) -> Result<ConstCursor<'_, T>> {
        self.check(pos, "cursor")?;
        Ok(ConstCursor::new(self, pos))
    }

    /// Mutable cursor at `pos`.
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] if `pos` is not a position of this vector.
    pub fn cursor_mut(&mut self, pos: Position) -> Result<CursorMut<'_, T>> {
        self.check(pos, "cursor_mut")?;
        Ok(CursorMut::new(self, pos))
    }

    /// Returns the element at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buffer.get(index)
    }

    /// Returns the element at `index` mutably, if any.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.buffer.get_mut(index)
    }

    /// First element, if any.
    pub fn first(&self) -> Option<&T> {
        self.buffer.get(0)
    }

    /// Last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|index| self.buffer.get(index))
    }

    /// Iterates over the elements front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.buffer.live())
    }

    /// Iterates mutably over the elements front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.buffer.live_mut())
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut copy = Self {
            buffer: Buffer::with_capacity(self.capacity()),
            owner: OwnerId::fresh(),
        };
        for item in self {
            copy.buffer.push(item.clone());
        }
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.buffer = Buffer::with_capacity(source.capacity());
        for item in source {
            self.buffer.push(item.clone());
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self {
            item.hash(state);
        }
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.buffer.get(index) {
            Some(item) => item,
            None => panic!("index {index} out of range for vector of length {}", self.len()),
        }
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.buffer.get_mut(index) {
            Some(item) => item,
            None => panic!("index {index} out of range for vector of length {len}"),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(items: [T; N]) -> Self {
        let mut vec = Self::with_capacity(N);
        for item in items {
            vec.buffer.push(item);
        }
        vec
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(items: Vec<T>) -> Self {
        let mut vec = Self::with_capacity(items.len());
        for item in items {
            vec.buffer.push(item);
        }
        vec
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        Self::from(items)
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.buffer.into_live())
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Sequence<T> for Vector<T> {
    type Position = Position;

    fn len(&self) -> usize {
        Vector::len(self)
    }

    fn append(&mut self, item: T) {
        Vector::append(self, item);
    }

    fn prepend(&mut self, item: T) {
        Vector::prepend(self, item);
    }

    fn pop_first(&mut self) -> Result<T> {
        Vector::pop_first(self)
    }

    fn pop_last(&mut self) -> Result<T> {
        Vector::pop_last(self)
    }

    fn clear(&mut self) {
        Vector::clear(self);
    }

    fn begin_position(&self) -> Position {
        self.cbegin().position()
    }

    fn end_position(&self) -> Position {
        self.cend().position()
    }

    fn position(&self, index: usize) -> Result<Position> {
        Vector::position(self, index)
    }

    fn insert(&mut self, pos: Position, item: T) -> Result<()> {
        Vector::insert(self, pos, item)
    }

    fn erase(&mut self, pos: Position) -> Result<T> {
        Vector::erase(self, pos)
    }

    fn erase_range(&mut self, first: Position, last: Position) -> Result<()> {
        Vector::erase_range(self, first, last)
    }
}
