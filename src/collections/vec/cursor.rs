//! Index-based cursors over a [`Vector`].
//!
//! Both cursor kinds hold a [`Position`] and forward every movement to the
//! navigation routines on `Position`, so bounds checking lives in one place.
//! `CursorMut` wraps the same logic around an exclusive borrow instead of
//! inheriting from `ConstCursor`.

use super::Vector;
use crate::collections::owner::OwnerId;
use crate::error::{Error, Result};
use core::fmt;
use core::ops::{Add, Sub};

/// A non-borrowing handle to a slot of a [`Vector`], in `[0, len]`.
///
/// Positions are what [`Vector::insert`] and [`Vector::erase`] accept. They
/// remember which vector produced them; handing one to another vector fails
/// with [`Error::InvalidIterator`]. Any structural mutation (growth, insertion,
/// erasure) leaves older positions pointing at whatever index they held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    owner: OwnerId,
    index: usize,
}

impl Position {
    #[inline]
    pub(super) fn new(owner: OwnerId, index: usize) -> Self {
        Self { owner, index }
    }

    /// Index of the element this position refers to (`len` for the end).
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub(super) fn owner(&self) -> OwnerId {
        self.owner
    }

    fn forward(self, len: usize) -> Result<Self> {
        if self.index >= len {
            return Err(Error::InvalidIterator);
        }
        Ok(Self::new(self.owner, self.index + 1))
    }

    fn backward(self) -> Result<Self> {
        match self.index.checked_sub(1) {
            Some(index) => Ok(Self::new(self.owner, index)),
            None => Err(Error::InvalidIterator),
        }
    }

    fn offset(self, delta: isize, len: usize) -> Result<Self> {
        self.index
            .checked_add_signed(delta)
            .filter(|&index| index <= len)
            .map(|index| Self::new(self.owner, index))
            .ok_or(Error::InvalidIterator)
    }

    fn offset_back(self, delta: isize, len: usize) -> Result<Self> {
        let delta = delta.checked_neg().ok_or(Error::InvalidIterator)?;
        self.offset(delta, len)
    }
}

/// A read-only bidirectional cursor over a [`Vector`].
pub struct ConstCursor<'a, T> {
    vec: &'a Vector<T>,
    pos: Position,
}

impl<'a, T> ConstCursor<'a, T> {
    #[inline]
    pub(super) fn new(vec: &'a Vector<T>, pos: Position) -> Self {
        Self { vec, pos }
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] at `end()`.
    pub fn get(&self) -> Result<&'a T> {
        self.vec.buffer.get(self.pos.index).ok_or(Error::InvalidIterator)
    }

    /// Moves to the next position (prefix `++`).
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] when already at `end()`.
    pub fn inc(&mut self) -> Result<&mut Self> {
        self.pos = self.pos.forward(self.vec.len())?;
        Ok(self)
    }

    /// Moves to the next position and returns the cursor as it was (postfix `++`).
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] when already at `end()`.
    pub fn post_inc(&mut self) -> Result<Self> {
        let before = *self;
        self.inc()?;
        Ok(before)
    }

    /// Moves to the previous position (prefix `--`).
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] when already at `begin()`.
    pub fn dec(&mut self) -> Result<&mut Self> {
        self.pos = self.pos.backward()?;
        Ok(self)
    }

    /// Moves to the previous position and returns the cursor as it was (postfix `--`).
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] when already at `begin()`.
    pub fn post_dec(&mut self) -> Result<Self> {
        let before = *self;
        self.dec()?;
        Ok(before)
    }

    /// The non-borrowing handle for this cursor's position.
    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Index under the cursor (`len` at the end).
    #[inline]
    pub fn index(&self) -> usize {
        self.pos.index
    }
}

impl<T> Clone for ConstCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ConstCursor<'_, T> {}

impl<T> Add<isize> for ConstCursor<'_, T> {
    type Output = Result<Self>;

    fn add(self, delta: isize) -> Self::Output {
        let pos = self.pos.offset(delta, self.vec.len())?;
        Ok(Self { vec: self.vec, pos })
    }
}

impl<T> Sub<isize> for ConstCursor<'_, T> {
    type Output = Result<Self>;

    fn sub(self, delta: isize) -> Self::Output {
        let pos = self.pos.offset_back(delta, self.vec.len())?;
        Ok(Self { vec: self.vec, pos })
    }
}

impl<T> PartialEq for ConstCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.vec, other.vec) && self.pos.index == other.pos.index
    }
}

impl<T> Eq for ConstCursor<'_, T> {}

impl<T> PartialEq<Position> for ConstCursor<'_, T> {
    fn eq(&self, other: &Position) -> bool {
        self.pos == *other
    }
}

impl<T> fmt::Debug for ConstCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstCursor")
            .field("index", &self.pos.index)
            .field("len", &self.vec.len())
            .finish()
    }
}

impl<T> From<ConstCursor<'_, T>> for Position {
    fn from(cursor: ConstCursor<'_, T>) -> Self {
        cursor.pos
    }
}

/// A bidirectional cursor with mutable access to a [`Vector`].
pub struct CursorMut<'a, T> {
    vec: &'a mut Vector<T>,
    pos: Position,
}

impl<'a, T> CursorMut<'a, T> {
    #[inline]
    pub(super) fn new(vec: &'a mut Vector<T>, pos: Position) -> Self {
        Self { vec, pos }
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] at `end()`.
    pub fn get(&self) -> Result<&T> {
        self.vec.buffer.get(self.pos.index).ok_or(Error::InvalidIterator)
    }

    /// Returns the element under the cursor mutably.
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] at `end()`.
    pub fn get_mut(&mut self) -> Result<&mut T> {
        self.vec.buffer.get_mut(self.pos.index).ok_or(Error::InvalidIterator)
    }

    /// Moves to the next position (prefix `++`).
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] when already at `end()`.
    pub fn inc(&mut self) -> Result<&mut Self> {
        self.pos = self.pos.forward(self.vec.len())?;
        Ok(self)
    }

    /// Moves to the next position, returning where the cursor was (postfix `++`).
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] when already at `end()`.
    pub fn post_inc(&mut self) -> Result<Position> {
        let before = self.pos;
        self.inc()?;
        Ok(before)
    }

    /// Moves to the previous position (prefix `--`).
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] when already at `begin()`.
    pub fn dec(&mut self) -> Result<&mut Self> {
        self.pos = self.pos.backward()?;
        Ok(self)
    }

    /// Moves to the previous position, returning where the cursor was (postfix `--`).
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] when already at `begin()`.
    pub fn post_dec(&mut self) -> Result<Position> {
        let before = self.pos;
        self.dec()?;
        Ok(before)
    }

    /// Inserts `value` before the cursor. The cursor keeps pointing at the
    /// same element (or at `end()`).
    ///
    /// # Errors
    /// Propagates [`Vector::insert`] failures.
    pub fn insert_before(&mut self, value: T) -> Result<()> {
        self.vec.insert(self.pos, value)?;
        self.pos = Position::new(self.pos.owner, self.pos.index + 1);
        Ok(())
    }

    /// Removes the element under the cursor. The cursor moves to the element
    /// that followed it.
    ///
    /// # Errors
    /// Propagates [`Vector::erase`] failures.
    pub fn remove_current(&mut self) -> Result<T> {
        self.vec.erase(self.pos)
    }

    /// A read-only view at the same position.
    pub fn as_const(&self) -> ConstCursor<'_, T> {
        ConstCursor::new(self.vec, self.pos)
    }

    /// The non-borrowing handle for this cursor's position.
    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Index under the cursor (`len` at the end).
    #[inline]
    pub fn index(&self) -> usize {
        self.pos.index
    }
}

impl<T> Add<isize> for CursorMut<'_, T> {
    type Output = Result<Self>;

    fn add(self, delta: isize) -> Self::Output {
        let pos = self.pos.offset(delta, self.vec.len())?;
        Ok(Self { vec: self.vec, pos })
    }
}

impl<T> Sub<isize> for CursorMut<'_, T> {
    type Output = Result<Self>;

    fn sub(self, delta: isize) -> Self::Output {
        let pos = self.pos.offset_back(delta, self.vec.len())?;
        Ok(Self { vec: self.vec, pos })
    }
}

impl<T> PartialEq<Position> for CursorMut<'_, T> {
    fn eq(&self, other: &Position) -> bool {
        self.pos == *other
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.pos.index)
            .field("len", &self.vec.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;

    #[test]
    fn test_const_cursor_walk() {
        let v = vector![10, 20, 30];
        let mut it = v.cbegin();
        assert_eq!(it.get(), Ok(&10));
        it.inc().unwrap();
        assert_eq!(*it.get().unwrap(), 20);
        let old = it.post_inc().unwrap();
        assert_eq!(old.get(), Ok(&20));
        assert_eq!(it.get(), Ok(&30));
        it.inc().unwrap();
        assert_eq!(it, v.cend());
        assert_eq!(it.get(), Err(Error::InvalidIterator));
        assert_eq!(it.inc().map(|_| ()), Err(Error::InvalidIterator));
    }

    #[test]
    fn test_const_cursor_dec_at_begin() {
        let v = vector![1];
        let mut it = v.cbegin();
        assert_eq!(it.dec().map(|_| ()), Err(Error::InvalidIterator));
        assert_eq!(it.post_dec().map(|_| ()), Err(Error::InvalidIterator));
        assert_eq!(it.index(), 0);

        let mut end = v.cend();
        let was = end.post_dec().unwrap();
        assert_eq!(was, v.cend());
        assert_eq!(end, v.cbegin());
    }

    #[test]
    fn test_const_cursor_arithmetic() {
        let v = vector![1, 2, 3, 4, 5];
        let it = (v.cbegin() + 2).unwrap();
        assert_eq!(it.get(), Ok(&3));
        assert_eq!((it + 3).unwrap(), v.cend());
        assert_eq!((it + 4).unwrap_err(), Error::InvalidIterator);
        assert_eq!((it - 2).unwrap(), v.cbegin());
        assert_eq!((it - 3).unwrap_err(), Error::InvalidIterator);
        assert_eq!((it + -1).unwrap().get(), Ok(&2));
        assert_eq!((it - isize::MIN).unwrap_err(), Error::InvalidIterator);
    }

    #[test]
    fn test_cursors_of_different_vectors_differ() {
        let a = vector![1, 2];
        let b = a.clone();
        assert_ne!(a.cbegin(), b.cbegin());
        assert_ne!(a.cbegin().position(), b.cbegin().position());
    }

    #[test]
    fn test_cursor_mut_edit() {
        let mut v = vector![1, 2, 3];
        let mut it = v.begin();
        *it.get_mut().unwrap() = 10;
        it.inc().unwrap();
        it.insert_before(15).unwrap();
        assert_eq!(it.get(), Ok(&2));
        assert_eq!(it.remove_current(), Ok(2));
        assert_eq!(it.get(), Ok(&3));
        assert_eq!(it.as_const().index(), 2);
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![10, 15, 3]);
    }

    #[test]
    fn test_cursor_mut_end_failures() {
        let mut v = vector!['a'];
        let mut end = v.end();
        assert_eq!(end.get(), Err(Error::InvalidIterator));
        assert_eq!(end.get_mut(), Err(Error::InvalidIterator));
        assert_eq!(end.inc().map(|_| ()), Err(Error::InvalidIterator));
        assert_eq!(end.remove_current(), Err(Error::InvalidIterator));
        let back = (end - 1).unwrap();
        assert_eq!(back.get(), Ok(&'a'));
    }
}
