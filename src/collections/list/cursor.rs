//! Node-based cursors over a [`LinkedList`].
//!
//! Both cursor kinds hold a [`Position`] and forward movement to the list's
//! `step_next` / `step_prev` / `step_by`, so the sentinel checks live in one
//! place.

use super::LinkedList;
use crate::collections::owner::OwnerId;
use crate::error::{Error, Result};
use core::fmt;
use core::ops::{Add, Sub};

/// A non-borrowing handle to one node of a [`LinkedList`], sentinel included.
///
/// Two positions are equal exactly when they name the same node. Erasing the
/// node makes the position stale: every later use fails with
/// [`Error::InvalidIterator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    owner: OwnerId,
    slot: usize,
    generation: u64,
}

impl Position {
    #[inline]
    pub(super) fn new(owner: OwnerId, slot: usize, generation: u64) -> Self {
        Self {
            owner,
            slot,
            generation,
        }
    }

    #[inline]
    pub(super) fn owner(&self) -> OwnerId {
        self.owner
    }

    #[inline]
    pub(super) fn slot(&self) -> usize {
        self.slot
    }

    #[inline]
    pub(super) fn generation(&self) -> u64 {
        self.generation
    }
}

/// A read-only bidirectional cursor over a [`LinkedList`].
pub struct ConstCursor<'a, T> {
    list: &'a LinkedList<T>,
    pos: Position,
}

impl<'a, T> ConstCursor<'a, T> {
    #[inline]
    pub(super) fn new(list: &'a LinkedList<T>, pos: Position) -> Self {
        Self { list, pos }
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] at the end sentinel or on a stale node.
    pub fn get(&self) -> Result<&'a T> {
        self.list.value_at(self.pos)
    }

    /// Moves to the next node (prefix `++`).
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] at the end sentinel.
    pub fn inc(&mut self) -> Result<&mut Self> {
        self.pos = self.list.step_next(self.pos)?;
        Ok(self)
    }

    /// Moves to the next node and returns the cursor as it was (postfix `++`).
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] at the end sentinel.
    pub fn post_inc(&mut self) -> Result<Self> {
        let before = *self;
        self.inc()?;
        Ok(before)
    }

    /// Moves to the previous node (prefix `--`).
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] at the first node.
    pub fn dec(&mut self) -> Result<&mut Self> {
        self.pos = self.list.step_prev(self.pos)?;
        Ok(self)
    }

    /// Moves to the previous node and returns the cursor as it was (postfix `--`).
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] at the first node.
    pub fn post_dec(&mut self) -> Result<Self> {
        let before = *self;
        self.dec()?;
        Ok(before)
    }

    /// The non-borrowing handle for this cursor's node.
    #[inline]
    pub fn position(&self) -> Position {
        self.pos
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
        let pos = self.list.step_by(self.pos, delta)?;
        Ok(Self { list: self.list, pos })
    }
}

impl<T> Sub<isize> for ConstCursor<'_, T> {
    type Output = Result<Self>;

    fn sub(self, delta: isize) -> Self::Output {
        let delta = delta.checked_neg().ok_or(Error::InvalidIterator)?;
        let pos = self.list.step_by(self.pos, delta)?;
        Ok(Self { list: self.list, pos })
    }
}

impl<T> PartialEq for ConstCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
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
        f.debug_struct("ConstCursor").field("slot", &self.pos.slot).finish()
    }
}

impl<T> From<ConstCursor<'_, T>> for Position {
    fn from(cursor: ConstCursor<'_, T>) -> Self {
        cursor.pos
    }
}

/// A bidirectional cursor with mutable access to a [`LinkedList`].
pub struct CursorMut<'a, T> {
    list: &'a mut LinkedList<T>,
    pos: Position,
}

impl<'a, T> CursorMut<'a, T> {
    #[inline]
    pub(super) fn new(list: &'a mut LinkedList<T>, pos: Position) -> Self {
        Self { list, pos }
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] at the end sentinel or on a stale node.
    pub fn get(&self) -> Result<&T> {
        self.list.value_at(self.pos)
    }

    /// Returns the element under the cursor mutably.
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] at the end sentinel or on a stale node.
    pub fn get_mut(&mut self) -> Result<&mut T> {
        self.list.value_at_mut(self.pos)
    }

    /// Moves to the next node (prefix `++`).
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] at the end sentinel.
    pub fn inc(&mut self) -> Result<&mut Self> {
        self.pos = self.list.step_next(self.pos)?;
        Ok(self)
    }

    /// Moves to the next node, returning where the cursor was (postfix `++`).
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] at the end sentinel.
    pub fn post_inc(&mut self) -> Result<Position> {
        let before = self.pos;
        self.inc()?;
        Ok(before)
    }

    /// Moves to the previous node (prefix `--`).
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] at the first node.
    pub fn dec(&mut self) -> Result<&mut Self> {
        self.pos = self.list.step_prev(self.pos)?;
        Ok(self)
    }

    /// Moves to the previous node, returning where the cursor was (postfix `--`).
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] at the first node.
    pub fn post_dec(&mut self) -> Result<Position> {
        let before = self.pos;
        self.dec()?;
        Ok(before)
    }

    /// Inserts `value` before the cursor's node. The cursor does not move.
    ///
    /// # Errors
    /// Propagates [`LinkedList::insert`] failures.
    pub fn insert_before(&mut self, value: T) -> Result<()> {
        self.list.insert(self.pos, value)
    }

    /// Unlinks the node under the cursor. The cursor moves to the next node.
    ///
    /// # Errors
    /// Propagates [`LinkedList::erase`] failures.
    pub fn remove_current(&mut self) -> Result<T> {
        let next = self.list.step_next(self.pos);
        let value = self.list.erase(self.pos)?;
        self.pos = next?;
        Ok(value)
    }

    /// A read-only view at the same node.
    pub fn as_const(&self) -> ConstCursor<'_, T> {
        ConstCursor::new(self.list, self.pos)
    }

    /// The non-borrowing handle for this cursor's node.
    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }
}

impl<T> Add<isize> for CursorMut<'_, T> {
    type Output = Result<Self>;

    fn add(self, delta: isize) -> Self::Output {
        let pos = self.list.step_by(self.pos, delta)?;
        Ok(Self { list: self.list, pos })
    }
}

impl<T> Sub<isize> for CursorMut<'_, T> {
    type Output = Result<Self>;

    fn sub(self, delta: isize) -> Self::Output {
        let delta = delta.checked_neg().ok_or(Error::InvalidIterator)?;
        let pos = self.list.step_by(self.pos, delta)?;
        Ok(Self { list: self.list, pos })
    }
}

impl<T> PartialEq<Position> for CursorMut<'_, T> {
    fn eq(&self, other: &Position) -> bool {
        self.pos == *other
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut").field("slot", &self.pos.slot).finish()
    }
}
