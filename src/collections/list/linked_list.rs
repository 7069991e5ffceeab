//! `LinkedList`: a doubly linked list with a permanent end sentinel.
//!
//! Nodes live in an arena of indexed slots instead of individual heap
//! allocations. The layout is split into parallel vectors:
//! - `links`: prev/next structure, or the free-list link of a recycled slot.
//! - `values`: element data. The sentinel's value is always `None`.
//! - `generations`: bumped every time a slot is released, so a [`Position`]
//!   to an erased node is recognised as stale. A slot whose counter would
//!   overflow is retired instead of recycled. Counters outlive the slots they
//!   describe: `shrink_to_fit` truncates `links` and `values` only.
//!
//! Slot `SENTINEL` is allocated on construction and never released. Its
//! `next` is always `None`, which is what marks the end position.

use super::cursor::{ConstCursor, CursorMut, Position};
use super::iter::{IntoIter, Iter, IterMut};
use crate::collections::owner::OwnerId;
use crate::collections::Sequence;
use crate::error::{Error, Result};
use core::fmt;
use core::hash::{Hash, Hasher};

/// Slot index of the end sentinel.
pub(super) const SENTINEL: usize = 0;

/// A slot in the links vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum LinkSlot {
    Occupied { prev: Option<usize>, next: Option<usize> },
    Free(Option<usize>), // Next free slot index
}

/// A doubly linked list.
pub struct LinkedList<T> {
    pub(super) links: Vec<LinkSlot>,
    pub(super) values: Vec<Option<T>>,
    generations: Vec<u64>,
    /// First element, or `SENTINEL` when empty.
    pub(super) head: usize,
    free_head: Option<usize>,
    len: usize,
    owner: OwnerId,
}

impl<T> LinkedList<T> {
    /// Creates an empty list holding only the sentinel.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list whose arena has room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let slots = capacity.saturating_add(1);
        let mut links = Vec::with_capacity(slots);
        let mut values = Vec::with_capacity(slots);
        let mut generations = Vec::with_capacity(slots);
        links.push(LinkSlot::Occupied { prev: None, next: None });
        values.push(None);
        generations.push(0);
        Self {
            links,
            values,
            generations,
            head: SENTINEL,
            free_head: None,
            len: 0,
            owner: OwnerId::fresh(),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub(super) fn prev_of(&self, slot: usize) -> Option<usize> {
        match self.links[slot] {
            LinkSlot::Occupied { prev, .. } => prev,
            LinkSlot::Free(_) => None,
        }
    }

    #[inline]
    pub(super) fn next_of(&self, slot: usize) -> Option<usize> {
        match self.links[slot] {
            LinkSlot::Occupied { next, .. } => next,
            LinkSlot::Free(_) => None,
        }
    }

    fn set_prev(&mut self, slot: usize, to: Option<usize>) {
        if let LinkSlot::Occupied { prev, .. } = &mut self.links[slot] {
            *prev = to;
        }
    }

    fn set_next(&mut self, slot: usize, to: Option<usize>) {
        if let LinkSlot::Occupied { next, .. } = &mut self.links[slot] {
            *next = to;
        }
    }

    /// Takes a slot for `value`, reusing a free one when available.
    fn alloc(&mut self, value: T) -> usize {
        if let Some(slot) = self.free_head {
            if let LinkSlot::Free(next_free) = self.links[slot] {
                trace_event!(trace, slot, "reusing list slot");
                self.free_head = next_free;
                self.links[slot] = LinkSlot::Occupied { prev: None, next: None };
                self.values[slot] = Some(value);
                return slot;
            }
        }
        let slot = self.links.len();
        self.links.push(LinkSlot::Occupied { prev: None, next: None });
        self.values.push(Some(value));
        // A slot truncated by `shrink_to_fit` keeps its counter.
        if slot == self.generations.len() {
            self.generations.push(0);
        }
        slot
    }

    /// Puts `slot` on the free list and hands back its value.
    ///
    /// Callers must have unlinked the node already. A slot whose generation
    /// reaches `u64::MAX` is retired: it stays free but never rejoins the
    /// free list, so no position to it can become live again.
    fn release(&mut self, slot: usize) -> Option<T> {
        let generation = self.generations[slot].saturating_add(1);
        self.generations[slot] = generation;
        if generation == u64::MAX {
            trace_event!(debug, slot, "retiring exhausted list slot");
            self.links[slot] = LinkSlot::Free(None);
        } else {
            self.links[slot] = LinkSlot::Free(self.free_head);
            self.free_head = Some(slot);
        }
        self.values[slot].take()
    }

    /// Returns `true` for a slot that can never be handed out again.
    fn is_retired(&self, slot: usize) -> bool {
        self.generations[slot] == u64::MAX
    }

    /// Links a new node holding `value` directly before `at`.
    fn link_before(&mut self, at: usize, value: T) -> usize {
        let prev = self.prev_of(at);
        let node = self.alloc(value);
        self.links[node] = LinkSlot::Occupied {
            prev,
            next: Some(at),
        };
        self.set_prev(at, Some(node));
        match prev {
            Some(prev) => self.set_next(prev, Some(node)),
            None => self.head = node,
        }
        self.len += 1;
        node
    }

    /// Detaches a real (non-sentinel) node and returns its value.
    fn unlink(&mut self, slot: usize) -> Option<T> {
        debug_assert_ne!(slot, SENTINEL);
        let (prev, next) = match self.links[slot] {
            LinkSlot::Occupied { prev, next } => (prev, next),
            LinkSlot::Free(_) => return None,
        };
        if let Some(next) = next {
            self.set_prev(next, prev);
        }
        match prev {
            Some(prev) => self.set_next(prev, next),
            None => self.head = next.unwrap_or(SENTINEL),
        }
        self.len -= 1;
        self.release(slot)
    }

    #[inline]
    pub(super) fn position_of(&self, slot: usize) -> Position {
        Position::new(self.owner, slot, self.generations[slot])
    }

    /// Maps a position back to a live slot of this list.
    fn resolve(&self, pos: Position, operation: &'static str) -> Result<usize> {
        let slot = pos.slot();
        let live = pos.owner() == self.owner
            && self.generations.get(slot) == Some(&pos.generation())
            && matches!(self.links.get(slot), Some(LinkSlot::Occupied { .. }));
        if !live {
            return Error::InvalidIterator.raise(operation);
        }
        Ok(slot)
    }

    /// Appends an element at the back. O(1).
    pub fn append(&mut self, item: T) {
        self.link_before(SENTINEL, item);
    }

    /// Inserts an element at the front. O(1).
    pub fn prepend(&mut self, item: T) {
        self.link_before(self.head, item);
    }

    /// Inserts `item` directly before `pos`. O(1).
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] if `pos` is not a live position of this list.
    pub fn insert(&mut self, pos: Position, item: T) -> Result<()> {
        let slot = self.resolve(pos, "insert")?;
        if self.is_empty() || slot == self.head {
            self.prepend(item);
        } else {
            self.link_before(slot, item);
        }
        Ok(())
    }

    /// Removes and returns the first element. O(1).
    ///
    /// # Errors
    /// [`Error::EmptyContainer`] if the list is empty.
    pub fn pop_first(&mut self) -> Result<T> {
        if self.is_empty() {
            return Error::EmptyContainer.raise("pop_first");
        }
        match self.unlink(self.head) {
            Some(item) => Ok(item),
            None => Error::EmptyContainer.raise("pop_first"),
        }
    }

    /// Removes and returns the last element. O(1).
    ///
    /// # Errors
    /// [`Error::EmptyContainer`] if the list is empty.
    pub fn pop_last(&mut self) -> Result<T> {
        let Some(last) = self.prev_of(SENTINEL) else {
            return Error::EmptyContainer.raise("pop_last");
        };
        match self.unlink(last) {
            Some(item) => Ok(item),
            None => Error::EmptyContainer.raise("pop_last"),
        }
    }

    /// Unlinks and returns the element at `pos`. O(1).
    ///
    /// # Errors
    /// [`Error::EmptyContainer`] if the list is empty,
    /// [`Error::InvalidIterator`] if `pos` is the end sentinel or not a live
    /// position of this list.
    pub fn erase(&mut self, pos: Position) -> Result<T> {
        if self.is_empty() {
            return Error::EmptyContainer.raise("erase");
        }
        let slot = self.resolve(pos, "erase")?;
        if slot == SENTINEL {
            return Error::InvalidIterator.raise("erase");
        }
        match self.unlink(slot) {
            Some(item) => Ok(item),
            None => Error::InvalidIterator.raise("erase"),
        }
    }

    /// Erases every element of `[first, last)`. O(k) for k erased elements.
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] if either position is not a live position of
    /// this list, or `last` is not reachable from `first`. The list is left
    /// untouched in that case.
    pub fn erase_range(&mut self, first: Position, last: Position) -> Result<()> {
        let first = self.resolve(first, "erase_range")?;
        let last = self.resolve(last, "erase_range")?;

        let mut count = 0;
        let mut cursor = first;
        while cursor != last {
            match self.next_of(cursor) {
                Some(next) => cursor = next,
                None => return Error::InvalidIterator.raise("erase_range"),
            }
            count += 1;
        }

        let mut cursor = first;
        for _ in 0..count {
            let next = self.next_of(cursor).unwrap_or(SENTINEL);
            self.unlink(cursor);
            cursor = next;
        }
        Ok(())
    }

    /// Removes every element. The sentinel stays.
    pub fn clear(&mut self) {
        while self.pop_first().is_ok() {}
    }

    /// Number of slots the arena holds, the sentinel and free slots included.
    pub fn slot_count(&self) -> usize {
        self.links.len()
    }

    /// Releases trailing free slots of the arena and their storage.
    ///
    /// Live nodes never move, so every position stays valid. Free slots
    /// below the last live node are kept for reuse.
    pub fn shrink_to_fit(&mut self) {
        let mut end = self.links.len();
        while end > SENTINEL + 1
            && matches!(self.links[end - 1], LinkSlot::Free(_))
            && !self.is_retired(end - 1)
        {
            end -= 1;
        }
        if end < self.links.len() {
            trace_event!(
                trace,
                from = self.links.len(),
                to = end,
                "shrinking list arena"
            );
            self.links.truncate(end);
            self.values.truncate(end);
            self.rebuild_free_list();
        }
        self.links.shrink_to_fit();
        self.values.shrink_to_fit();
    }

    /// Threads every recyclable free slot back onto the free list, lowest first.
    fn rebuild_free_list(&mut self) {
        self.free_head = None;
        for slot in (SENTINEL + 1..self.links.len()).rev() {
            if matches!(self.links[slot], LinkSlot::Free(_)) && !self.is_retired(slot) {
                self.links[slot] = LinkSlot::Free(self.free_head);
                self.free_head = Some(slot);
            }
        }
    }

    /// Position of the next node.
    pub(super) fn step_next(&self, pos: Position) -> Result<Position> {
        let slot = self.resolve(pos, "increment")?;
        match self.next_of(slot) {
            Some(next) => Ok(self.position_of(next)),
            None => Error::InvalidIterator.raise("increment"),
        }
    }

    /// Position of the previous node.
    pub(super) fn step_prev(&self, pos: Position) -> Result<Position> {
        let slot = self.resolve(pos, "decrement")?;
        match self.prev_of(slot) {
            Some(prev) => Ok(self.position_of(prev)),
            None => Error::InvalidIterator.raise("decrement"),
        }
    }

    /// Applies `delta` single steps, forwards for positive values.
    pub(super) fn step_by(&self, mut pos: Position, delta: isize) -> Result<Position> {
        for _ in 0..delta.unsigned_abs() {
            pos = if delta > 0 {
                self.step_next(pos)?
            } else {
                self.step_prev(pos)?
            };
        }
        Ok(pos)
    }

    /// Element stored at `pos`. The sentinel has no element.
    pub(super) fn value_at(&self, pos: Position) -> Result<&T> {
        let slot = self.resolve(pos, "dereference")?;
        if self.next_of(slot).is_none() {
            return Error::InvalidIterator.raise("dereference");
        }
        match self.values[slot].as_ref() {
            Some(value) => Ok(value),
            None => Error::InvalidIterator.raise("dereference"),
        }
    }

    pub(super) fn value_at_mut(&mut self, pos: Position) -> Result<&mut T> {
        let slot = self.resolve(pos, "dereference")?;
        if self.next_of(slot).is_none() {
            return Error::InvalidIterator.raise("dereference");
        }
        match self.values[slot].as_mut() {
            Some(value) => Ok(value),
            None => Error::InvalidIterator.raise("dereference"),
        }
    }

    /// Position of the `index`-th element; `len` gives the end. O(index).
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] if `index > len`.
    pub fn position(&self, index: usize) -> Result<Position> {
        if index > self.len {
            return Error::InvalidIterator.raise("position");
        }
        let mut slot = self.head;
        for _ in 0..index {
            slot = self.next_of(slot).unwrap_or(SENTINEL);
        }
        Ok(self.position_of(slot))
    }

    /// Read-only cursor at the first element (the sentinel, if empty).
    pub fn cbegin(&self) -> ConstCursor<'_, T> {
        ConstCursor::new(self, self.position_of(self.head))
    }

    /// Read-only cursor at the end sentinel.
    pub fn cend(&self) -> ConstCursor<'_, T> {
        ConstCursor::new(self, self.position_of(SENTINEL))
    }

    /// Mutable cursor at the first element (the sentinel, if empty).
    pub fn begin(&mut self) -> CursorMut<'_, T> {
        let pos = self.position_of(self.head);
        CursorMut::new(self, pos)
    }

    /// Mutable cursor at the end sentinel.
    pub fn end(&mut self) -> CursorMut<'_, T> {
        let pos = self.position_of(SENTINEL);
        CursorMut::new(self, pos)
    }

    /// Read-only cursor at `pos`.
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] if `pos` is not a live position of this list.
    pub fn cursor(&self, pos: Position) -> Result<ConstCursor<'_, T>> {
        self.resolve(pos, "cursor")?;
        Ok(ConstCursor::new(self, pos))
    }

    /// Mutable cursor at `pos`.
    ///
    /// # Errors
    /// [`Error::InvalidIterator`] if `pos` is not a live position of this list.
    pub fn cursor_mut(&mut self, pos: Position) -> Result<CursorMut<'_, T>> {
        self.resolve(pos, "cursor_mut")?;
        Ok(CursorMut::new(self, pos))
    }

    /// First element, if any.
    pub fn front(&self) -> Option<&T> {
        self.values[self.head].as_ref()
    }

    /// Last element, if any.
    pub fn back(&self) -> Option<&T> {
        self.prev_of(SENTINEL).and_then(|last| self.values[last].as_ref())
    }

    /// First element mutably, if any.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let head = self.head;
        self.values[head].as_mut()
    }

    /// Last element mutably, if any.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.prev_of(SENTINEL)?;
        self.values[last].as_mut()
    }

    /// Iterates over the elements front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Iterates mutably over the elements front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Slot indices of the elements, front to back.
    pub(super) fn slot_order(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.len);
        let mut slot = self.head;
        while slot != SENTINEL {
            order.push(slot);
            slot = self.next_of(slot).unwrap_or(SENTINEL);
        }
        order
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len);
        for item in self {
            copy.append(item.clone());
        }
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        for item in source {
            self.append(item.clone());
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for item in self {
            item.hash(state);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(items: [T; N]) -> Self {
        let mut list = Self::with_capacity(N);
        for item in items {
            list.append(item);
        }
        list
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        for item in iter {
            list.append(item);
        }
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Sequence<T> for LinkedList<T> {
    type Position = Position;

    fn len(&self) -> usize {
        self.len
    }

    fn append(&mut self, item: T) {
        LinkedList::append(self, item);
    }

    fn prepend(&mut self, item: T) {
        LinkedList::prepend(self, item);
    }

    fn pop_first(&mut self) -> Result<T> {
        LinkedList::pop_first(self)
    }

    fn pop_last(&mut self) -> Result<T> {
        LinkedList::pop_last(self)
    }

    fn clear(&mut self) {
        LinkedList::clear(self);
    }

    fn begin_position(&self) -> Position {
        self.position_of(self.head)
    }

    fn end_position(&self) -> Position {
        self.position_of(SENTINEL)
    }

    fn position(&self, index: usize) -> Result<Position> {
        LinkedList::position(self, index)
    }

    fn insert(&mut self, pos: Position, item: T) -> Result<()> {
        LinkedList::insert(self, pos, item)
    }

    fn erase(&mut self, pos: Position) -> Result<T> {
        LinkedList::erase(self, pos)
    }

    fn erase_range(&mut self, first: Position, last: Position) -> Result<()> {
        LinkedList::erase_range(self, first, last)
    }
}
