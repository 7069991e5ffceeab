//! `Buffer`: the owned, fixed-capacity slot array behind [`Vector`](super::Vector).
//!
//! The buffer never grows on its own. `Vector` decides when to call
//! [`Buffer::reallocate`], which moves every live element into a freshly
//! allocated slot array and releases the old one in a single step.
//!
//! Slots `[0, len)` are always `Some`; slots `[len, capacity)` are always `None`.

/// Owned slot storage with an explicit capacity.
pub(crate) struct Buffer<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

impl<T> Buffer<T> {
    /// Allocates `capacity` empty slots.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Self::empty_slots(capacity),
            len: 0,
        }
    }

    fn empty_slots(capacity: usize) -> Box<[Option<T>]> {
        core::iter::repeat_with(|| None).take(capacity).collect()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Moves the live elements into a new allocation of `capacity` slots.
    pub(crate) fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len, "reallocation would drop live elements");
        let old = core::mem::replace(&mut self.slots, Self::empty_slots(capacity));
        for (dst, src) in self.slots.iter_mut().zip(old.into_vec().into_iter().take(self.len)) {
            *dst = src;
        }
    }

    /// Writes `value` into the first free slot. The buffer must not be full.
    pub(crate) fn push(&mut self, value: T) {
        debug_assert!(!self.is_full());
        self.slots[self.len] = Some(value);
        self.len += 1;
    }

    /// Places `value` at `index`, shifting `[index, len)` right by one.
    ///
    /// The buffer must not be full and `index <= len`.
    pub(crate) fn insert(&mut self, index: usize, value: T) {
        debug_assert!(!self.is_full());
        debug_assert!(index <= self.len);
        self.slots[self.len] = Some(value);
        self.slots[index..=self.len].rotate_right(1);
        self.len += 1;
    }

    /// Removes the element at `index`, shifting the tail left by one.
    pub(crate) fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let value = self.slots[index].take();
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        value
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.slots[self.len].take()
    }

    /// Drops `[first, last)` and shifts the tail left by the range width.
    pub(crate) fn remove_range(&mut self, first: usize, last: usize) {
        debug_assert!(first <= last && last <= self.len);
        for slot in &mut self.slots[first..last] {
            *slot = None;
        }
        self.slots[first..self.len].rotate_left(last - first);
        self.len -= last - first;
    }

    pub(crate) fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.live().get(index).and_then(Option::as_ref)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.live_mut().get_mut(index).and_then(Option::as_mut)
    }

    /// The occupied prefix of the slot array.
    #[inline]
    pub(crate) fn live(&self) -> &[Option<T>] {
        &self.slots[..self.len]
    }

    #[inline]
    pub(crate) fn live_mut(&mut self) -> &mut [Option<T>] {
        &mut self.slots[..self.len]
    }

    /// Gives up the allocation, keeping only the occupied prefix.
    pub(crate) fn into_live(self) -> Vec<Option<T>> {
        let mut slots = self.slots.into_vec();
        slots.truncate(self.len);
        slots
    }
}
