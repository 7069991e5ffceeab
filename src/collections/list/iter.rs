//! Standard-library iterators over a [`LinkedList`].

use super::linked_list::SENTINEL;
use super::LinkedList;
use core::iter::FusedIterator;

/// Borrowing iterator returned by [`LinkedList::iter`].
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(list: &'a LinkedList<T>) -> Self {
        Self {
            list,
            front: list.head,
            back: list.prev_of(SENTINEL).unwrap_or(SENTINEL),
            remaining: list.len(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.front;
        self.front = self.list.next_of(slot).unwrap_or(SENTINEL);
        self.remaining -= 1;
        self.list.values[slot].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.back;
        self.back = self.list.prev_of(slot).unwrap_or(SENTINEL);
        self.remaining -= 1;
        self.list.values[slot].as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator returned by [`LinkedList::iter_mut`].
///
/// Node order differs from slot order, so construction walks the links once
/// and collects the element references up front. O(n) setup.
pub struct IterMut<'a, T> {
    items: std::vec::IntoIter<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(list: &'a mut LinkedList<T>) -> Self {
        let order = list.slot_order();
        let mut by_slot: Vec<Option<&'a mut T>> = list.values.iter_mut().map(Option::as_mut).collect();
        let items: Vec<&'a mut T> = order.into_iter().filter_map(|slot| by_slot[slot].take()).collect();
        Self { items: items.into_iter() }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator returned by `LinkedList::into_iter`.
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(list: LinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_last().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
