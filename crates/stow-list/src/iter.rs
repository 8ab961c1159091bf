//! Borrowing iteration over a [`List`].

use crate::list::List;

/// A double-ended iterator over a list's elements.
///
/// Produced by [`List::iter`]. Lazy, finite, and restartable: a fresh
/// iterator after a mutation observes the new state. Structural mutation
/// during iteration is prevented by the borrow it holds.
pub struct Iter<'a, T> {
    list: &'a List<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            list,
            front: list.first,
            back: list.last,
            remaining: list.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front?;
        let node = self.list.node(idx);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back?;
        let node = self.list.node(idx);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_iteration_in_order() {
        let list = List::try_from([1, 2, 3]).unwrap();
        let collected: Vec<u32> = list.iter().copied().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[test]
    fn reverse_iteration_in_order() {
        let list = List::try_from([1, 2, 3]).unwrap();
        let collected: Vec<u32> = list.iter().rev().copied().collect();
        assert_eq!(collected, vec![3, 2, 1]);
    }

    #[test]
    fn meet_in_the_middle() {
        let list = List::try_from([1, 2, 3, 4]).unwrap();
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn exact_size_tracks_remaining() {
        let list = List::try_from([1, 2, 3]).unwrap();
        let mut iter = list.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn restart_reflects_mutation() {
        let mut list = List::try_from([1]).unwrap();
        assert_eq!(list.iter().count(), 1);
        list.push_back(2).unwrap();
        assert_eq!(list.iter().count(), 2);
    }

    #[test]
    fn empty_list_yields_nothing() {
        let list: List<u32> = List::new();
        assert_eq!(list.iter().next(), None);
    }
}
