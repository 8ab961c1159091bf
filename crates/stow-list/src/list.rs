//! The [`List`] doubly linked sequence.

use crate::arena::{Node, NodeArena};
use crate::cursor::Cursor;
use crate::error::ListError;
use crate::iter::Iter;

use stow_core::AllocError;

use std::fmt;

/// A doubly linked sequence with arena-backed nodes.
///
/// `first` and `last` are slot indices into the node arena (`None` iff the
/// list is empty); every node's `next`/`prev` are likewise indices.
/// Operations that allocate a node are fallible and leave the list
/// unchanged on failure; [`List::resize`] growth is the one documented
/// partial-application exception.
///
/// Structural invariants, maintained by every operation and exercised by
/// the property tests:
///
/// - `first` has no predecessor, `last` has no successor;
/// - neighbor links are mutually consistent
///   (`node.next.prev == node`, `node.prev.next == node`);
/// - walking `first` via `next` exactly `len` steps reaches `last`, and the
///   reverse walk from `last` reaches `first`.
pub struct List<T> {
    arena: NodeArena<T>,
    pub(crate) first: Option<usize>,
    pub(crate) last: Option<usize>,
    len: usize,
}

impl<T> List<T> {
    /// Create an empty list. Does not allocate.
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            first: None,
            last: None,
            len: 0,
        }
    }

    /// Number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reference to the first element, if any.
    pub fn front(&self) -> Option<&T> {
        Some(&self.node(self.first?).value)
    }

    /// Mutable reference to the first element, if any.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let idx = self.first?;
        Some(&mut self.node_mut(idx).value)
    }

    /// Reference to the last element, if any.
    pub fn back(&self) -> Option<&T> {
        Some(&self.node(self.last?).value)
    }

    /// Mutable reference to the last element, if any.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let idx = self.last?;
        Some(&mut self.node_mut(idx).value)
    }

    /// Splice a new node holding `value` in front of the first element.
    ///
    /// No-op returning `Err` if the node slot cannot be allocated.
    pub fn push_front(&mut self, value: T) -> Result<(), AllocError> {
        let idx = self.arena.insert(Node {
            value,
            prev: None,
            next: self.first,
        })?;
        match self.first {
            Some(old_first) => self.node_mut(old_first).prev = Some(idx),
            None => self.last = Some(idx),
        }
        self.first = Some(idx);
        self.len += 1;
        Ok(())
    }

    /// Splice a new node holding `value` after the last element.
    ///
    /// No-op returning `Err` if the node slot cannot be allocated.
    pub fn push_back(&mut self, value: T) -> Result<(), AllocError> {
        let idx = self.arena.insert(Node {
            value,
            prev: self.last,
            next: None,
        })?;
        match self.last {
            Some(old_last) => self.node_mut(old_last).next = Some(idx),
            None => self.first = Some(idx),
        }
        self.last = Some(idx);
        self.len += 1;
        Ok(())
    }

    /// Detach and return the first element.
    ///
    /// Returns `None` on an empty list — a true no-op, never an error.
    /// Removing the only element releases the arena storage entirely.
    pub fn pop_front(&mut self) -> Option<T> {
        let idx = self.first?;
        let node = self
            .arena
            .vacate(idx)
            .expect("first always names a live slot");
        self.len -= 1;
        match node.next {
            Some(next) => {
                self.node_mut(next).prev = None;
                self.first = Some(next);
            }
            None => self.reset(),
        }
        Some(node.value)
    }

    /// Detach and return the last element.
    ///
    /// Returns `None` on an empty list — a true no-op, never an error.
    /// Removing the only element releases the arena storage entirely.
    pub fn pop_back(&mut self) -> Option<T> {
        let idx = self.last?;
        let node = self
            .arena
            .vacate(idx)
            .expect("last always names a live slot");
        self.len -= 1;
        match node.prev {
            Some(prev) => {
                self.node_mut(prev).next = None;
                self.last = Some(prev);
            }
            None => self.reset(),
        }
        Some(node.value)
    }

    /// Insert `value` immediately before the node denoted by `cursor`.
    ///
    /// Fails with [`ListError::EndCursor`] — no mutation — if the cursor is
    /// the end sentinel or no longer resolves to a live node: the sentinel
    /// carries no "previous" context to splice against. Inserting before
    /// the first node is the push-front special case. On success four links
    /// are rewired and the length grows by one.
    pub fn insert_before(&mut self, cursor: Cursor, value: T) -> Result<(), ListError> {
        let at = cursor.slot().ok_or(ListError::EndCursor)?;
        let prev = self.arena.get(at).ok_or(ListError::EndCursor)?.prev;
        match prev {
            Some(prev) => {
                let idx = self.arena.insert(Node {
                    value,
                    prev: Some(prev),
                    next: Some(at),
                })?;
                self.node_mut(prev).next = Some(idx);
                self.node_mut(at).prev = Some(idx);
                self.len += 1;
                Ok(())
            }
            None => Ok(self.push_front(value)?),
        }
    }

    /// Splice out and return the element denoted by `cursor`.
    ///
    /// Fails with [`ListError::EndCursor`] — no mutation — if the cursor is
    /// the end sentinel or no longer resolves to a live node. Removing the
    /// first or last node updates the list's own end references.
    pub fn remove(&mut self, cursor: Cursor) -> Result<T, ListError> {
        let at = cursor.slot().ok_or(ListError::EndCursor)?;
        let node = self.arena.vacate(at).ok_or(ListError::EndCursor)?;
        self.len -= 1;
        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.first = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.last = node.prev,
        }
        if self.len == 0 {
            self.reset();
        }
        Ok(node.value)
    }

    /// Drop every element and release the arena storage.
    ///
    /// Each node is dropped exactly once; teardown never recurses because
    /// nodes do not own each other. Idempotent.
    pub fn clear(&mut self) {
        self.reset();
    }

    /// Cursor at the first node (the end sentinel on an empty list).
    pub fn cursor_front(&self) -> Cursor {
        Cursor::new(self.first)
    }

    /// Cursor at the last node (the end sentinel on an empty list).
    pub fn cursor_back(&self) -> Cursor {
        Cursor::new(self.last)
    }

    /// The end sentinel cursor.
    pub fn cursor_end(&self) -> Cursor {
        Cursor::end()
    }

    /// The position one step toward the back of the list.
    ///
    /// Stepping from the last node — or from a cursor that does not resolve
    /// — yields the end sentinel.
    pub fn next(&self, cursor: Cursor) -> Cursor {
        match cursor.slot().and_then(|idx| self.arena.get(idx)) {
            Some(node) => Cursor::new(node.next),
            None => Cursor::end(),
        }
    }

    /// The position one step toward the front of the list.
    ///
    /// Stepping from the first node — or from a cursor that does not
    /// resolve — yields the end sentinel.
    pub fn prev(&self, cursor: Cursor) -> Cursor {
        match cursor.slot().and_then(|idx| self.arena.get(idx)) {
            Some(node) => Cursor::new(node.prev),
            None => Cursor::end(),
        }
    }

    /// Step `steps` positions toward the back, saturating at the end
    /// sentinel.
    pub fn seek_forward(&self, mut cursor: Cursor, steps: usize) -> Cursor {
        for _ in 0..steps {
            if cursor.is_end() {
                break;
            }
            cursor = self.next(cursor);
        }
        cursor
    }

    /// Step `steps` positions toward the front, saturating at the end
    /// sentinel.
    pub fn seek_back(&self, mut cursor: Cursor, steps: usize) -> Cursor {
        for _ in 0..steps {
            if cursor.is_end() {
                break;
            }
            cursor = self.prev(cursor);
        }
        cursor
    }

    /// Reference to the element denoted by `cursor`, if it resolves.
    pub fn get(&self, cursor: Cursor) -> Option<&T> {
        let idx = cursor.slot()?;
        Some(&self.arena.get(idx)?.value)
    }

    /// Mutable reference to the element denoted by `cursor`, if it
    /// resolves.
    pub fn get_mut(&mut self, cursor: Cursor) -> Option<&mut T> {
        let idx = cursor.slot()?;
        Some(&mut self.arena.get_mut(idx)?.value)
    }

    /// Iterate the elements front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Apply `f` to every element, front to back, with mutable access.
    ///
    /// The workspace forbids `unsafe`, so there is no `IterMut`; this is
    /// the bulk in-place mutation surface ([`List::get_mut`] is the
    /// positional one).
    pub fn for_each_mut(&mut self, mut f: impl FnMut(&mut T)) {
        let mut cursor = self.first;
        while let Some(idx) = cursor {
            let node = self.node_mut(idx);
            f(&mut node.value);
            cursor = node.next;
        }
    }

    fn reset(&mut self) {
        self.arena.release();
        self.first = None;
        self.last = None;
        self.len = 0;
    }

    pub(crate) fn node(&self, idx: usize) -> &Node<T> {
        self.arena.get(idx).expect("list links name live slots")
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        self.arena.get_mut(idx).expect("list links name live slots")
    }
}

impl<T: Clone> List<T> {
    /// Create a list of `n` clones of `fill`.
    pub fn with_len(n: usize, fill: &T) -> Result<Self, AllocError> {
        let mut list = Self::new();
        list.resize(n, fill)?;
        Ok(list)
    }

    /// Create a list holding clones of `values`, front to back.
    pub fn from_slice(values: &[T]) -> Result<Self, AllocError> {
        let mut list = Self::new();
        for value in values {
            list.push_back(value.clone())?;
        }
        Ok(list)
    }

    /// Resize to `new_len` elements.
    ///
    /// Grows by pushing clones of `fill` at the back; shrinks by popping
    /// from the front (the historical contract of this container). Growth
    /// failure is **partial application**: the list is left at whatever
    /// length was reached and `Err` is returned — it is not rolled back.
    pub fn resize(&mut self, new_len: usize, fill: &T) -> Result<(), AllocError> {
        while self.len < new_len {
            self.push_back(fill.clone())?;
        }
        while self.len > new_len {
            self.pop_front();
        }
        Ok(())
    }

    /// Allocate an independent copy, propagating allocation failure.
    ///
    /// All-or-nothing: on failure the partially built copy is dropped and
    /// the caller never observes it.
    pub fn try_clone(&self) -> Result<Self, AllocError> {
        let mut copy = Self::new();
        for value in self.iter() {
            copy.push_back(value.clone())?;
        }
        Ok(copy)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// `Clone` inherits the standard library's allocation behavior (abort on
/// exhaustion). [`List::try_clone`] is the failure-reporting path.
impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            // Out of memory with no way to report it; match the standard
            // library's collection behavior.
            Err(_) => std::process::abort(),
        }
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> TryFrom<&[T]> for List<T> {
    type Error = AllocError;

    fn try_from(values: &[T]) -> Result<Self, AllocError> {
        Self::from_slice(values)
    }
}

impl<T: Clone, const N: usize> TryFrom<[T; N]> for List<T> {
    type Error = AllocError;

    fn try_from(values: [T; N]) -> Result<Self, AllocError> {
        Self::from_slice(&values)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
