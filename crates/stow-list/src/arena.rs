//! Node slot arena with free-list reuse.
//!
//! Nodes live in a growable `Vec` of `Option` slots. Vacated slots go on a
//! free-list and are reused before the slot vector grows, so a long-lived
//! list that churns does not accumulate dead storage. Growing the slot
//! vector also reserves matching free-list capacity, which keeps removal
//! allocation-free (and therefore infallible).

use stow_core::AllocError;

/// One list node: the stored element plus its navigation links.
///
/// `next` and `prev` are slot indices into the owning arena. Only the arena
/// owns node storage; `prev` is a lookup relation, never a second owner.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}

/// Slot storage for list nodes.
#[derive(Debug)]
pub(crate) struct NodeArena<T> {
    /// All slots, live (`Some`) and vacant (`None`).
    slots: Vec<Option<Node<T>>>,
    /// Indices of vacant slots available for reuse.
    free: Vec<usize>,
}

impl<T> NodeArena<T> {
    /// Create an empty arena. Does not allocate.
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Place `node` in a slot, reusing a vacant one before growing.
    ///
    /// On failure the arena is untouched. Growth reserves free-list capacity
    /// for every slot that exists, so [`NodeArena::vacate`] never allocates.
    pub(crate) fn insert(&mut self, node: Node<T>) -> Result<usize, AllocError> {
        if let Some(idx) = self.free.pop() {
            debug_assert!(self.slots[idx].is_none(), "free-list slot must be vacant");
            self.slots[idx] = Some(node);
            return Ok(idx);
        }

        let requested = self.slots.len() + 1;
        self.slots
            .try_reserve(1)
            .map_err(|_| AllocError::new(requested))?;
        if self.free.capacity() < requested {
            self.free
                .try_reserve_exact(requested - self.free.len())
                .map_err(|_| AllocError::new(requested))?;
        }
        self.slots.push(Some(node));
        Ok(self.slots.len() - 1)
    }

    /// Take the node out of slot `idx`, leaving the slot vacant.
    ///
    /// Returns `None` if the slot does not exist or is already vacant.
    /// Never allocates: free-list capacity was reserved at insert time.
    pub(crate) fn vacate(&mut self, idx: usize) -> Option<Node<T>> {
        let node = self.slots.get_mut(idx)?.take()?;
        self.free.push(idx);
        Some(node)
    }

    /// Shared access to the node in slot `idx`, if it is live.
    pub(crate) fn get(&self, idx: usize) -> Option<&Node<T>> {
        self.slots.get(idx)?.as_ref()
    }

    /// Mutable access to the node in slot `idx`, if it is live.
    pub(crate) fn get_mut(&mut self, idx: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(idx)?.as_mut()
    }

    /// Drop every live node and return all storage to the allocator.
    ///
    /// Each node is dropped exactly once, by the slot vector; nodes do not
    /// own each other, so teardown never recurses. Idempotent.
    pub(crate) fn release(&mut self) {
        self.slots = Vec::new();
        self.free = Vec::new();
    }

    /// Total slots, live and vacant.
    #[cfg(test)]
    pub(crate) fn total_slots(&self) -> usize {
        self.slots.len()
    }

    /// Number of vacant slots awaiting reuse.
    #[cfg(test)]
    pub(crate) fn free_count(&self) -> usize {
        self.free.len()
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(value: u32) -> Node<u32> {
        Node {
            value,
            prev: None,
            next: None,
        }
    }

    #[test]
    fn insert_returns_sequential_indices() {
        let mut arena = NodeArena::new();
        assert_eq!(arena.insert(node(1)).unwrap(), 0);
        assert_eq!(arena.insert(node(2)).unwrap(), 1);
        assert_eq!(arena.total_slots(), 2);
    }

    #[test]
    fn vacated_slot_is_reused() {
        let mut arena = NodeArena::new();
        let a = arena.insert(node(1)).unwrap();
        arena.insert(node(2)).unwrap();
        let taken = arena.vacate(a).unwrap();
        assert_eq!(taken.value, 1);
        assert_eq!(arena.free_count(), 1);

        let b = arena.insert(node(3)).unwrap();
        assert_eq!(b, a, "vacant slot reused before growing");
        assert_eq!(arena.total_slots(), 2);
        assert_eq!(arena.free_count(), 0);
    }

    #[test]
    fn vacate_twice_returns_none() {
        let mut arena = NodeArena::new();
        let idx = arena.insert(node(1)).unwrap();
        assert!(arena.vacate(idx).is_some());
        assert!(arena.vacate(idx).is_none());
        assert_eq!(arena.free_count(), 1);
    }

    #[test]
    fn get_on_vacant_slot_is_none() {
        let mut arena = NodeArena::new();
        let idx = arena.insert(node(1)).unwrap();
        arena.vacate(idx);
        assert!(arena.get(idx).is_none());
        assert!(arena.get_mut(idx).is_none());
    }

    #[test]
    fn free_capacity_covers_all_slots() {
        let mut arena = NodeArena::new();
        let indices: Vec<usize> = (0..16).map(|i| arena.insert(node(i)).unwrap()).collect();
        // Vacating everything must fit in the reserved free-list capacity.
        let cap_before = {
            for &idx in &indices {
                arena.vacate(idx);
            }
            arena.free.capacity()
        };
        assert_eq!(arena.free_count(), 16);
        assert!(cap_before >= 16);
    }

    #[test]
    fn release_is_idempotent() {
        let mut arena = NodeArena::new();
        arena.insert(node(1)).unwrap();
        arena.release();
        assert_eq!(arena.total_slots(), 0);
        arena.release();
        assert_eq!(arena.total_slots(), 0);
    }
}
