//! The exact-fit [`Block`] storage unit.
//!
//! A `Block<T>` owns one contiguous heap run of `T`. There is no spare
//! capacity: after every successful operation the block's capacity equals
//! its length, so the block's length is the single source of truth for how
//! much memory it holds. Growing is fallible and reports failure without
//! touching the existing allocation; shrinking returns the surplus to the
//! allocator and never fails.

use stow_core::AllocError;

/// An owned, exact-fit, contiguous heap block of `T`.
///
/// `Block` is the allocation primitive underneath the dynamic array. It
/// deliberately has no container conveniences — no indexing operators, no
/// iterators — only the sizing operations and raw slice access. Containers
/// layer their public surface on top.
///
/// Dropping a block releases its storage; [`Block::release`] does the same
/// eagerly and is idempotent.
#[derive(Debug)]
pub struct Block<T> {
    data: Vec<T>,
}

// Manual impl: the derive would demand `T: Default`, but an empty block
// exists for any element type.
impl<T> Default for Block<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// `Clone` inherits the standard library's allocation behavior (abort on
/// exhaustion). [`Block::try_clone`] is the failure-reporting path.
impl<T: Clone> Clone for Block<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl<T> Block<T> {
    /// Create an empty block. Does not allocate.
    pub fn empty() -> Self {
        Self { data: Vec::new() }
    }

    /// Number of elements in the block.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the block holds no elements (and thus no storage).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Capacity of the backing storage in elements.
    ///
    /// The exact-fit invariant keeps this equal to [`Block::len`] after
    /// every successful operation.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Shared view of the block's elements.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable view of the block's elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Drop all elements and return the storage to the allocator.
    ///
    /// No-op on an empty block; calling it twice is equivalent to calling
    /// it once.
    pub fn release(&mut self) {
        self.data = Vec::new();
    }

    /// Take the block's contents, leaving an empty block behind.
    ///
    /// This is the move-transfer primitive: no reallocation, the storage
    /// handle changes owners and the source is left valid-but-empty.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Grow the block by one element holding `value`.
    ///
    /// On failure the block is untouched and the error reports the total
    /// length that was requested.
    pub fn push(&mut self, value: T) -> Result<(), AllocError> {
        let requested = self.data.len() + 1;
        self.data
            .try_reserve_exact(1)
            .map_err(|_| AllocError::new(requested))?;
        self.data.push(value);
        Ok(())
    }

    /// Shrink the block by one element, returning it.
    ///
    /// Returns `None` on an empty block. Shrinking reallocates down to the
    /// exact new length and cannot fail; popping the last element releases
    /// the storage entirely.
    pub fn pop(&mut self) -> Option<T> {
        let value = self.data.pop()?;
        self.data.shrink_to_fit();
        Some(value)
    }

    /// Consume the block, yielding its elements as a `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Default> Block<T> {
    /// Allocate a block of `n` default-initialised elements.
    ///
    /// `n == 0` produces an empty block without touching the allocator.
    pub fn allocate(n: usize) -> Result<Self, AllocError> {
        let mut block = Self::empty();
        block.resize(n)?;
        Ok(block)
    }

    /// Resize the block to exactly `new_len` elements.
    ///
    /// The overlapping prefix is preserved. Growing default-initialises the
    /// new tail and fails with the block untouched if the heap request
    /// cannot be satisfied. Shrinking drops the surplus elements, returns
    /// the memory to the allocator, and never fails.
    pub fn resize(&mut self, new_len: usize) -> Result<(), AllocError> {
        let len = self.data.len();
        if new_len > len {
            self.data
                .try_reserve_exact(new_len - len)
                .map_err(|_| AllocError::new(new_len))?;
            self.data.resize_with(new_len, T::default);
        } else if new_len < len {
            self.data.truncate(new_len);
            self.data.shrink_to_fit();
        }
        Ok(())
    }
}

impl<T: Clone> Block<T> {
    /// Append `values` at the end of the block as a single reallocation.
    ///
    /// Equivalent to pushing each value in order, but the heap request
    /// happens once, up front. On failure the block is untouched.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), AllocError> {
        let requested = self.data.len() + values.len();
        self.data
            .try_reserve_exact(values.len())
            .map_err(|_| AllocError::new(requested))?;
        self.data.extend_from_slice(values);
        Ok(())
    }

    /// Allocate an independent block holding clones of this block's elements.
    pub fn try_clone(&self) -> Result<Self, AllocError> {
        let mut copy = Self::empty();
        copy.extend_from_slice(&self.data)?;
        Ok(copy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_block_has_no_storage() {
        let block: Block<u32> = Block::empty();
        assert_eq!(block.len(), 0);
        assert!(block.is_empty());
        assert_eq!(block.capacity(), 0);
    }

    #[test]
    fn allocate_default_initialises() {
        let block: Block<u32> = Block::allocate(4).unwrap();
        assert_eq!(block.as_slice(), &[0, 0, 0, 0]);
        assert_eq!(block.capacity(), 4);
    }

    #[test]
    fn allocate_zero_is_empty() {
        let block: Block<u32> = Block::allocate(0).unwrap();
        assert!(block.is_empty());
        assert_eq!(block.capacity(), 0);
    }

    #[test]
    fn resize_grow_preserves_prefix() {
        let mut block: Block<u32> = Block::allocate(2).unwrap();
        block.as_mut_slice().copy_from_slice(&[7, 8]);
        block.resize(4).unwrap();
        assert_eq!(block.as_slice(), &[7, 8, 0, 0]);
        assert_eq!(block.capacity(), 4);
    }

    #[test]
    fn resize_shrink_drops_tail_and_storage() {
        let mut block: Block<u32> = Block::allocate(5).unwrap();
        for (i, slot) in block.as_mut_slice().iter_mut().enumerate() {
            *slot = i as u32;
        }
        block.resize(2).unwrap();
        assert_eq!(block.as_slice(), &[0, 1]);
        assert_eq!(block.capacity(), 2);
    }

    #[test]
    fn resize_to_zero_releases() {
        let mut block: Block<u32> = Block::allocate(3).unwrap();
        block.resize(0).unwrap();
        assert!(block.is_empty());
        assert_eq!(block.capacity(), 0);
    }

    #[test]
    fn push_appends_exactly_one() {
        let mut block: Block<u32> = Block::empty();
        block.push(1).unwrap();
        block.push(2).unwrap();
        assert_eq!(block.as_slice(), &[1, 2]);
        assert_eq!(block.capacity(), 2);
    }

    #[test]
    fn pop_returns_last_and_shrinks() {
        let mut block: Block<u32> = Block::empty();
        block.extend_from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(block.pop(), Some(3));
        assert_eq!(block.capacity(), 2);
        assert_eq!(block.pop(), Some(2));
        assert_eq!(block.pop(), Some(1));
        assert_eq!(block.pop(), None);
        assert_eq!(block.capacity(), 0);
    }

    #[test]
    fn release_is_idempotent() {
        let mut block: Block<u32> = Block::allocate(3).unwrap();
        block.release();
        assert!(block.is_empty());
        block.release();
        assert!(block.is_empty());
        assert_eq!(block.capacity(), 0);
    }

    #[test]
    fn take_transfers_without_realloc() {
        let mut source: Block<u32> = Block::empty();
        source.extend_from_slice(&[1, 2, 3]).unwrap();
        let moved = source.take();
        assert_eq!(moved.as_slice(), &[1, 2, 3]);
        assert!(source.is_empty());
        assert_eq!(source.capacity(), 0);
    }

    #[test]
    fn extend_from_slice_is_single_grow() {
        let mut block: Block<u32> = Block::empty();
        block.extend_from_slice(&[1, 2]).unwrap();
        block.extend_from_slice(&[3, 4, 5]).unwrap();
        assert_eq!(block.as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(block.capacity(), 5);
    }

    #[test]
    fn try_clone_is_independent() {
        let mut block: Block<u32> = Block::empty();
        block.extend_from_slice(&[1, 2, 3]).unwrap();
        let mut copy = block.try_clone().unwrap();
        copy.as_mut_slice()[0] = 99;
        assert_eq!(block.as_slice(), &[1, 2, 3]);
        assert_eq!(copy.as_slice(), &[99, 2, 3]);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn allocate_then_len(n in 0usize..512) {
                let block: Block<u8> = Block::allocate(n).unwrap();
                prop_assert_eq!(block.len(), n);
                prop_assert_eq!(block.capacity(), n);
            }

            #[test]
            fn resize_sequence_keeps_exact_fit(sizes in proptest::collection::vec(0usize..256, 1..16)) {
                let mut block: Block<u16> = Block::empty();
                for &n in &sizes {
                    block.resize(n).unwrap();
                    prop_assert_eq!(block.len(), n);
                    prop_assert_eq!(block.capacity(), n);
                }
            }

            #[test]
            fn shrink_preserves_prefix(init in proptest::collection::vec(any::<u32>(), 1..64), cut in 0usize..64) {
                let mut block: Block<u32> = Block::empty();
                block.extend_from_slice(&init).unwrap();
                let new_len = cut.min(init.len());
                block.resize(new_len).unwrap();
                prop_assert_eq!(block.as_slice(), &init[..new_len]);
            }
        }
    }
}
