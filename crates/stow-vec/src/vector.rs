//! The [`Vector`] dynamic array.
//!
//! A `Vector<T>` owns one exact-fit [`Block`] — its length and its capacity
//! are the same number, and every mutating operation that changes the length
//! reallocates to exactly the new size. This trades reallocation cost for a
//! memory footprint that never exceeds the live element count, which is the
//! policy the allocation-constrained consumers of this library want.

use stow_alloc::Block;
use stow_core::AllocError;

use std::fmt;
use std::ops::{Index, IndexMut};

/// A resizable contiguous sequence with exact-fit storage.
///
/// Growth is fallible: operations that allocate return
/// `Result<_, AllocError>` and leave the vector in its previous valid state
/// on failure. Shrinking and clearing never fail.
///
/// Moving a `Vector` is a plain Rust move (the block handle changes owners,
/// no reallocation); `std::mem::take` leaves the source valid-but-empty.
#[derive(Clone)]
pub struct Vector<T> {
    block: Block<T>,
}

// Manual impl: the derive would demand `T: Default`, but an empty vector
// exists for any element type (and `std::mem::take` relies on it).
impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Vector<T> {
    /// Create an empty vector. Does not allocate.
    pub fn new() -> Self {
        Self {
            block: Block::empty(),
        }
    }

    /// Number of elements in the vector.
    pub fn len(&self) -> usize {
        self.block.len()
    }

    /// Whether the vector holds no elements.
    pub fn is_empty(&self) -> bool {
        self.block.is_empty()
    }

    /// Shared view of the elements.
    pub fn as_slice(&self) -> &[T] {
        self.block.as_slice()
    }

    /// Mutable view of the elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.block.as_mut_slice()
    }

    /// Reference to the element at `index`, or `None` out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.block.as_slice().get(index)
    }

    /// Mutable reference to the element at `index`, or `None` out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.block.as_mut_slice().get_mut(index)
    }

    /// Reference to the first element, if any.
    pub fn first(&self) -> Option<&T> {
        self.block.as_slice().first()
    }

    /// Reference to the last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.block.as_slice().last()
    }

    /// Append `value` at the back, growing by exactly one element.
    ///
    /// No-op returning `Err` if the reallocation fails.
    pub fn push_back(&mut self, value: T) -> Result<(), AllocError> {
        self.block.push(value)
    }

    /// Remove and return the last element.
    ///
    /// Shrinks to the exact new length; removing the only element releases
    /// the backing block entirely. Returns `None` on an empty vector — the
    /// tolerated underflow case, not an error.
    pub fn pop_back(&mut self) -> Option<T> {
        self.block.pop()
    }

    /// Drop all elements and release the backing block.
    ///
    /// Idempotent: a second `clear` observes an already-empty vector and
    /// does nothing.
    pub fn clear(&mut self) {
        self.block.release();
    }

    /// Iterate the elements front to back.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.block.as_slice().iter()
    }

    /// Iterate the elements front to back with mutable access.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.block.as_mut_slice().iter_mut()
    }
}

impl<T: Default> Vector<T> {
    /// Create a vector of `n` default-initialised elements.
    pub fn with_len(n: usize) -> Result<Self, AllocError> {
        Ok(Self {
            block: Block::allocate(n)?,
        })
    }

    /// Resize to exactly `new_len` elements.
    ///
    /// The overlapping prefix is preserved; growth default-initialises the
    /// tail. On failure the vector is untouched and `Err` is returned.
    pub fn resize(&mut self, new_len: usize) -> Result<(), AllocError> {
        self.block.resize(new_len)
    }
}

impl<T: Clone> Vector<T> {
    /// Create a vector holding clones of `values`.
    pub fn from_slice(values: &[T]) -> Result<Self, AllocError> {
        let mut block = Block::empty();
        block.extend_from_slice(values)?;
        Ok(Self { block })
    }

    /// Append clones of `values` at the back as a single reallocation.
    ///
    /// Semantically a sequence of [`Vector::push_back`] calls, but the heap
    /// request happens once. On failure the vector is untouched — the array
    /// side of this library never partially applies a bulk operation.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), AllocError> {
        self.block.extend_from_slice(values)
    }

    /// Append the contents of `other` at the back as a single reallocation.
    pub fn append(&mut self, other: &Vector<T>) -> Result<(), AllocError> {
        self.block.extend_from_slice(other.as_slice())
    }

    /// Assign clones of `values` into existing slots starting at `offset`.
    ///
    /// Never resizes: assignment stops at the end of the vector or the end
    /// of `values`, whichever comes first. Offsets at or past the end
    /// assign nothing.
    pub fn assign(&mut self, offset: usize, values: &[T]) {
        let slots = self.block.as_mut_slice();
        for (slot, value) in slots.iter_mut().skip(offset).zip(values) {
            *slot = value.clone();
        }
    }

    /// Allocate an independent copy, propagating allocation failure.
    ///
    /// The `Clone` impl is the convenience path and inherits the standard
    /// library's abort-on-exhaustion behavior; callers in
    /// allocation-constrained settings use `try_clone`.
    pub fn try_clone(&self) -> Result<Self, AllocError> {
        Ok(Self {
            block: self.block.try_clone()?,
        })
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Use [`Vector::get`] for the checked
    /// variant.
    fn index(&self, index: usize) -> &T {
        &self.block.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.block.as_mut_slice()[index]
    }
}

impl<T: Clone> TryFrom<&[T]> for Vector<T> {
    type Error = AllocError;

    fn try_from(values: &[T]) -> Result<Self, AllocError> {
        Self::from_slice(values)
    }
}

impl<T: Clone, const N: usize> TryFrom<[T; N]> for Vector<T> {
    type Error = AllocError;

    fn try_from(values: [T; N]) -> Result<Self, AllocError> {
        Self::from_slice(&values)
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.block.into_vec().into_iter()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
