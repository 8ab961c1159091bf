//! The [`Array`] fixed-size sequence.
//!
//! `Array<T, N>` is the non-allocating strict subset of the
//! [`Vector`](crate::Vector) contract: same indexing, clamped assignment,
//! and iteration rules, with the length fixed at compile time and no
//! failure paths anywhere.

use std::ops::{Index, IndexMut};

/// A fixed-size inline sequence of `N` elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Array<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> Array<T, N> {
    /// Create an array from its element values.
    pub fn new(data: [T; N]) -> Self {
        Self { data }
    }

    /// Number of elements — always `N`.
    pub fn len(&self) -> usize {
        N
    }

    /// Whether the array holds no elements — only for `N == 0`.
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Shared view of the elements.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable view of the elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Reference to the element at `index`, or `None` out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Mutable reference to the element at `index`, or `None` out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Iterate the elements front to back.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate the elements front to back with mutable access.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Consume the array, yielding the inner element array.
    pub fn into_inner(self) -> [T; N] {
        self.data
    }
}

impl<T: Clone, const N: usize> Array<T, N> {
    /// Assign clones of `values` into existing slots starting at `offset`.
    ///
    /// Assignment stops at the end of the array or the end of `values`,
    /// whichever comes first — the same clamping rule as the dynamic
    /// array's `assign`.
    pub fn assign(&mut self, offset: usize, values: &[T]) {
        for (slot, value) in self.data.iter_mut().skip(offset).zip(values) {
            *slot = value.clone();
        }
    }
}

impl<T: Default, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Self {
            data: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T, N> {
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> Index<usize> for Array<T, N> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= N`. Use [`Array::get`] for the checked variant.
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Array<T, N> {
    /// # Panics
    ///
    /// Panics if `index >= N`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Array<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Array<T, N> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const N: usize> IntoIterator for Array<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fills_with_element_default() {
        let a: Array<u32, 3> = Array::default();
        assert_eq!(a.as_slice(), &[0, 0, 0]);
    }

    #[test]
    fn len_is_const() {
        let a: Array<u8, 5> = Array::default();
        assert_eq!(a.len(), 5);
        assert!(!a.is_empty());
    }

    #[test]
    fn indexing_reads_and_writes() {
        let mut a = Array::new([1, 2, 3]);
        a[1] = 20;
        assert_eq!(a[1], 20);
        assert_eq!(a.get(3), None);
    }

    #[test]
    fn assign_clamps_like_vector() {
        let mut a: Array<u32, 4> = Array::default();
        a.assign(2, &[7, 8, 9]);
        assert_eq!(a.as_slice(), &[0, 0, 7, 8]);
    }

    #[test]
    fn iteration_yields_in_order() {
        let a = Array::new([1, 2, 3]);
        let collected: Vec<u32> = a.iter().copied().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[test]
    fn copy_is_independent() {
        let a = Array::new([1, 2]);
        let mut b = a;
        b[0] = 9;
        assert_eq!(a.as_slice(), &[1, 2]);
        assert_eq!(b.as_slice(), &[9, 2]);
    }
}
