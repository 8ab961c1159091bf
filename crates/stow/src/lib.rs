//! Stow: small generic containers with fallible, exact-fit allocation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Stow sub-crates. For most users, adding `stow` as a single
//! dependency is sufficient.
//!
//! Two containers share one discipline: storage is exact-fit (capacity
//! always equals length), every operation that allocates reports failure
//! through a `Result` instead of panicking, and each container instance
//! has a single sequential owner — there is no internal locking and no
//! thread-safety story beyond what `Send`/`Sync` derive from the element
//! type.
//!
//! # Quick start
//!
//! ```rust
//! use stow::prelude::*;
//!
//! // A dynamic array built from a literal sequence.
//! let mut v = Vector::try_from([1, 2, 3]).unwrap();
//! v.push_back(4).unwrap();
//! assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
//!
//! // A doubly linked list with cursor-based splicing.
//! let mut list = List::try_from([5, 10, 20]).unwrap();
//! let at_ten = list.next(list.cursor_front());
//! assert_eq!(list.remove(at_ten), Ok(10));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![5, 20]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `stow-core` | [`AllocError`](types::AllocError), [`Pair`](types::Pair) |
//! | [`alloc`] | `stow-alloc` | The exact-fit [`Block`](alloc::Block) storage unit |
//! | [`vec`] | `stow-vec` | [`Vector`](vec::Vector) and the fixed [`Array`](vec::Array) |
//! | [`list`] | `stow-list` | [`List`](list::List), [`Cursor`](list::Cursor), iteration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Shared error type and the `Pair` aggregate (`stow-core`).
pub use stow_core as types;

/// Exact-fit fallible heap blocks (`stow-alloc`).
///
/// [`alloc::Block`] is the allocation primitive underneath
/// [`vec::Vector`]; most users never touch it directly.
pub use stow_alloc as alloc;

/// Contiguous sequences (`stow-vec`).
pub use stow_vec as vec;

/// The arena-backed doubly linked list (`stow-list`).
pub use stow_list as list;

pub mod prelude {
    //! Convenience re-export of the types most programs need.

    pub use stow_core::{AllocError, Pair};
    pub use stow_list::{Cursor, List, ListError};
    pub use stow_vec::{Array, Vector};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn facade_surface_is_usable_together() {
        let mut samples: Vector<Pair<u32, u32>> = Vector::new();
        samples.push_back(Pair::new(1, 10)).unwrap();
        samples.push_back(Pair::new(2, 20)).unwrap();

        let mut order: List<u32> = List::new();
        for pair in &samples {
            order.push_back(pair.first).unwrap();
        }
        assert_eq!(order.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    }
}
