//! Arena-backed doubly linked list for the Stow container library.
//!
//! [`List`] stores its nodes in a slot arena — a growable run of slots plus
//! a free-list of vacant indices — instead of individually boxed nodes with
//! raw back-pointers. `next`/`prev` are slot indices: the forward chain and
//! the arena own the nodes, "previous" is a pure navigation relation, and
//! use-after-free or double-free cannot be expressed.
//!
//! # Architecture
//!
//! ```text
//! List
//! ├── NodeArena → slots: [Option<Node>] + free-list of vacant indices
//! ├── first / last slot indices (None iff empty)
//! └── Cursor (Copy token, resolved by the list; None = end sentinel)
//! ```
//!
//! Every operation that allocates is fallible through
//! [`AllocError`](stow_core::AllocError) and leaves the list unchanged on
//! failure, except `resize` growth, which documents partial application.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod arena;
pub mod cursor;
pub mod error;
pub mod iter;
pub mod list;

pub use cursor::Cursor;
pub use error::ListError;
pub use iter::Iter;
pub use list::List;
