//! Contiguous sequences for the Stow container library.
//!
//! Two types share one contract:
//!
//! - [`Vector`]: a resizable contiguous sequence backed by a single
//!   exact-fit heap [`Block`](stow_alloc::Block). Every length change is an
//!   exact reallocation; every grow is fallible and leaves the vector
//!   untouched on failure.
//! - [`Array`]: the non-allocating strict subset — a fixed-size inline
//!   sequence with the same indexing, assignment, and iteration rules and
//!   no failure paths.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod vector;

pub use array::Array;
pub use vector::Vector;
