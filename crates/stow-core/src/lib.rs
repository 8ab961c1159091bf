//! Core types for the Stow container library.
//!
//! This is the leaf crate with zero dependencies. It defines the shared
//! error type for allocation failures and the [`Pair`] value aggregate.
//! The containers themselves live in `stow-alloc`, `stow-vec`, and
//! `stow-list`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod pair;

pub use error::AllocError;
pub use pair::Pair;
