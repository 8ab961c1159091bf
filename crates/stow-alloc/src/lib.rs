//! Exact-fit fallible heap blocks for the Stow containers.
//!
//! A [`Block`] is the single storage unit backing [`stow-vec`]'s dynamic
//! array: one owned contiguous run of elements whose capacity always equals
//! its length. Every length change is an exact reallocation, every grow is
//! fallible through [`AllocError`], and a failed grow leaves the block
//! untouched.
//!
//! All storage is `Vec`-backed and default-initialised; there is no
//! `MaybeUninit` and no `unsafe` anywhere in this crate.
//!
//! [`stow-vec`]: https://docs.rs/stow-vec
//! [`AllocError`]: stow_core::AllocError

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod block;

pub use block::Block;
