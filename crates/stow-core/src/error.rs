//! Shared error types for the Stow containers.

use std::error::Error;
use std::fmt;

/// A heap request could not be satisfied.
///
/// Every container operation that allocates surfaces this error through its
/// `Result` instead of panicking or aborting. For single-step operations
/// (push, pop, insert, remove) the container is left in its previous valid
/// state; explicitly bulk operations document their own partial-application
/// policy at the call site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocError {
    /// Number of elements the failed request asked for.
    pub requested: usize,
}

impl AllocError {
    /// Create an error for a failed request of `requested` elements.
    pub fn new(requested: usize) -> Self {
        Self { requested }
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "heap allocation failed: requested {} elements",
            self.requested
        )
    }
}

impl Error for AllocError {}
