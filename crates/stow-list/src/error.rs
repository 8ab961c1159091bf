//! List-specific error types.

use std::error::Error;
use std::fmt;

use stow_core::AllocError;

/// Errors from positional list operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListError {
    /// A node slot could not be allocated.
    Alloc(AllocError),
    /// The cursor denotes the end sentinel (or no longer resolves to a
    /// live node), so there is no position to splice against. The list is
    /// unchanged.
    EndCursor,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alloc(err) => write!(f, "{err}"),
            Self::EndCursor => write!(f, "cursor denotes the end sentinel"),
        }
    }
}

impl Error for ListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Alloc(err) => Some(err),
            Self::EndCursor => None,
        }
    }
}

impl From<AllocError> for ListError {
    fn from(err: AllocError) -> Self {
        Self::Alloc(err)
    }
}
