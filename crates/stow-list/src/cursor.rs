//! The [`Cursor`] position token.
//!
//! A cursor names one node position inside a [`List`](crate::List). It is a
//! plain `Copy` token holding a slot index — it owns nothing and borrows
//! nothing, and is resolved against the list on every use
//! ([`List::get`](crate::List::get), [`List::next`](crate::List::next),
//! splice operations). The end sentinel — one past the last node — is the
//! cursor with no slot; it compares equal to itself and must never be
//! dereferenced, only compared against.
//!
//! # Staleness
//!
//! Structural mutation of the list invalidates cursors obtained before it.
//! A stale cursor is harmless but unspecified: it resolves to nothing, or —
//! if its slot has since been reused — to the node that now occupies the
//! slot. It can never observe freed memory.

/// A non-owning position token for one list node.
///
/// Equality is slot identity: two cursors are equal when they denote the
/// same node slot (or are both the end sentinel).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Cursor {
    slot: Option<usize>,
}

impl Cursor {
    /// Create a cursor for `slot` (`None` = end sentinel).
    pub(crate) fn new(slot: Option<usize>) -> Self {
        Self { slot }
    }

    /// The end sentinel: the one-past-last position of every list.
    pub fn end() -> Self {
        Self { slot: None }
    }

    /// Whether this cursor is the end sentinel.
    pub fn is_end(&self) -> bool {
        self.slot.is_none()
    }

    /// The slot index this cursor denotes, if any.
    pub(crate) fn slot(&self) -> Option<usize> {
        self.slot
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::end()
    }
}
