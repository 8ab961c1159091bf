//! The [`Pair`] two-field value aggregate.

/// A trivial two-field aggregate with independently chosen field types.
///
/// `Pair` performs no allocation and has no invariants; it exists as a
/// dependency-free helper for callers that want two values travelling
/// together without reaching for a tuple.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pair<A, B> {
    /// First value of the pair.
    pub first: A,
    /// Second value of the pair.
    pub second: B,
}

impl<A, B> Pair<A, B> {
    /// Create a pair from its two values.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Split the pair back into a tuple.
    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self { first, second }
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(pair: Pair<A, B>) -> Self {
        (pair.first, pair.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stores_both_fields() {
        let p = Pair::new(3u32, "three");
        assert_eq!(p.first, 3);
        assert_eq!(p.second, "three");
    }

    #[test]
    fn default_is_field_defaults() {
        let p: Pair<u32, bool> = Pair::default();
        assert_eq!(p, Pair::new(0, false));
    }

    #[test]
    fn tuple_round_trip() {
        let p: Pair<i8, i16> = (-1, 300).into();
        assert_eq!(p.into_tuple(), (-1, 300));
    }
}
