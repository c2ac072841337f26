//! Strongly-typed identifiers for line positions and simulation steps.

use std::fmt;

/// Index of a machine within the line.
///
/// Positions are assigned once at construction (`0..len`) and never
/// change. `Position(0)` is the left end of the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(pub u32);

impl Position {
    /// The position as a buffer index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Position {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing step counter.
///
/// `StepId(0)` is the seeded line; each synchronous step advances it by one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct StepId(pub u64);

impl StepId {
    /// The step that follows this one.
    ///
    /// Returns `None` on `u64` overflow.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_index_matches_value() {
        assert_eq!(Position(7).index(), 7);
        assert_eq!(Position::from(3), Position(3));
    }

    #[test]
    fn step_next_advances_and_saturates_to_none() {
        assert_eq!(StepId(0).next(), Some(StepId(1)));
        assert_eq!(StepId(u64::MAX).next(), None);
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(Position(12).to_string(), "12");
        assert_eq!(StepId(40).to_string(), "40");
    }
}
