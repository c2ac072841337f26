//! 1D line with absorbing edges.

use crate::error::SpaceError;
use salvo_core::{Position, Side};
use smallvec::{smallvec, SmallVec};

/// A one-dimensional line of machines.
///
/// Each machine has position `i` where `0 <= i < len`. Edges absorb: the
/// machine at position 0 has no left neighbour and the machine at
/// `len - 1` has no right neighbour.
///
/// # Examples
///
/// ```
/// use salvo_core::{Position, Side};
/// use salvo_space::Line;
///
/// let line = Line::new(5).unwrap();
/// assert_eq!(line.len(), 5);
///
/// // Interior machine has two neighbours.
/// assert_eq!(line.neighbours(Position(2)).len(), 2);
///
/// // End machine has only one.
/// assert_eq!(line.neighbour(Position(0), Side::Left), None);
/// assert_eq!(line.neighbour(Position(0), Side::Right), Some(Position(1)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Line {
    len: u32,
}

impl Line {
    /// Maximum length: neighbour arithmetic stays inside `i32`.
    pub const MAX_LEN: u32 = i32::MAX as u32;

    /// Create a new line with `len` machines.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if `len == 0`, or
    /// `Err(SpaceError::LengthTooLarge)` if `len > i32::MAX`.
    pub fn new(len: u32) -> Result<Self, SpaceError> {
        if len == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if len > Self::MAX_LEN {
            return Err(SpaceError::LengthTooLarge {
                value: u64::from(len),
                max: u64::from(Self::MAX_LEN),
            });
        }
        Ok(Self { len })
    }

    /// Number of machines.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Always returns `false`; construction rejects `len == 0`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Leftmost position.
    pub fn first(&self) -> Position {
        Position(0)
    }

    /// Rightmost position.
    pub fn last(&self) -> Position {
        Position(self.len - 1)
    }

    /// The neighbour on `side` of `position`, if it exists.
    #[inline]
    pub fn neighbour(&self, position: Position, side: Side) -> Option<Position> {
        match side {
            Side::Left => position.0.checked_sub(1).map(Position),
            Side::Right => {
                let next = position.0 + 1;
                (next < self.len).then_some(Position(next))
            }
        }
    }

    /// All existing neighbours of `position`, left first.
    pub fn neighbours(&self, position: Position) -> SmallVec<[(Side, Position); 2]> {
        let mut out: SmallVec<[(Side, Position); 2]> = smallvec![];
        for side in [Side::Left, Side::Right] {
            if let Some(n) = self.neighbour(position, side) {
                out.push((side, n));
            }
        }
        out
    }

    /// Positions in canonical (left-to-right) order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        (0..self.len).map(Position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_rejects_zero() {
        assert_eq!(Line::new(0), Err(SpaceError::EmptySpace));
    }

    #[test]
    fn new_rejects_oversized() {
        let err = Line::new(Line::MAX_LEN + 1).unwrap_err();
        assert!(matches!(err, SpaceError::LengthTooLarge { .. }));
    }

    #[test]
    fn neighbours_interior() {
        let line = Line::new(5).unwrap();
        let n = line.neighbours(Position(2));
        assert_eq!(
            n.as_slice(),
            &[(Side::Left, Position(1)), (Side::Right, Position(3))]
        );
    }

    #[test]
    fn neighbours_left_edge() {
        let line = Line::new(5).unwrap();
        let n = line.neighbours(Position(0));
        assert_eq!(n.as_slice(), &[(Side::Right, Position(1))]);
    }

    #[test]
    fn neighbours_right_edge() {
        let line = Line::new(5).unwrap();
        let n = line.neighbours(Position(4));
        assert_eq!(n.as_slice(), &[(Side::Left, Position(3))]);
    }

    #[test]
    fn neighbours_single_machine() {
        let line = Line::new(1).unwrap();
        assert!(line.neighbours(Position(0)).is_empty());
        assert_eq!(line.first(), line.last());
    }

    #[test]
    fn positions_are_canonical() {
        let line = Line::new(4).unwrap();
        let all: Vec<u32> = line.positions().map(|p| p.0).collect();
        assert_eq!(all, vec![0, 1, 2, 3]);
    }

    proptest! {
        #[test]
        fn neighbour_relation_is_symmetric(len in 1u32..200, raw in 0u32..200) {
            let line = Line::new(len).unwrap();
            let p = Position(raw % len);
            for side in [Side::Left, Side::Right] {
                if let Some(n) = line.neighbour(p, side) {
                    prop_assert_eq!(line.neighbour(n, side.opposite()), Some(p));
                    prop_assert!(n.0 < len);
                }
            }
        }

        #[test]
        fn interior_has_two_neighbours(len in 3u32..200, raw in 0u32..200) {
            let line = Line::new(len).unwrap();
            let p = Position(1 + raw % (len - 2));
            prop_assert_eq!(line.neighbours(p).len(), 2);
            prop_assert!(p != line.first() && p != line.last());
        }
    }
}
