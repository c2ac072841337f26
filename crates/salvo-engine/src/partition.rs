//! Squads between consecutive generals.
//!
//! Every promotion splits the squad it happens in. A [`Segment`] is one of
//! the resulting sub-squads: two generals and the soldiers between them.
//! The engine logs the segment layout after each promotion.

use salvo_core::{LineReader, Position};

/// A sub-squad bounded by generals at `left` and `right` (inclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Left bounding general.
    pub left: Position,
    /// Right bounding general.
    pub right: Position,
}

impl Segment {
    /// Number of machines, both generals included.
    pub fn len(&self) -> u32 {
        self.right.0 - self.left.0 + 1
    }

    /// Always `false`: a segment holds at least its two generals.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of soldiers strictly between the generals.
    pub fn interior(&self) -> u32 {
        self.len() - 2
    }

    /// Whether every machine in the segment is a general.
    pub fn is_settled(&self) -> bool {
        self.interior() == 0
    }
}

/// Split `line` at its generals.
///
/// Returns one segment per pair of consecutive generals, left to right.
/// A line with fewer than two generals has no segments.
pub fn segments(line: &dyn LineReader) -> Vec<Segment> {
    let generals: Vec<Position> = line
        .machines()
        .iter()
        .enumerate()
        .filter(|(_, m)| m.is_general())
        .map(|(i, _)| Position(i as u32))
        .collect();
    generals
        .windows(2)
        .map(|w| Segment {
            left: w[0],
            right: w[1],
        })
        .collect()
}
