//! Messages arriving at one position.

use salvo_core::{Payload, Side};

/// The payloads a machine receives from its two neighbours in one step.
///
/// A side with no neighbour, or whose neighbour's message is not directed
/// at this machine, reads as [`Payload::Empty`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Inbox {
    /// From the neighbour at `position - 1`.
    pub left: Payload,
    /// From the neighbour at `position + 1`.
    pub right: Payload,
}

impl Inbox {
    /// Build an inbox from the two sides.
    pub fn new(left: Payload, right: Payload) -> Self {
        Self { left, right }
    }

    /// The payload received from `side`.
    #[inline]
    pub fn from(&self, side: Side) -> Payload {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// `true` when nothing arrived from either side.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// `true` when `payload` arrived from at least one side.
    pub fn either(&self, payload: Payload) -> bool {
        self.left == payload || self.right == payload
    }

    /// `true` when `payload` arrived from both sides.
    pub fn both(&self, payload: Payload) -> bool {
        self.left == payload && self.right == payload
    }

    /// The first non-empty payload and the side it should be relayed
    /// toward, preferring the one that came from the left.
    ///
    /// A message from the left continues to the right and vice versa.
    /// Returns `(Side::Left, Payload::Empty)` when the inbox is empty.
    pub fn relay(&self) -> (Side, Payload) {
        if !self.left.is_empty() {
            (Side::Right, self.left)
        } else {
            (Side::Left, self.right)
        }
    }
}
