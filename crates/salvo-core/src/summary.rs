//! Render-ready per-position summaries.

use std::fmt;

use crate::id::Position;
use crate::machine::{Activity, Color, Direction, Kind, Payload};

/// Flattened view of one machine, in the order renderers print it.
///
/// The [`Display`](fmt::Display) form uses the legend notation:
///
/// ```text
/// |<kind>[R][t[<timer>]]<direction>[<payload>]|
/// ```
///
/// where kind is `G`/`g` (active/passive general) or `S`/`s`.
///
/// ```
/// use salvo_core::{General, Machine, Position};
///
/// let m = Machine::General(General::left_end());
/// assert_eq!(m.summary(Position(0)).to_string(), "|GRt[0]->|");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MachineSummary {
    /// Position in the line.
    pub position: Position,
    /// General or soldier.
    pub kind: Kind,
    /// Active or passive.
    pub activity: Activity,
    /// Black or red.
    pub color: Color,
    /// Midpoint-probing flag.
    pub testing: bool,
    /// Soldier timer (0 for generals).
    pub timer: u8,
    /// Outgoing message direction.
    pub direction: Direction,
    /// Outgoing message payload.
    pub payload: Payload,
}

impl MachineSummary {
    /// Kind glyph: upper case when active.
    pub fn kind_glyph(&self) -> char {
        match (self.kind, self.activity) {
            (Kind::General, Activity::Active) => 'G',
            (Kind::General, Activity::Passive) => 'g',
            (Kind::Soldier, Activity::Active) => 'S',
            (Kind::Soldier, Activity::Passive) => 's',
        }
    }
}

impl fmt::Display for MachineSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|{}", self.kind_glyph())?;
        if self.color == Color::Red {
            f.write_str("R")?;
        }
        if self.testing {
            write!(f, "t[{}]", self.timer)?;
        }
        write!(f, "{}{}|", self.direction.glyph(), self.payload.glyph())
    }
}
