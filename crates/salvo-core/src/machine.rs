//! The per-position machine record and its closed state/message enums.
//!
//! A [`Machine`] is either a [`General`] or a [`Soldier`]. Promotion is a
//! variant transition: a soldier is consumed by [`Soldier::promote`] and
//! replaced by a general. Generals have no timer, and colour is derived
//! from the variant (generals are red, soldiers are black), so a red
//! machine can never turn black again.

use crate::id::Position;
use crate::summary::MachineSummary;

/// Machine kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Drives probing rounds; bounds a squad.
    General,
    /// Relays and reacts to messages.
    Soldier,
}

/// Whether a machine takes part in the current probing round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Activity {
    /// Participates in the current round.
    Active,
    /// Only relays messages.
    Passive,
}

/// Machine colour. Red is the terminal ("fire") colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Not yet part of a synchronized squad boundary.
    Black,
    /// Terminal colour.
    Red,
}

/// One side of a machine in the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Towards position 0.
    Left,
    /// Towards position `len - 1`.
    Right,
}

impl Side {
    /// The other side.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The message direction that points at this side.
    #[inline]
    pub fn toward(self) -> Direction {
        match self {
            Self::Left => Direction::Left,
            Self::Right => Direction::Right,
        }
    }
}

/// Direction of an outgoing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the left neighbour only.
    Left,
    /// Towards the right neighbour only.
    Right,
    /// Towards both neighbours.
    Broadcast,
}

impl Direction {
    /// Whether a message sent in this direction reaches the neighbour on `side`.
    #[inline]
    pub fn covers(self, side: Side) -> bool {
        matches!(
            (self, side),
            (Self::Broadcast, _) | (Self::Left, Side::Left) | (Self::Right, Side::Right)
        )
    }

    /// Legend glyph: `<-`, `->` or `<->`.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Left => "<-",
            Self::Right => "->",
            Self::Broadcast => "<->",
        }
    }
}

/// Message payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Payload {
    /// No message.
    #[default]
    Empty,
    /// Prompts the first active soldier to probe for the midpoint.
    Test,
    /// "Am I in the middle?" query, answered by generals.
    MidTest,
    /// A general's answer to a [`Payload::MidTest`].
    MidAck,
    /// Re-activates soldiers and passivates the general that receives it.
    Reset,
    /// Promotes the receiving soldier to general (even-length split).
    Promote,
}

impl Payload {
    /// `true` for [`Payload::Empty`].
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    /// Legend glyph. The empty payload renders as nothing.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Test => "!",
            Self::MidTest => "m?",
            Self::MidAck => "m!",
            Self::Reset => "0!",
            Self::Promote => "^",
        }
    }
}

/// A pending message for the next step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Outgoing {
    /// Where the message is headed.
    pub direction: Direction,
    /// What the message says.
    pub payload: Payload,
}

impl Outgoing {
    /// Build a message.
    pub const fn new(direction: Direction, payload: Payload) -> Self {
        Self { direction, payload }
    }

    /// A message aimed at a single side.
    pub fn to(side: Side, payload: Payload) -> Self {
        Self::new(side.toward(), payload)
    }

    /// A message aimed at both neighbours.
    pub const fn broadcast(payload: Payload) -> Self {
        Self::new(Direction::Broadcast, payload)
    }

    /// Drop the payload, keeping the direction.
    ///
    /// The direction of an empty message is never observed by neighbours;
    /// it is kept only so the rendered line stays stable.
    pub fn silenced(self) -> Self {
        Self::new(self.direction, Payload::Empty)
    }

    /// The payload as seen by the neighbour on `side` of the sender.
    ///
    /// Returns [`Payload::Empty`] when the message is not directed there.
    #[inline]
    pub fn toward(self, side: Side) -> Payload {
        if self.direction.covers(side) {
            self.payload
        } else {
            Payload::Empty
        }
    }
}

/// State of a general.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct General {
    /// Active generals start probing rounds.
    pub activity: Activity,
    /// Set when a new probing round must be started next step.
    pub testing: bool,
    /// Pending message.
    pub outgoing: Outgoing,
}

impl General {
    /// The general at position 0, ready to start the first round.
    pub fn left_end() -> Self {
        Self {
            activity: Activity::Active,
            testing: true,
            outgoing: Outgoing::new(Direction::Right, Payload::Empty),
        }
    }

    /// The general at position `len - 1`.
    pub fn right_end() -> Self {
        Self {
            activity: Activity::Passive,
            testing: false,
            outgoing: Outgoing::new(Direction::Left, Payload::Empty),
        }
    }

    /// A freshly promoted general announcing itself with `outgoing`.
    pub fn promoted(outgoing: Outgoing) -> Self {
        Self {
            activity: Activity::Active,
            testing: true,
            outgoing,
        }
    }
}

/// State of a soldier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Soldier {
    /// Active soldiers may become midpoint candidates.
    pub activity: Activity,
    /// Set while this soldier is a midpoint candidate.
    pub testing: bool,
    /// Acknowledgement window countdown (0..=[`Soldier::ACK_WINDOW`]).
    pub timer: u8,
    /// Pending message.
    pub outgoing: Outgoing,
}

impl Soldier {
    /// Timer value armed when the first acknowledgement reaches a candidate.
    pub const ACK_WINDOW: u8 = 3;

    /// An interior soldier in its initial state.
    pub fn recruit() -> Self {
        Self {
            activity: Activity::Active,
            testing: false,
            timer: 0,
            outgoing: Outgoing::broadcast(Payload::Empty),
        }
    }

    /// The timer after one tick of countdown.
    #[inline]
    pub fn countdown(&self) -> u8 {
        self.timer.saturating_sub(1)
    }

    /// Convert this soldier into a general that sends `outgoing`.
    ///
    /// One-way: the soldier's timer is discarded.
    pub fn promote(self, outgoing: Outgoing) -> General {
        General::promoted(outgoing)
    }
}

/// A machine in the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Machine {
    /// See [`General`].
    General(General),
    /// See [`Soldier`].
    Soldier(Soldier),
}

impl Machine {
    /// The machine kind.
    pub fn kind(&self) -> Kind {
        match self {
            Self::General(_) => Kind::General,
            Self::Soldier(_) => Kind::Soldier,
        }
    }

    /// `true` for generals.
    #[inline]
    pub fn is_general(&self) -> bool {
        matches!(self, Self::General(_))
    }

    /// Activity of either variant.
    pub fn activity(&self) -> Activity {
        match self {
            Self::General(g) => g.activity,
            Self::Soldier(s) => s.activity,
        }
    }

    /// Colour: generals are red, soldiers black.
    pub fn color(&self) -> Color {
        match self {
            Self::General(_) => Color::Red,
            Self::Soldier(_) => Color::Black,
        }
    }

    /// `true` when the machine is in the terminal colour.
    #[inline]
    pub fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    /// Testing flag of either variant.
    pub fn testing(&self) -> bool {
        match self {
            Self::General(g) => g.testing,
            Self::Soldier(s) => s.testing,
        }
    }

    /// Soldier timer; generals report 0.
    pub fn timer(&self) -> u8 {
        match self {
            Self::General(_) => 0,
            Self::Soldier(s) => s.timer,
        }
    }

    /// Pending message.
    pub fn outgoing(&self) -> Outgoing {
        match self {
            Self::General(g) => g.outgoing,
            Self::Soldier(s) => s.outgoing,
        }
    }

    /// Flatten into a render-ready summary.
    pub fn summary(&self, position: Position) -> MachineSummary {
        let outgoing = self.outgoing();
        MachineSummary {
            position,
            kind: self.kind(),
            activity: self.activity(),
            color: self.color(),
            testing: self.testing(),
            timer: self.timer(),
            direction: outgoing.direction,
            payload: outgoing.payload,
        }
    }
}

impl From<General> for Machine {
    fn from(g: General) -> Self {
        Self::General(g)
    }
}

impl From<Soldier> for Machine {
    fn from(s: Soldier) -> Self {
        Self::Soldier(s)
    }
}
