//! General transitions.
//!
//! A general never changes kind. It answers midpoint queries, starts a new
//! probing round when it is active and armed, and passivates when a reset
//! wave reaches it from a freshly promoted neighbour.

use salvo_core::{Activity, General, Kind, Outgoing, Payload, Side};
use salvo_rule::Inbox;

/// Kinds of the two neighbours in the previous generation.
///
/// `None` past either end of the line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Senders {
    /// Machine at `position - 1`.
    pub left: Option<Kind>,
    /// Machine at `position + 1`.
    pub right: Option<Kind>,
}

impl Senders {
    fn soldier_sent(self, inbox: Inbox, payload: Payload) -> bool {
        (inbox.left == payload && self.left == Some(Kind::Soldier))
            || (inbox.right == payload && self.right == Some(Kind::Soldier))
    }
}

/// Compute the next state of `general`.
///
/// Precedence, first match wins:
///
/// 1. `Reset` from either side: passivate, drop the pending payload.
/// 2. `MidTest` from both sides: broadcast `MidAck`.
/// 3. `MidTest` from one side: answer `MidAck` back toward it.
/// 4. Active and armed: broadcast `Test` and disarm.
/// 5. Active and a soldier sent `Test`: re-arm for the next round.
/// 6. Otherwise stay put with an empty payload.
pub fn next(general: General, inbox: Inbox, senders: Senders) -> General {
    let quiet = General {
        outgoing: general.outgoing.silenced(),
        ..general
    };

    if inbox.either(Payload::Reset) {
        return General {
            activity: Activity::Passive,
            ..quiet
        };
    }

    if inbox.both(Payload::MidTest) {
        return General {
            outgoing: Outgoing::broadcast(Payload::MidAck),
            ..general
        };
    }
    if inbox.right == Payload::MidTest {
        return General {
            outgoing: Outgoing::to(Side::Right, Payload::MidAck),
            ..general
        };
    }
    if inbox.left == Payload::MidTest {
        return General {
            outgoing: Outgoing::to(Side::Left, Payload::MidAck),
            ..general
        };
    }

    if general.activity == Activity::Active {
        if general.testing {
            return General {
                activity: Activity::Active,
                testing: false,
                outgoing: Outgoing::broadcast(Payload::Test),
            };
        }
        if senders.soldier_sent(inbox, Payload::Test) {
            return General {
                testing: true,
                ..quiet
            };
        }
    }

    quiet
}
