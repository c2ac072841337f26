//! Soldier transitions.
//!
//! Soldiers relay messages, volunteer as midpoint candidates, and are the
//! only machines that change kind: a promoted soldier becomes a general
//! and announces itself with a `Reset` wave.

use salvo_core::{Activity, Direction, Machine, Outgoing, Payload, Side, Soldier};
use salvo_rule::Inbox;

/// Compute the next state of `soldier`.
///
/// Promotion is checked first: a `Promote` from either neighbour, or a
/// `Promote` this soldier itself sent last step (the two middles of an
/// even squad promote together). Then, in order: quiet inbox, `Reset`
/// wave, and the activity-specific probing protocol.
pub fn next(soldier: Soldier, inbox: Inbox) -> Machine {
    if inbox.left == Payload::Promote {
        return soldier.promote(Outgoing::to(Side::Right, Payload::Reset)).into();
    }
    if inbox.right == Payload::Promote {
        return soldier.promote(Outgoing::to(Side::Left, Payload::Reset)).into();
    }
    if soldier.outgoing.payload == Payload::Promote {
        let away = if soldier.outgoing.direction == Direction::Right {
            Side::Left
        } else {
            Side::Right
        };
        return soldier.promote(Outgoing::to(away, Payload::Reset)).into();
    }

    if inbox.is_empty() {
        return Soldier {
            timer: soldier.countdown(),
            outgoing: soldier.outgoing.silenced(),
            ..soldier
        }
        .into();
    }

    if inbox.either(Payload::Reset) {
        let toward = if inbox.left == Payload::Reset {
            Side::Right
        } else {
            Side::Left
        };
        return Soldier {
            activity: Activity::Active,
            outgoing: Outgoing::to(toward, Payload::Reset),
            ..soldier
        }
        .into();
    }

    match soldier.activity {
        Activity::Active => active(soldier, inbox),
        Activity::Passive => passive(soldier, inbox).into(),
    }
}

/// Active soldiers answer probes. The timer is left alone.
fn active(soldier: Soldier, inbox: Inbox) -> Machine {
    if inbox.either(Payload::Test) {
        return Soldier {
            testing: true,
            outgoing: Outgoing::broadcast(Payload::MidTest),
            ..soldier
        }
        .into();
    }

    if inbox.right == Payload::MidAck {
        if inbox.left == Payload::MidAck {
            // Both acknowledgements in one step: odd-length midpoint.
            return soldier
                .promote(Outgoing::broadcast(Payload::Reset))
                .into();
        }
        return acknowledged(soldier, Side::Left).into();
    }
    if inbox.left == Payload::MidAck {
        return acknowledged(soldier, Side::Right).into();
    }

    let (toward, payload) = inbox.relay();
    Soldier {
        outgoing: Outgoing::to(toward, payload),
        ..soldier
    }
    .into()
}

/// An active soldier saw one `MidAck`. A bystander relays it toward
/// `toward`; a candidate passivates and opens the acknowledgement window.
fn acknowledged(soldier: Soldier, toward: Side) -> Soldier {
    if soldier.testing {
        Soldier {
            activity: Activity::Passive,
            timer: Soldier::ACK_WINDOW,
            outgoing: soldier.outgoing.silenced(),
            ..soldier
        }
    } else {
        Soldier {
            outgoing: Outgoing::to(toward, Payload::MidAck),
            ..soldier
        }
    }
}

/// Passive soldiers relay, except a candidate waiting on its second
/// acknowledgement.
fn passive(soldier: Soldier, inbox: Inbox) -> Soldier {
    if soldier.testing {
        for from in [Side::Right, Side::Left] {
            if inbox.from(from) == Payload::MidAck {
                return second_ack(soldier, from);
            }
        }
    }

    let (toward, payload) = inbox.relay();
    Soldier {
        timer: soldier.countdown(),
        outgoing: Outgoing::to(toward, payload),
        ..soldier
    }
}

/// A waiting candidate received its second `MidAck` from side `from`.
///
/// Inside the window the neighbour on that side is the other middle and
/// is told to promote. Past the window the probe moves on, away from
/// `from`.
fn second_ack(soldier: Soldier, from: Side) -> Soldier {
    if soldier.timer >= 1 {
        Soldier {
            testing: false,
            timer: 0,
            outgoing: Outgoing::to(from, Payload::Promote),
            ..soldier
        }
    } else {
        Soldier {
            testing: false,
            timer: soldier.countdown(),
            outgoing: Outgoing::to(from.opposite(), Payload::Test),
            ..soldier
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salvo_core::General;

    fn passive_candidate(timer: u8) -> Soldier {
        Soldier {
            activity: Activity::Passive,
            testing: true,
            timer,
            outgoing: Outgoing::broadcast(Payload::Empty),
        }
    }

    fn expect_soldier(m: Machine) -> Soldier {
        match m {
            Machine::Soldier(s) => s,
            Machine::General(g) => panic!("expected soldier, got {g:?}"),
        }
    }

    fn expect_general(m: Machine) -> General {
        match m {
            Machine::General(g) => g,
            Machine::Soldier(s) => panic!("expected general, got {s:?}"),
        }
    }

    #[test]
    fn promote_from_left_resets_rightward() {
        let g = expect_general(next(
            Soldier::recruit(),
            Inbox::new(Payload::Promote, Payload::Empty),
        ));
        assert_eq!(g.outgoing, Outgoing::to(Side::Right, Payload::Reset));
        assert_eq!(g.activity, Activity::Active);
        assert!(g.testing);
    }

    #[test]
    fn promote_from_right_resets_leftward() {
        let g = expect_general(next(
            Soldier::recruit(),
            Inbox::new(Payload::Empty, Payload::Promote),
        ));
        assert_eq!(g.outgoing, Outgoing::to(Side::Left, Payload::Reset));
    }

    #[test]
    fn sender_of_promote_promotes_itself() {
        let s = Soldier {
            outgoing: Outgoing::to(Side::Right, Payload::Promote),
            ..passive_candidate(0)
        };
        let g = expect_general(next(s, Inbox::default()));
        assert_eq!(g.outgoing, Outgoing::to(Side::Left, Payload::Reset));

        let s = Soldier {
            outgoing: Outgoing::to(Side::Left, Payload::Promote),
            ..passive_candidate(0)
        };
        let g = expect_general(next(s, Inbox::default()));
        assert_eq!(g.outgoing, Outgoing::to(Side::Right, Payload::Reset));
    }

    #[test]
    fn quiet_inbox_counts_down_and_silences() {
        let s = Soldier {
            outgoing: Outgoing::to(Side::Left, Payload::MidAck),
            ..passive_candidate(2)
        };
        let next = expect_soldier(next(s, Inbox::default()));
        assert_eq!(next.timer, 1);
        assert_eq!(next.outgoing, Outgoing::to(Side::Left, Payload::Empty));
        assert!(next.testing);
        assert_eq!(next.activity, Activity::Passive);
    }

    #[test]
    fn reset_reactivates_and_relays() {
        let next = expect_soldier(next(
            passive_candidate(2),
            Inbox::new(Payload::Reset, Payload::Empty),
        ));
        assert_eq!(next.activity, Activity::Active);
        assert_eq!(next.timer, 2);
        assert!(next.testing);
        assert_eq!(next.outgoing, Outgoing::to(Side::Right, Payload::Reset));
    }

    #[test]
    fn active_soldier_answers_test_with_midtest() {
        let next = expect_soldier(next(
            Soldier::recruit(),
            Inbox::new(Payload::Test, Payload::Empty),
        ));
        assert!(next.testing);
        assert_eq!(next.outgoing, Outgoing::broadcast(Payload::MidTest));
    }

    #[test]
    fn double_midack_promotes_with_broadcast_reset() {
        let g = expect_general(next(
            Soldier {
                testing: true,
                ..Soldier::recruit()
            },
            Inbox::new(Payload::MidAck, Payload::MidAck),
        ));
        assert_eq!(g.outgoing, Outgoing::broadcast(Payload::Reset));
    }

    #[test]
    fn bystander_relays_midack() {
        let next = expect_soldier(next(
            Soldier::recruit(),
            Inbox::new(Payload::Empty, Payload::MidAck),
        ));
        assert_eq!(next.outgoing, Outgoing::to(Side::Left, Payload::MidAck));
        assert_eq!(next.activity, Activity::Active);
    }

    #[test]
    fn candidate_opens_window_on_first_midack() {
        let candidate = Soldier {
            testing: true,
            ..Soldier::recruit()
        };
        let next = expect_soldier(next(candidate, Inbox::new(Payload::MidAck, Payload::Empty)));
        assert_eq!(next.activity, Activity::Passive);
        assert_eq!(next.timer, Soldier::ACK_WINDOW);
        assert!(next.outgoing.payload.is_empty());
    }

    #[test]
    fn active_relay_prefers_left_message() {
        let next = expect_soldier(next(
            Soldier::recruit(),
            Inbox::new(Payload::MidTest, Payload::Empty),
        ));
        assert_eq!(next.outgoing, Outgoing::to(Side::Right, Payload::MidTest));
        assert_eq!(next.timer, 0);
    }

    #[test]
    fn second_ack_inside_window_sends_promote() {
        let next = expect_soldier(next(
            passive_candidate(2),
            Inbox::new(Payload::Empty, Payload::MidAck),
        ));
        assert_eq!(next.outgoing, Outgoing::to(Side::Right, Payload::Promote));
        assert!(!next.testing);
        assert_eq!(next.timer, 0);
    }

    #[test]
    fn second_ack_after_window_passes_test_on() {
        let next = expect_soldier(next(
            passive_candidate(0),
            Inbox::new(Payload::MidAck, Payload::Empty),
        ));
        assert_eq!(next.outgoing, Outgoing::to(Side::Right, Payload::Test));
        assert!(!next.testing);
        assert_eq!(next.timer, 0);
    }

    #[test]
    fn passive_relay_counts_down() {
        let s = Soldier {
            testing: false,
            ..passive_candidate(3)
        };
        let next = expect_soldier(next(s, Inbox::new(Payload::Empty, Payload::MidAck)));
        assert_eq!(next.outgoing, Outgoing::to(Side::Left, Payload::MidAck));
        assert_eq!(next.timer, 2);
        assert_eq!(next.activity, Activity::Passive);
    }
}
