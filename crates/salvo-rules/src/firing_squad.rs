//! The [`FiringSquad`] rule: seeding and per-kind dispatch.

use salvo_core::{General, Machine, Position, Side, Soldier};
use salvo_rule::{Rule, StepContext};
use salvo_space::Line;

use crate::{general, soldier};

/// The firing-squad synchronization rule.
///
/// # Seeding
///
/// | position      | machine                                    |
/// |---------------|--------------------------------------------|
/// | `0` (N ≥ 2)   | [`General::left_end`]: active, testing     |
/// | interior      | [`Soldier::recruit`]                       |
/// | `N - 1`       | [`General::right_end`]: passive            |
///
/// A line of one machine holds a single right-end general and has fired
/// before the first step.
///
/// ```
/// use salvo_core::Position;
/// use salvo_rule::Rule;
/// use salvo_rules::FiringSquad;
/// use salvo_space::Line;
///
/// let line = Line::new(4).unwrap();
/// let seed: Vec<_> = line.positions().map(|p| FiringSquad.seed(&line, p)).collect();
/// assert!(seed[0].is_general() && seed[3].is_general());
/// assert!(!seed[1].is_general());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct FiringSquad;

impl Rule for FiringSquad {
    fn name(&self) -> &str {
        "FiringSquad"
    }

    fn seed(&self, line: &Line, position: Position) -> Machine {
        if position == line.last() {
            General::right_end().into()
        } else if position == line.first() {
            General::left_end().into()
        } else {
            Soldier::recruit().into()
        }
    }

    /// # Panics
    ///
    /// If `position` is not on the line. The engine only calls this for
    /// positions of its own line.
    fn transition(&self, ctx: &StepContext<'_>, position: Position) -> Machine {
        let Some(&current) = ctx.machine(position) else {
            unreachable!(
                "transition for position {position} on a line of {} machines",
                ctx.line().len()
            );
        };
        let inbox = ctx.inbox(position);
        match current {
            Machine::General(g) => {
                let kind_at = |side| ctx.neighbour(position, side).map(Machine::kind);
                let senders = general::Senders {
                    left: kind_at(Side::Left),
                    right: kind_at(Side::Right),
                };
                general::next(g, inbox, senders).into()
            }
            Machine::Soldier(s) => soldier::next(s, inbox),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salvo_core::{Activity, Kind, LineReader, Outgoing, Payload, StepId};
    use salvo_test_utils::MockLine;

    #[test]
    #[should_panic(expected = "transition for position 3")]
    fn transition_off_the_line_fails_loudly() {
        let line = Line::new(3).unwrap();
        let prev = MockLine::seeded(&FiringSquad, 3);
        let ctx = StepContext::new(&prev, &line, StepId(1));
        FiringSquad.transition(&ctx, Position(3));
    }

    #[test]
    fn single_machine_seeds_right_end_general() {
        let line = Line::new(1).unwrap();
        assert_eq!(
            FiringSquad.seed(&line, Position(0)),
            Machine::from(General::right_end())
        );
    }

    #[test]
    fn two_machines_seed_two_generals() {
        let line = Line::new(2).unwrap();
        assert!(FiringSquad.seed(&line, Position(0)).is_general());
        assert_eq!(FiringSquad.seed(&line, Position(1)).kind(), Kind::General);
    }

    #[test]
    fn first_step_broadcasts_test_from_left_end() {
        let line = Line::new(3).unwrap();
        let prev = MockLine::seeded(&FiringSquad, 3);
        let ctx = StepContext::new(&prev, &line, StepId(1));

        let left = FiringSquad.transition(&ctx, Position(0));
        assert_eq!(left.outgoing(), Outgoing::broadcast(Payload::Test));
        assert!(!left.testing());

        // Nothing reaches the interior yet.
        let mid = FiringSquad.transition(&ctx, Position(1));
        assert_eq!(mid, prev.machines()[1]);
    }

    #[test]
    fn general_ignores_test_from_another_general() {
        // Two adjacent active generals: a Test from a general must not
        // re-arm the receiver.
        let line = Line::new(2).unwrap();
        let sender = General {
            activity: Activity::Active,
            testing: false,
            outgoing: Outgoing::broadcast(Payload::Test),
        };
        let receiver = General {
            activity: Activity::Active,
            testing: false,
            outgoing: Outgoing::broadcast(Payload::Empty),
        };
        let prev = MockLine::new(vec![sender.into(), receiver.into()]);
        let ctx = StepContext::new(&prev, &line, StepId(1));
        let next = FiringSquad.transition(&ctx, Position(1));
        assert!(!next.testing());
    }

    #[test]
    fn general_arms_on_test_from_soldier() {
        let line = Line::new(2).unwrap();
        let sender = Soldier {
            outgoing: Outgoing::to(Side::Right, Payload::Test),
            ..Soldier::recruit()
        };
        let receiver = General {
            activity: Activity::Active,
            testing: false,
            outgoing: Outgoing::to(Side::Left, Payload::Empty),
        };
        let prev = MockLine::new(vec![sender.into(), receiver.into()]);
        let ctx = StepContext::new(&prev, &line, StepId(1));
        assert!(FiringSquad.transition(&ctx, Position(1)).testing());
    }
}
