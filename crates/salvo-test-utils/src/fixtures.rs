//! Reusable rule test fixtures.
//!
//! - [`IdentityRule`]: every machine keeps its previous state forever.
//! - [`PaintRedRule`]: every machine turns red at a fixed step.

use salvo_core::{General, Machine, Position, Soldier};
use salvo_rule::{Rule, StepContext};
use salvo_space::Line;

/// Seeds a line of recruits and never changes anything.
///
/// Useful for testing step caps: a squad running this rule never fires.
pub struct IdentityRule;

impl Rule for IdentityRule {
    fn name(&self) -> &str {
        "identity"
    }

    fn seed(&self, _line: &Line, _position: Position) -> Machine {
        Soldier::recruit().into()
    }

    fn transition(&self, ctx: &StepContext<'_>, position: Position) -> Machine {
        ctx.machine(position)
            .copied()
            .unwrap_or_else(|| Soldier::recruit().into())
    }
}

/// Seeds a line of recruits and promotes every machine at step
/// `fire_at`.
///
/// Useful for testing termination: a squad running this rule fires at
/// exactly `max(fire_at, 1)`, since the seed is all black.
pub struct PaintRedRule {
    pub fire_at: u64,
}

impl PaintRedRule {
    pub fn new(fire_at: u64) -> Self {
        Self { fire_at }
    }
}

impl Rule for PaintRedRule {
    fn name(&self) -> &str {
        "paint_red"
    }

    fn seed(&self, _line: &Line, _position: Position) -> Machine {
        Soldier::recruit().into()
    }

    fn transition(&self, ctx: &StepContext<'_>, position: Position) -> Machine {
        let prev = ctx
            .machine(position)
            .copied()
            .unwrap_or_else(|| Soldier::recruit().into());
        if ctx.step_id().0 >= self.fire_at {
            General::right_end().into()
        } else {
            prev
        }
    }
}
