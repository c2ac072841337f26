//! Execution context passed to rules during a step.
//!
//! [`StepContext`] gives a rule read access to the frozen previous
//! generation plus the line topology. There is no write access: the
//! engine stores whatever [`Rule::transition`](crate::Rule::transition)
//! returns.

use crate::inbox::Inbox;
use salvo_core::{LineReader, Machine, Position, Side, StepId};
use salvo_space::Line;

/// Execution context passed to each [`Rule::transition`](crate::Rule::transition) call.
///
/// Uses dynamic dispatch (`&dyn LineReader`) to keep the
/// [`Rule`](crate::Rule) trait object-safe while supporting mock-based
/// testing.
pub struct StepContext<'a> {
    previous: &'a dyn LineReader,
    line: &'a Line,
    step_id: StepId,
}

impl<'a> StepContext<'a> {
    /// Construct a new step context.
    ///
    /// Typically called by the engine, not by rules directly. For testing,
    /// construct with a mock line from `salvo-test-utils`.
    pub fn new(previous: &'a dyn LineReader, line: &'a Line, step_id: StepId) -> Self {
        Self {
            previous,
            line,
            step_id,
        }
    }

    /// Frozen view of the previous generation.
    pub fn previous(&self) -> &dyn LineReader {
        self.previous
    }

    /// Line topology.
    pub fn line(&self) -> &Line {
        self.line
    }

    /// The step being computed.
    pub fn step_id(&self) -> StepId {
        self.step_id
    }

    /// The previous-generation machine at `position`.
    pub fn machine(&self, position: Position) -> Option<&Machine> {
        self.previous.machine(position)
    }

    /// The previous-generation machine on `side` of `position`, if any.
    pub fn neighbour(&self, position: Position, side: Side) -> Option<&Machine> {
        self.line
            .neighbour(position, side)
            .and_then(|n| self.previous.machine(n))
    }

    /// Messages delivered to `position` this step.
    ///
    /// The left slot holds what the left neighbour sent rightward, the right
    /// slot what the right neighbour sent leftward.
    pub fn inbox(&self, position: Position) -> Inbox {
        let mut inbox = Inbox::default();
        for (side, n) in self.line.neighbours(position) {
            let Some(sender) = self.previous.machine(n) else {
                continue;
            };
            let payload = sender.outgoing().toward(side.opposite());
            match side {
                Side::Left => inbox.left = payload,
                Side::Right => inbox.right = payload,
            }
        }
        inbox
    }
}
