//! Core abstraction traits for line access and snapshot reading.

use crate::id::{Position, StepId};
use crate::machine::Machine;
use crate::summary::MachineSummary;

/// Read-only access to a full generation of the line.
///
/// Implemented by arena snapshots and by test mocks. Transition rules
/// read the previous generation exclusively through this trait.
pub trait LineReader {
    /// All machines, indexed by position.
    fn machines(&self) -> &[Machine];

    /// The machine at `position`, or `None` past the end of the line.
    fn machine(&self, position: Position) -> Option<&Machine> {
        self.machines().get(position.index())
    }

    /// Number of machines in the line.
    fn len(&self) -> usize {
        self.machines().len()
    }

    /// `true` when the line holds no machines.
    fn is_empty(&self) -> bool {
        self.machines().is_empty()
    }
}

/// Mutable access to the staging generation during a step.
///
/// Each position is written at most once per step.
pub trait LineWriter {
    /// Mutable slot for `position`, or `None` past the end of the line.
    fn write(&mut self, position: Position) -> Option<&mut Machine>;
}

/// Read-only access to a published snapshot.
///
/// Decouples observers (renderers, trace recorders) from the arena
/// implementation.
pub trait SnapshotAccess: LineReader {
    /// The step at which this snapshot was produced.
    fn step_id(&self) -> StepId;

    /// Ordered per-position summaries.
    fn summaries(&self) -> Vec<MachineSummary> {
        self.machines()
            .iter()
            .enumerate()
            .map(|(i, m)| m.summary(Position(i as u32)))
            .collect()
    }
}
