//! Per-step observation hook.

use salvo_core::SnapshotAccess;

use crate::metrics::StepMetrics;

/// Receives every generation a [`Squad::run`](crate::Squad::run) produces,
/// starting with the seed.
///
/// Implemented for closures, so a renderer can be as small as
/// `|snap, _| println!("{}", snap.step_id())`.
pub trait Observer {
    /// Called once per generation, in step order.
    fn on_step(&mut self, snapshot: &dyn SnapshotAccess, metrics: &StepMetrics);
}

impl<F> Observer for F
where
    F: FnMut(&dyn SnapshotAccess, &StepMetrics),
{
    fn on_step(&mut self, snapshot: &dyn SnapshotAccess, metrics: &StepMetrics) {
        self(snapshot, metrics)
    }
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Discard;

impl Observer for Discard {
    fn on_step(&mut self, _snapshot: &dyn SnapshotAccess, _metrics: &StepMetrics) {}
}
