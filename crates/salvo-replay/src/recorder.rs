//! Trace recording.

use salvo_core::{Machine, MachineSummary, Position, SnapshotAccess, StepId};
use salvo_engine::{Observer, StepMetrics};

use crate::hash::summaries_hash;

/// One recorded generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Step at which the generation was published.
    pub step: StepId,
    /// FNV-1a hash of `summaries`.
    pub hash: u64,
    /// Per-position machine summaries.
    pub summaries: Vec<MachineSummary>,
}

impl Frame {
    /// Capture a frame from a snapshot.
    pub fn capture(snapshot: &dyn SnapshotAccess) -> Self {
        Self::from_summaries(snapshot.step_id(), snapshot.summaries())
    }

    /// Build a frame from raw machines, in position order.
    pub fn from_machines(step: StepId, machines: &[Machine]) -> Self {
        let summaries = machines
            .iter()
            .enumerate()
            .map(|(i, m)| m.summary(Position(i as u32)))
            .collect();
        Self::from_summaries(step, summaries)
    }

    fn from_summaries(step: StepId, summaries: Vec<MachineSummary>) -> Self {
        Self {
            step,
            hash: summaries_hash(&summaries),
            summaries,
        }
    }
}

/// Observer that records every generation it sees.
///
/// ```
/// use salvo_engine::{Squad, SquadConfig};
/// use salvo_replay::TraceRecorder;
///
/// let mut squad = Squad::new(SquadConfig::new(4)).unwrap();
/// let mut recorder = TraceRecorder::new();
/// let outcome = squad.run(&mut recorder).unwrap();
/// // Seed plus one frame per step.
/// assert_eq!(recorder.len() as u64, outcome.step.0 + 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TraceRecorder {
    frames: Vec<Frame>,
}

impl TraceRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded frames in step order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of recorded frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` before anything is recorded.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The most recent frame.
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Consume the recorder, returning its frames.
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

impl Observer for TraceRecorder {
    fn on_step(&mut self, snapshot: &dyn SnapshotAccess, _metrics: &StepMetrics) {
        self.frames.push(Frame::capture(snapshot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::snapshot_hash;
    use salvo_core::{General, Soldier};
    use salvo_test_utils::MockLine;

    #[test]
    fn records_in_order_with_hashes() {
        let mut rec = TraceRecorder::new();
        assert!(rec.is_empty());
        let metrics = StepMetrics::default();
        let line = MockLine::new(vec![General::left_end().into(), Soldier::recruit().into()]);
        rec.on_step(&line, &metrics);
        let stepped = line.clone().with_step(StepId(1));
        rec.on_step(&stepped, &metrics);

        assert_eq!(rec.len(), 2);
        assert_eq!(rec.frames()[0].step, StepId(0));
        assert_eq!(rec.last().unwrap().step, StepId(1));
        assert_eq!(rec.frames()[0].hash, snapshot_hash(&line));
        assert_eq!(rec.frames()[0].summaries.len(), 2);
    }

    #[test]
    fn capture_matches_from_machines() {
        let machines: Vec<Machine> = vec![General::right_end().into()];
        let line = MockLine::new(machines.clone()).with_step(StepId(5));
        assert_eq!(
            Frame::capture(&line),
            Frame::from_machines(StepId(5), &machines)
        );
    }
}
