//! Trace comparison and divergence reporting.
//!
//! Frames are compared hash-first. Only when the hashes disagree (or the
//! lines have different lengths) is the per-position summary list walked
//! to find the first differing machine.

use std::fmt;

use salvo_core::{MachineSummary, Position, StepId};

use crate::error::ReplayError;
use crate::recorder::Frame;

/// What differed at the point of divergence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DivergenceKind {
    /// The frames were recorded at different steps.
    Step,
    /// The two lines hold a different number of machines.
    LineLength,
    /// A machine differs at the reported position.
    Machine,
}

/// The first point at which two traces disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivergenceReport {
    /// Index of the diverging frame.
    pub frame: usize,
    /// Step of the diverging frame in the recorded trace.
    pub step: StepId,
    /// First differing position, when the difference is per-machine.
    pub position: Option<Position>,
    /// What differed.
    pub kind: DivergenceKind,
    /// Recorded machine at `position`.
    pub recorded: Option<MachineSummary>,
    /// Replayed machine at `position`.
    pub replayed: Option<MachineSummary>,
}

impl fmt::Display for DivergenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame {} (step {})", self.frame, self.step)?;
        match self.kind {
            DivergenceKind::Step => f.write_str(": step ids differ"),
            DivergenceKind::LineLength => f.write_str(": line lengths differ"),
            DivergenceKind::Machine => {
                if let Some(pos) = self.position {
                    write!(f, " at position {}", pos.0)?;
                }
                if let (Some(a), Some(b)) = (self.recorded, self.replayed) {
                    write!(f, ": recorded {a}, replayed {b}")?;
                }
                Ok(())
            }
        }
    }
}

fn compare_frame(index: usize, recorded: &Frame, replayed: &Frame) -> Option<DivergenceReport> {
    let report = |kind, position, a, b| DivergenceReport {
        frame: index,
        step: recorded.step,
        position,
        kind,
        recorded: a,
        replayed: b,
    };

    if recorded.step != replayed.step {
        return Some(report(DivergenceKind::Step, None, None, None));
    }
    if recorded.summaries.len() != replayed.summaries.len() {
        return Some(report(DivergenceKind::LineLength, None, None, None));
    }
    if recorded.hash == replayed.hash && recorded.summaries == replayed.summaries {
        return None;
    }

    recorded
        .summaries
        .iter()
        .zip(&replayed.summaries)
        .find(|(a, b)| a != b)
        .map(|(a, b)| report(DivergenceKind::Machine, Some(a.position), Some(*a), Some(*b)))
}

/// Find the first diverging frame shared by both traces.
///
/// Returns `None` if every frame present in both traces matches, even when
/// one trace is longer.
pub fn first_divergence(recorded: &[Frame], replayed: &[Frame]) -> Option<DivergenceReport> {
    recorded
        .iter()
        .zip(replayed)
        .enumerate()
        .find_map(|(i, (a, b))| compare_frame(i, a, b))
}

/// Verify that two traces are identical.
///
/// # Errors
///
/// [`ReplayError::Divergence`] for the first differing frame, or
/// [`ReplayError::LengthMismatch`] if one trace is a strict prefix of the
/// other.
pub fn compare_traces(recorded: &[Frame], replayed: &[Frame]) -> Result<(), ReplayError> {
    if let Some(report) = first_divergence(recorded, replayed) {
        return Err(ReplayError::Divergence(report));
    }
    if recorded.len() != replayed.len() {
        return Err(ReplayError::LengthMismatch {
            recorded: recorded.len(),
            replayed: replayed.len(),
        });
    }
    Ok(())
}
