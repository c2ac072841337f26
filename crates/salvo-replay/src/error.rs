//! Error types for trace comparison.

use std::error::Error;
use std::fmt;

use crate::compare::DivergenceReport;

/// Errors from comparing two recorded traces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplayError {
    /// Every shared frame matched but one trace ran longer.
    LengthMismatch {
        /// Frames in the recorded trace.
        recorded: usize,
        /// Frames in the replayed trace.
        replayed: usize,
    },
    /// A generation differed between the two traces.
    Divergence(DivergenceReport),
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { recorded, replayed } => write!(
                f,
                "trace length mismatch: recorded {recorded} frames, replayed {replayed}"
            ),
            Self::Divergence(report) => write!(f, "traces diverge: {report}"),
        }
    }
}

impl Error for ReplayError {}
