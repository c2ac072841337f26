//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// A seed generation does not match the configured line length.
    LengthMismatch {
        /// Configured number of machines.
        expected: usize,
        /// Number of machines supplied.
        actual: usize,
    },
    /// `begin_step()` was called while a previous step was never published.
    StepInProgress,
    /// `publish()` was called without a preceding `begin_step()`.
    NoStepInProgress,
    /// The generation counter would wrap.
    GenerationOverflow,
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "seed length mismatch: expected {expected} machines, got {actual}"
                )
            }
            Self::StepInProgress => {
                write!(f, "begin_step() called while a step is already in progress")
            }
            Self::NoStepInProgress => {
                write!(f, "publish() called without a preceding begin_step()")
            }
            Self::GenerationOverflow => {
                write!(f, "generation counter overflow (u32::MAX steps reached)")
            }
        }
    }
}

impl Error for ArenaError {}
