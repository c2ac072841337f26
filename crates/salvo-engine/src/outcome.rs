//! Driver state machine and step errors.

use std::error::Error;
use std::fmt;

use salvo_arena::ArenaError;
use salvo_core::StepId;

/// Where a squad is in its run.
///
/// ```text
/// Running ──all red──▶ Fired
///    │
///    └──budget spent──▶ Capped
/// ```
///
/// Both `Fired` and `Capped` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DriverState {
    /// Still stepping.
    Running,
    /// Every machine turned red in the same step.
    Fired,
    /// The step budget ran out first.
    Capped,
}

impl DriverState {
    /// `true` for `Fired` and `Capped`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

impl fmt::Display for DriverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Running => "running",
            Self::Fired => "fired",
            Self::Capped => "capped",
        };
        f.write_str(s)
    }
}

/// Terminal state and the step at which it was entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Outcome {
    /// `Fired` or `Capped`.
    pub state: DriverState,
    /// Step of entry into `state`.
    pub step: StepId,
}

impl Outcome {
    /// `true` when the squad fired.
    pub fn fired(&self) -> bool {
        self.state == DriverState::Fired
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at step {}", self.state, self.step)
    }
}

/// Error returned from [`Squad::step_sync()`](crate::Squad::step_sync).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The squad already reached a terminal state.
    Finished {
        /// How and when it finished.
        outcome: Outcome,
    },
    /// The arena refused the step.
    Arena(ArenaError),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished { outcome } => write!(f, "squad already finished: {outcome}"),
            Self::Arena(e) => write!(f, "arena: {e}"),
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(e) => Some(e),
            Self::Finished { .. } => None,
        }
    }
}

impl From<ArenaError> for StepError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}
