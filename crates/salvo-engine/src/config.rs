//! Squad configuration, validation, and error types.
//!
//! [`SquadConfig`] is the builder input for constructing a [`Squad`](crate::Squad).
//! [`validate()`](SquadConfig::validate) checks the length range before
//! anything is allocated.

use std::error::Error;
use std::fmt;

use salvo_arena::ArenaError;
use salvo_space::SpaceError;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building a squad.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Line length outside `MIN_LENGTH..=MAX_LENGTH`.
    LengthOutOfRange {
        /// The configured length.
        value: u32,
        /// Smallest accepted length.
        min: u32,
        /// Largest accepted length.
        max: u32,
    },
    /// The line topology rejected the length.
    Space(SpaceError),
    /// The arena rejected the seed generation.
    Arena(ArenaError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthOutOfRange { value, min, max } => {
                write!(f, "length {value} is outside {min}..={max}")
            }
            Self::Space(e) => write!(f, "space: {e}"),
            Self::Arena(e) => write!(f, "arena: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Arena(e) => Some(e),
            Self::LengthOutOfRange { .. } => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<ArenaError> for ConfigError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

// ── SquadConfig ────────────────────────────────────────────────────

/// Configuration for a firing squad run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquadConfig {
    /// Number of machines in the line.
    pub length: u32,
    /// Step budget. `None` or `Some(0)` means unlimited.
    pub max_steps: Option<u64>,
}

impl SquadConfig {
    /// Smallest accepted line length.
    pub const MIN_LENGTH: u32 = 1;
    /// Largest accepted line length.
    pub const MAX_LENGTH: u32 = 1024;
    /// Line length used by [`Default`].
    pub const DEFAULT_LENGTH: u32 = 8;

    /// A config for `length` machines with no step budget.
    pub fn new(length: u32) -> Self {
        Self {
            length,
            max_steps: None,
        }
    }

    /// Set the step budget. `0` means unlimited.
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// The effective budget: `None` when unlimited.
    pub fn step_budget(&self) -> Option<u64> {
        self.max_steps.filter(|&n| n > 0)
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&self.length) {
            return Err(ConfigError::LengthOutOfRange {
                value: self.length,
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
            });
        }
        Ok(())
    }
}

impl Default for SquadConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LENGTH)
    }
}
