//! Error types for space operations.

use std::fmt;

/// Errors arising from line construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a line with zero machines.
    EmptySpace,
    /// The requested length exceeds what a `Position` can address.
    LengthTooLarge {
        /// The requested length.
        value: u64,
        /// The largest supported length.
        max: u64,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "line must have at least one machine"),
            Self::LengthTooLarge { value, max } => {
                write!(f, "line length {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
