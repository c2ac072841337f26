//! Core types and traits for the Salvo firing-squad automaton.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Salvo workspace:
//! position and step identifiers, the closed machine/message enums,
//! per-position summaries, and the line access traits.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;
pub mod machine;
pub mod summary;
pub mod traits;

pub use id::{Position, StepId};
pub use machine::{
    Activity, Color, Direction, General, Kind, Machine, Outgoing, Payload, Side, Soldier,
};
pub use summary::MachineSummary;
pub use traits::{LineReader, LineWriter, SnapshotAccess};
