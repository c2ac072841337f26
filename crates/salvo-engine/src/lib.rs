//! Lockstep driver running Salvo firing squads to synchronization.
//!
//! [`Squad`] is the user-facing API: it seeds a line from a [`Rule`],
//! advances it one synchronous step at a time, and tracks the driver state
//! (`Running`, `Fired`, `Capped`). [`StepEngine`] underneath owns the
//! double-buffered arena and executes single steps.
//!
//! [`Rule`]: salvo_rule::Rule

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod lockstep;
pub mod metrics;
pub mod observer;
pub mod outcome;
pub mod partition;
pub mod step;
pub mod termination;

pub use config::{ConfigError, SquadConfig};
pub use lockstep::{Squad, StepResult};
pub use metrics::StepMetrics;
pub use observer::Observer;
pub use outcome::{DriverState, Outcome, StepError};
pub use partition::Segment;
pub use step::StepEngine;
