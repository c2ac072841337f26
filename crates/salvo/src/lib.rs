//! Salvo: firing squad synchronization on a line of finite-state machines.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Salvo sub-crates. For most users, adding `salvo` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use salvo::prelude::*;
//!
//! let mut squad = Squad::new(SquadConfig::new(4)).unwrap();
//! let mut rows = Vec::new();
//! let outcome = squad
//!     .run(&mut |snap: &dyn SnapshotAccess, _: &StepMetrics| {
//!         rows.push(snap.summaries().len());
//!     })
//!     .unwrap();
//!
//! assert!(outcome.fired());
//! assert_eq!(outcome.step, StepId(7));
//! assert_eq!(rows.len(), 8);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `salvo-core` | IDs, machine records, summaries, core traits |
//! | [`arena`] | `salvo-arena` | Double-buffered storage, `Snapshot`, `OwnedSnapshot` |
//! | [`space`] | `salvo-space` | Line topology |
//! | [`rule`] | `salvo-rule` | `Rule` trait, `StepContext`, `Inbox` |
//! | [`rules`] | `salvo-rules` | The firing-squad transition rule |
//! | [`engine`] | `salvo-engine` | `Squad` driver, metrics, outcomes |
//! | [`replay`] | `salvo-replay` | Trace recording and comparison |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`salvo-core`).
///
/// Contains the [`types::Machine`] record, its summaries, and the line
/// access traits ([`types::LineReader`], [`types::LineWriter`],
/// [`types::SnapshotAccess`]).
pub use salvo_core as types;

/// Double-buffered line storage (`salvo-arena`).
pub use salvo_arena as arena;

/// Line topology (`salvo-space`).
pub use salvo_space as space;

/// Transition rule trait and step context (`salvo-rule`).
///
/// [`rule::Rule`] is the extension point for custom automata.
pub use salvo_rule as rule;

/// The firing-squad rule (`salvo-rules`).
pub use salvo_rules as rules;

/// Lockstep driver (`salvo-engine`).
pub use salvo_engine as engine;

/// Trace recording and determinism verification (`salvo-replay`).
///
/// Record runs with [`replay::TraceRecorder`] and compare them with
/// [`replay::compare_traces`].
pub use salvo_replay as replay;

/// Common imports for typical Salvo usage.
///
/// ```rust
/// use salvo::prelude::*;
/// ```
pub mod prelude {
    // Arena snapshots
    pub use salvo_arena::{OwnedSnapshot, Snapshot};

    // Core types and traits
    pub use salvo_core::{
        Color, General, Kind, LineReader, Machine, MachineSummary, Payload, Position,
        SnapshotAccess, Soldier, StepId,
    };

    // Space
    pub use salvo_space::Line;

    // Rules
    pub use salvo_rule::{Rule, StepContext};
    pub use salvo_rules::FiringSquad;

    // Engine
    pub use salvo_engine::{
        DriverState, Observer, Outcome, Squad, SquadConfig, StepError, StepMetrics, StepResult,
    };

    // Replay
    pub use salvo_replay::TraceRecorder;
}
