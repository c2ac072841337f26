//! Double-buffered generation storage for Salvo squads.
//!
//! A squad step reads the whole previous generation and writes the whole
//! next one. The arena keeps exactly two buffers and swaps their roles on
//! publish:
//!
//! ```text
//! PingPongLine (orchestrator)
//! ├── buffer_a: Vec<Machine>  ←─── staging (odd steps) / published (even)
//! ├── buffer_b: Vec<Machine>  ←─── published (odd steps) / staging (even)
//! └── b_is_staging flag, generation counter, last published StepId
//! ```
//!
//! Per step:
//! 1. `begin_step()` returns a [`StepGuard`] holding a read-only
//!    [`Snapshot`] of the published buffer and a [`WriteLine`] over the
//!    staging buffer.
//! 2. The rule writes every position through the `WriteLine`.
//! 3. `publish()` flips the flag; the staging buffer becomes visible.
//!
//! Both buffers are allocated once; stepping never allocates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod pingpong;
pub mod read;
pub mod write;

// Public re-exports for the primary API surface.
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use pingpong::{PingPongLine, StepGuard};
pub use read::{OwnedSnapshot, Snapshot};
pub use write::WriteLine;
