//! Trace recording and determinism verification for Salvo squads.
//!
//! Records every generation of a run and compares two recordings for
//! divergence.
//!
//! # Architecture
//!
//! - [`TraceRecorder`] is an [`Observer`](salvo_engine::Observer) that
//!   stores one [`Frame`] per generation
//! - [`snapshot_hash`] folds a generation into a 64-bit FNV-1a hash
//! - [`compare_traces`] checks hashes first and falls back to
//!   per-position comparison to locate the first divergence

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod error;
pub mod hash;
pub mod recorder;

pub use compare::{compare_traces, first_divergence, DivergenceKind, DivergenceReport};
pub use error::ReplayError;
pub use hash::{snapshot_hash, summaries_hash};
pub use recorder::{Frame, TraceRecorder};
