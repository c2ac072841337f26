//! Transition rule trait and step context for Salvo squads.
//!
//! The [`Rule`] trait defines the `&self` per-position transition function.
//! Rules read only the previous generation, through [`StepContext`], so
//! every position of a step can be computed in any order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod inbox;
pub mod rule;

pub use context::StepContext;
pub use inbox::Inbox;
pub use rule::Rule;
