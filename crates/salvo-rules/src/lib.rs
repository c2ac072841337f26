//! The firing-squad transition rule.
//!
//! [`FiringSquad`] solves the firing squad synchronization problem by
//! recursive bisection. An active general sends a probe, the first active
//! soldier it reaches asks both bounding generals whether it is the
//! middle, and the generals' acknowledgements decide it:
//!
//! 1. Both acknowledgements arrive in the same step: the soldier is the
//!    middle of an odd-length squad and becomes a general at once.
//! 2. They arrive within the acknowledgement window: the candidate and its
//!    neighbour are the two middles of an even-length squad; the
//!    neighbour is told to promote itself.
//! 3. Otherwise the candidate passivates and hands the probe on.
//!
//! Each promotion splits a squad into two halves that recurse
//! independently. Generals are red, so the line fires in the first step
//! where every machine is a general.
//!
//! The per-kind transitions live in [`general`] and [`soldier`] as pure
//! functions over a machine and its [`Inbox`](salvo_rule::Inbox).

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod firing_squad;
pub mod general;
pub mod soldier;

pub use firing_squad::FiringSquad;
