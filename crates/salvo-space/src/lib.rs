//! Spatial topology for the Salvo automaton.
//!
//! The firing squad lives on a [`Line`]: positions `0..len` with absorbing
//! edges, so the two end machines have a single neighbour. Transition
//! rules use the line to resolve which neighbours exist before reading
//! their messages.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod line;

pub use error::SpaceError;
pub use line::Line;
