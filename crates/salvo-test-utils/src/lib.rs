//! Test utilities and mock types for Salvo development.
//!
//! Provides a mock implementation of the core line traits
//! ([`LineReader`], [`SnapshotAccess`]), fixture rules, and
//! [`collect_run`], a reference stepping loop that does not go through
//! the arena or the engine.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{IdentityRule, PaintRedRule};

use salvo_core::{LineReader, Machine, Position, SnapshotAccess, StepId};
use salvo_rule::{Rule, StepContext};
use salvo_space::Line;

/// Mock implementation of [`LineReader`] and [`SnapshotAccess`].
///
/// Backed by a plain `Vec<Machine>`. Edit positions with
/// [`set`](MockLine::set) before passing to code under test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockLine {
    machines: Vec<Machine>,
    step: StepId,
}

impl MockLine {
    pub fn new(machines: Vec<Machine>) -> Self {
        Self {
            machines,
            step: StepId(0),
        }
    }

    /// Seed a line of `len` machines from `rule`.
    pub fn seeded(rule: &dyn Rule, len: u32) -> Self {
        let line = Line::new(len).expect("mock line length must be nonzero");
        Self::new(line.positions().map(|p| rule.seed(&line, p)).collect())
    }

    /// Attach a step id for [`SnapshotAccess::step_id`].
    pub fn with_step(mut self, step: StepId) -> Self {
        self.step = step;
        self
    }

    /// Overwrite one position.
    pub fn set(&mut self, position: Position, machine: impl Into<Machine>) {
        self.machines[position.index()] = machine.into();
    }
}

impl LineReader for MockLine {
    fn machines(&self) -> &[Machine] {
        &self.machines
    }
}

impl SnapshotAccess for MockLine {
    fn step_id(&self) -> StepId {
        self.step
    }
}

/// Run `rule` on a line of `len` machines with a plain `Vec` per
/// generation, stopping once every machine is red or after `max_steps`.
///
/// Returns every generation including the seed, so `result.len() - 1` is
/// the number of steps taken.
pub fn collect_run(rule: &dyn Rule, len: u32, max_steps: u64) -> Vec<Vec<Machine>> {
    let line = Line::new(len).expect("collect_run length must be nonzero");
    let mut current = MockLine::seeded(rule, len);
    let mut generations = vec![current.machines.clone()];
    let mut step = 0u64;
    while step < max_steps && !current.machines.iter().all(Machine::is_red) {
        step += 1;
        let ctx = StepContext::new(&current, &line, StepId(step));
        let next: Vec<Machine> = line.positions().map(|p| rule.transition(&ctx, p)).collect();
        generations.push(next.clone());
        current = MockLine::new(next).with_step(StepId(step));
    }
    generations
}
