//! Double-buffered ping-pong line orchestrator.
//!
//! [`PingPongLine`] holds two machine buffers that alternate between
//! "staging" (writable) and "published" (readable) roles. On
//! [`PingPongLine::publish`] the staging buffer becomes published and the
//! old published buffer becomes the next staging buffer.
//!
//! The lifecycle per step is:
//! 1. `begin_step()`: seed staging from published, hand out a [`StepGuard`]
//! 2. The rule reads `guard.previous` and writes via `guard.writer`
//! 3. `publish()`: flip the buffers, advance the generation
//! 4. `snapshot()`: borrow the published buffer as a [`Snapshot`]

use salvo_core::{Machine, StepId};

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::read::{OwnedSnapshot, Snapshot};
use crate::write::WriteLine;

/// Step guard providing read access to the previous generation and write
/// access to the next one.
///
/// Created by [`PingPongLine::begin_step()`] and dropped before
/// [`PingPongLine::publish()`]. Holds a shared borrow of the published
/// buffer and a mutable borrow of the staging buffer, so nothing else can
/// touch the arena during the step.
#[must_use]
pub struct StepGuard<'a> {
    /// The published generation the step reads from.
    pub previous: Snapshot<'a>,
    /// Mutable write access to the staging buffer.
    pub writer: WriteLine<'a>,
}

/// Double-buffered line with ping-pong swap.
///
/// # Buffer layout
///
/// ```text
/// buffer_a: Vec<Machine>  ←─── staging (even generations) / published (odd)
/// buffer_b: Vec<Machine>  ←─── published (even generations) / staging (odd)
/// ```
pub struct PingPongLine {
    /// Machine buffer A.
    buffer_a: Vec<Machine>,
    /// Machine buffer B.
    buffer_b: Vec<Machine>,
    /// Per-position write flags for the step in progress.
    written: Vec<bool>,
    /// Current generation (incremented on publish).
    generation: u32,
    /// Generation computed by `begin_step()`, consumed by `publish()`.
    next_generation: u32,
    /// Whether `begin_step()` was called and `publish()` not yet.
    step_in_progress: bool,
    /// Which buffer is currently staging (false = A staging, true = B staging).
    b_is_staging: bool,
    /// Last published step.
    last_step_id: StepId,
    config: ArenaConfig,
}

impl PingPongLine {
    /// Create a new arena whose published generation is `seed`.
    ///
    /// Returns `Err(ArenaError::LengthMismatch)` if `seed` does not hold
    /// exactly `config.length` machines.
    pub fn new(config: ArenaConfig, seed: Vec<Machine>) -> Result<Self, ArenaError> {
        check_len(&config, &seed)?;
        let len = seed.len();
        Ok(Self {
            buffer_a: seed.clone(),
            buffer_b: seed,
            written: vec![false; len],
            generation: 0,
            next_generation: 0,
            step_in_progress: false,
            b_is_staging: false,
            last_step_id: StepId(0),
            config,
        })
    }

    /// Begin a new step.
    ///
    /// The staging buffer is overwritten with the published generation, so
    /// positions a rule leaves untouched carry forward unchanged.
    ///
    /// Returns `Err(StepInProgress)` if the previous step was never
    /// published, or `Err(GenerationOverflow)` at `u32::MAX` generations.
    pub fn begin_step(&mut self) -> Result<StepGuard<'_>, ArenaError> {
        if self.step_in_progress {
            return Err(ArenaError::StepInProgress);
        }
        let next_gen = self
            .generation
            .checked_add(1)
            .ok_or(ArenaError::GenerationOverflow)?;

        self.step_in_progress = true;
        self.next_generation = next_gen;
        self.written.fill(false);

        let (published, staging) = if self.b_is_staging {
            (&self.buffer_a, &mut self.buffer_b)
        } else {
            (&self.buffer_b, &mut self.buffer_a)
        };
        staging.copy_from_slice(published);

        Ok(StepGuard {
            previous: Snapshot::new(published, self.last_step_id, self.generation),
            writer: WriteLine::new(staging, &mut self.written),
        })
    }

    /// Publish the staging buffer as generation `step_id`.
    ///
    /// Returns `Err(NoStepInProgress)` if `begin_step()` was not called
    /// first or if `publish()` is called twice in a row.
    pub fn publish(&mut self, step_id: StepId) -> Result<(), ArenaError> {
        if !self.step_in_progress {
            return Err(ArenaError::NoStepInProgress);
        }
        self.generation = self.next_generation;
        self.step_in_progress = false;
        self.b_is_staging = !self.b_is_staging;
        self.last_step_id = step_id;
        Ok(())
    }

    fn published(&self) -> &[Machine] {
        if self.b_is_staging {
            &self.buffer_a
        } else {
            &self.buffer_b
        }
    }

    /// Borrow the published generation.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(self.published(), self.last_step_id, self.generation)
    }

    /// Copy the published generation into an [`OwnedSnapshot`].
    pub fn owned_snapshot(&self) -> OwnedSnapshot {
        self.snapshot().to_owned_snapshot()
    }

    /// Reset the arena so that `seed` is published at step 0.
    ///
    /// Discards any step in progress.
    pub fn reset(&mut self, seed: &[Machine]) -> Result<(), ArenaError> {
        check_len(&self.config, seed)?;
        self.buffer_a.copy_from_slice(seed);
        self.buffer_b.copy_from_slice(seed);
        self.written.fill(false);
        self.generation = 0;
        self.next_generation = 0;
        self.step_in_progress = false;
        self.b_is_staging = false;
        self.last_step_id = StepId(0);
        Ok(())
    }

    /// Current generation number.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Whether a step has begun but not yet been published.
    pub fn step_in_progress(&self) -> bool {
        self.step_in_progress
    }

    /// Get a reference to the arena config.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }
}

fn check_len(config: &ArenaConfig, seed: &[Machine]) -> Result<(), ArenaError> {
    if seed.len() != config.cell_count() {
        return Err(ArenaError::LengthMismatch {
            expected: config.cell_count(),
            actual: seed.len(),
        });
    }
    Ok(())
}
