//! Benchmark profiles and utilities for the Salvo firing squad engine.
//!
//! - [`RUN_LENGTHS`]: line lengths benchmarked from seed to firing
//! - [`stress_profile`]: a [`SquadConfig::MAX_LENGTH`] line for per-step
//!   throughput
//! - [`run_to_fire`]: drive a squad to its terminal state without
//!   observation

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use salvo_engine::{ConfigError, Outcome, Squad, SquadConfig, StepError};

/// Line lengths for full-run benchmarks.
pub const RUN_LENGTHS: [u32; 4] = [8, 16, 64, 128];

/// Longest supported line, with no step budget.
pub fn stress_profile() -> SquadConfig {
    SquadConfig::new(SquadConfig::MAX_LENGTH)
}

/// Error from [`run_to_fire`].
#[derive(Debug)]
pub enum RunError {
    /// The configuration was rejected.
    Config(ConfigError),
    /// A step failed.
    Step(StepError),
}

/// Build a squad and step it until it fires or exhausts its budget.
pub fn run_to_fire(config: SquadConfig) -> Result<Outcome, RunError> {
    let mut squad = Squad::new(config).map_err(RunError::Config)?;
    loop {
        if let Some(outcome) = squad.outcome() {
            return Ok(outcome);
        }
        squad.step_sync().map_err(RunError::Step)?;
    }
}
