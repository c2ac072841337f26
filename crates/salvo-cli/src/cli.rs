//! Command-line arguments.

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use salvo_engine::SquadConfig;

/// Firing squad synchronization on a line of finite-state machines.
#[derive(Debug, Parser)]
#[command(name = "salvo")]
#[command(version)]
#[command(about = "Simulate the firing squad synchronization problem")]
pub struct Cli {
    /// Number of machines in the line.
    #[arg(short = 'n', long, default_value_t = SquadConfig::DEFAULT_LENGTH)]
    pub length: u32,

    /// Stop after this many steps; zero or negative runs until firing.
    #[arg(short = 't', long, default_value_t = -1, allow_negative_numbers = true)]
    pub max_steps: i64,

    /// Seconds to pause between steps.
    #[arg(short = 'd', long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub delay: f64,

    /// Print the machine state legend before running.
    #[arg(short = 'l', long)]
    pub legend: bool,
}

impl Cli {
    /// Map the flags onto a squad configuration.
    pub fn squad_config(&self) -> SquadConfig {
        let config = SquadConfig::new(self.length);
        match u64::try_from(self.max_steps) {
            Ok(max) if max > 0 => config.with_max_steps(max),
            _ => config,
        }
    }

    /// The pause between steps.
    ///
    /// Fails on negative, non-finite, or unrepresentably long delays.
    pub fn pause(&self) -> anyhow::Result<Duration> {
        Duration::try_from_secs_f64(self.delay)
            .with_context(|| format!("invalid delay of {} seconds", self.delay))
    }
}
