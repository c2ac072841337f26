//! `salvo`: print a firing squad generation by generation until it fires.

#![forbid(unsafe_code)]

mod cli;
mod render;

use std::io::{self, Write};
use std::thread;

use anyhow::Context;
use clap::Parser;
use salvo_engine::{Squad, StepError};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let delay = cli.pause()?;
    let config = cli.squad_config();
    debug!(length = config.length, max_steps = ?config.max_steps, "starting squad");

    let mut squad = Squad::new(config).context("invalid squad configuration")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.legend {
        writeln!(out, "{}", render::LEGEND)?;
    }
    render::write_generation(&mut out, &squad.snapshot())?;

    let outcome = loop {
        if let Some(outcome) = squad.outcome() {
            break outcome;
        }
        if !delay.is_zero() {
            out.flush()?;
            thread::sleep(delay);
        }
        match squad.step_sync() {
            Ok(result) => render::write_generation(&mut out, &result.snapshot)?,
            Err(StepError::Finished { outcome }) => break outcome,
            Err(e) => return Err(e).context("step failed"),
        }
    };

    render::write_outcome(&mut out, squad.config().length, &outcome)?;
    out.flush()?;
    Ok(())
}
