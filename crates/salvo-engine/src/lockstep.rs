//! Lockstep squad driver.
//!
//! [`Squad`] is the primary user-facing API. Each call to
//! [`step_sync()`](Squad::step_sync) executes one synchronous step, checks
//! for termination, and returns a snapshot of the resulting line.
//!
//! # Ownership model
//!
//! `Squad` is [`Send`] but not shared: all mutating methods take
//! `&mut self`, and [`step_sync()`](Squad::step_sync) returns a
//! [`Snapshot`] that borrows from `self`. The caller cannot step again
//! while holding that snapshot.

use salvo_arena::Snapshot;
use salvo_core::{SnapshotAccess, StepId};
use salvo_rule::Rule;
use salvo_rules::FiringSquad;
use salvo_space::Line;
use tracing::info;

use crate::config::{ConfigError, SquadConfig};
use crate::metrics::StepMetrics;
use crate::observer::Observer;
use crate::outcome::{DriverState, Outcome, StepError};
use crate::step::StepEngine;
use crate::termination;

// Compile-time assertion: Squad is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Squad>();
    }
};

// ── StepResult ──────────────────────────────────────────────────

/// Result of a successful [`Squad::step_sync()`] call.
pub struct StepResult<'s> {
    /// Read-only snapshot of the line after this step.
    pub snapshot: Snapshot<'s>,
    /// Metrics for this step.
    pub metrics: StepMetrics,
    /// Driver state after this step.
    pub state: DriverState,
}

// ── Squad ───────────────────────────────────────────────────────

/// A line of machines driven to synchronization.
///
/// Created from a [`SquadConfig`] via [`new()`](Squad::new). The seeded
/// line is checked for termination immediately, so a one- or two-machine
/// squad is `Fired` at step 0 before any step is taken.
///
/// # Example
///
/// ```
/// use salvo_engine::{DriverState, Squad, SquadConfig};
///
/// let mut squad = Squad::new(SquadConfig::new(3)).unwrap();
/// while squad.state() == DriverState::Running {
///     squad.step_sync().unwrap();
/// }
/// assert_eq!(squad.outcome().unwrap().step.0, 4);
/// ```
pub struct Squad {
    engine: StepEngine,
    config: SquadConfig,
    state: DriverState,
}

impl Squad {
    /// Create a squad running the firing-squad rule.
    pub fn new(config: SquadConfig) -> Result<Self, ConfigError> {
        Self::with_rule(config, FiringSquad)
    }

    /// Create a squad running an arbitrary rule.
    ///
    /// Validates the configuration, seeds the line, and evaluates the
    /// termination check on the seed.
    pub fn with_rule(config: SquadConfig, rule: impl Rule) -> Result<Self, ConfigError> {
        config.validate()?;
        let line = Line::new(config.length)?;
        let engine = StepEngine::new(line, Box::new(rule))?;
        let mut squad = Self {
            engine,
            config,
            state: DriverState::Running,
        };
        squad.update_state();
        Ok(squad)
    }

    /// Execute one step synchronously.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Finished`] once the squad has fired or been
    /// capped; the line is left untouched.
    pub fn step_sync(&mut self) -> Result<StepResult<'_>, StepError> {
        if let Some(outcome) = self.outcome() {
            return Err(StepError::Finished { outcome });
        }
        let metrics = self.engine.execute_step()?;
        self.update_state();
        Ok(StepResult {
            snapshot: self.engine.snapshot(),
            metrics,
            state: self.state,
        })
    }

    /// Step until a terminal state, showing every generation (the seed
    /// included) to `observer`.
    ///
    /// With no step budget this only returns once the squad fires.
    pub fn run(&mut self, observer: &mut dyn Observer) -> Result<Outcome, StepError> {
        observer.on_step(&self.engine.snapshot(), self.engine.last_metrics());
        loop {
            if let Some(outcome) = self.outcome() {
                return Ok(outcome);
            }
            let result = self.step_sync()?;
            observer.on_step(&result.snapshot, &result.metrics);
        }
    }

    /// Reseed the line at step 0.
    pub fn reset(&mut self) -> Result<Snapshot<'_>, ConfigError> {
        self.engine.reset()?;
        self.state = DriverState::Running;
        self.update_state();
        Ok(self.engine.snapshot())
    }

    fn update_state(&mut self) {
        let snapshot = self.engine.snapshot();
        let step = snapshot.step_id();
        if termination::all_red(&snapshot) {
            self.state = DriverState::Fired;
            info!(
                length = self.config.length,
                step = step.0,
                "squad fired"
            );
        } else if self.config.step_budget().is_some_and(|max| step.0 >= max) {
            self.state = DriverState::Capped;
            info!(
                length = self.config.length,
                step = step.0,
                "step budget exhausted before firing"
            );
        }
    }

    /// Current driver state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// The terminal outcome, or `None` while running.
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.is_terminal().then(|| Outcome {
            state: self.state,
            step: self.engine.current_step(),
        })
    }

    /// Get a read-only snapshot of the current published generation.
    pub fn snapshot(&self) -> Snapshot<'_> {
        self.engine.snapshot()
    }

    /// Current step (0 after construction or reset).
    pub fn current_step(&self) -> StepId {
        self.engine.current_step()
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        self.engine.last_metrics()
    }

    /// The configuration this squad was built from.
    pub fn config(&self) -> &SquadConfig {
        &self.config
    }

    /// The line topology.
    pub fn line(&self) -> &Line {
        self.engine.line()
    }
}

impl std::fmt::Debug for Squad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Squad")
            .field("length", &self.config.length)
            .field("current_step", &self.engine.current_step())
            .field("state", &self.state)
            .field("rule", &self.engine.rule_name())
            .finish()
    }
}
