//! Step engine: the single-threaded stepping loop.
//!
//! [`StepEngine`] wires a [`Rule`] to the double-buffered arena. One
//! [`execute_step()`](StepEngine::execute_step) computes every position of
//! the next generation from the published one, then publishes it. It knows
//! nothing about termination; [`Squad`](crate::Squad) layers the driver
//! state machine on top.

use std::time::Instant;

use salvo_arena::{ArenaConfig, PingPongLine, Snapshot};
use salvo_core::{LineReader, LineWriter, Machine, StepId};
use salvo_rule::{Rule, StepContext};
use salvo_space::Line;
use tracing::{debug, trace};

use crate::config::ConfigError;
use crate::metrics::StepMetrics;
use crate::outcome::StepError;
use crate::partition;
use crate::termination;

/// Single-threaded step engine.
///
/// Owns the arena and the rule. Each `execute_step()` call runs the rule
/// at every position against the frozen previous generation and publishes
/// the result.
pub struct StepEngine {
    arena: PingPongLine,
    rule: Box<dyn Rule>,
    line: Line,
    current_step: StepId,
    last_metrics: StepMetrics,
}

impl StepEngine {
    /// Construct an engine and seed generation 0 from `rule`.
    pub fn new(line: Line, rule: Box<dyn Rule>) -> Result<Self, ConfigError> {
        let seed = seed_line(&line, rule.as_ref());
        let arena = PingPongLine::new(ArenaConfig::new(line.len()), seed)?;
        let last_metrics = StepMetrics {
            red_count: termination::red_count(&arena.snapshot()) as u32,
            ..StepMetrics::default()
        };
        Ok(Self {
            arena,
            rule,
            line,
            current_step: StepId(0),
            last_metrics,
        })
    }

    /// Execute one synchronous step.
    ///
    /// Every position is computed from the previous generation only; the
    /// staging buffer is not visible to the rule.
    pub fn execute_step(&mut self) -> Result<StepMetrics, StepError> {
        let step_start = Instant::now();
        let next_step = self
            .current_step
            .next()
            .ok_or(StepError::Arena(salvo_arena::ArenaError::GenerationOverflow))?;

        let mut changed = 0u32;
        let mut promotions = 0u32;
        let rule_us;
        {
            let mut guard = self.arena.begin_step()?;
            let ctx = StepContext::new(&guard.previous, &self.line, next_step);
            let rule_start = Instant::now();
            for position in self.line.positions() {
                let before = guard.previous.machines()[position.index()];
                let after = self.rule.transition(&ctx, position);
                if after != before {
                    changed += 1;
                    if after.is_general() && !before.is_general() {
                        promotions += 1;
                        debug!(
                            position = position.0,
                            step = next_step.0,
                            "soldier promoted to general"
                        );
                    }
                }
                if let Some(slot) = guard.writer.write(position) {
                    *slot = after;
                }
            }
            rule_us = rule_start.elapsed().as_micros() as u64;
            debug_assert!(guard.writer.is_complete());
        }

        self.arena.publish(next_step)?;
        self.current_step = next_step;

        let snapshot = self.arena.snapshot();
        let red_count = termination::red_count(&snapshot) as u32;
        if promotions > 0 {
            let segments = partition::segments(&snapshot);
            debug!(
                step = next_step.0,
                segments = segments.len(),
                settled = segments.iter().filter(|s| s.is_settled()).count(),
                "squad split"
            );
        }
        trace!(step = next_step.0, changed, red_count, "step published");

        let metrics = StepMetrics {
            total_us: step_start.elapsed().as_micros() as u64,
            rule_us,
            changed,
            promotions,
            red_count,
        };
        self.last_metrics = metrics.clone();
        Ok(metrics)
    }

    /// Reseed the line and return to step 0.
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        let seed = seed_line(&self.line, self.rule.as_ref());
        self.arena.reset(&seed)?;
        self.current_step = StepId(0);
        self.last_metrics = StepMetrics {
            red_count: termination::red_count(&self.arena.snapshot()) as u32,
            ..StepMetrics::default()
        };
        Ok(())
    }

    /// Get a read-only snapshot of the current published generation.
    pub fn snapshot(&self) -> Snapshot<'_> {
        self.arena.snapshot()
    }

    /// Current step (0 after construction or reset).
    pub fn current_step(&self) -> StepId {
        self.current_step
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// The line topology.
    pub fn line(&self) -> &Line {
        &self.line
    }

    /// The rule's name.
    pub fn rule_name(&self) -> &str {
        self.rule.name()
    }
}

fn seed_line(line: &Line, rule: &dyn Rule) -> Vec<Machine> {
    line.positions().map(|p| rule.seed(line, p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use salvo_core::SnapshotAccess;
    use salvo_rules::FiringSquad;
    use salvo_test_utils::{collect_run, IdentityRule, PaintRedRule};

    fn engine(len: u32, rule: impl Rule) -> StepEngine {
        StepEngine::new(Line::new(len).unwrap(), Box::new(rule)).unwrap()
    }

    #[test]
    fn new_publishes_seed_at_step_zero() {
        let e = engine(5, FiringSquad);
        assert_eq!(e.current_step(), StepId(0));
        assert_eq!(e.snapshot().step_id(), StepId(0));
        assert_eq!(e.last_metrics().red_count, 2);
        assert_eq!(e.rule_name(), "FiringSquad");
    }

    #[test]
    fn step_advances_and_publishes() {
        let mut e = engine(5, FiringSquad);
        let metrics = e.execute_step().unwrap();
        assert_eq!(e.current_step(), StepId(1));
        assert_eq!(e.snapshot().step_id(), StepId(1));
        // Only the left general changes on the first step.
        assert_eq!(metrics.changed, 1);
        assert_eq!(metrics.promotions, 0);
        assert_eq!(&metrics, e.last_metrics());
    }

    #[test]
    fn identity_rule_changes_nothing() {
        let mut e = engine(4, IdentityRule);
        let before = e.snapshot().to_owned_snapshot();
        let metrics = e.execute_step().unwrap();
        assert_eq!(metrics.changed, 0);
        assert_eq!(e.snapshot().machines(), before.machines());
    }

    #[test]
    fn paint_red_counts_promotions() {
        let mut e = engine(6, PaintRedRule::new(2));
        assert_eq!(e.execute_step().unwrap().promotions, 0);
        let metrics = e.execute_step().unwrap();
        assert_eq!(metrics.promotions, 6);
        assert_eq!(metrics.red_count, 6);
    }

    #[test]
    fn engine_matches_reference_loop() {
        let reference = collect_run(&FiringSquad, 6, 200);
        let mut e = engine(6, FiringSquad);
        assert_eq!(e.snapshot().machines(), reference[0].as_slice());
        for expected in &reference[1..] {
            e.execute_step().unwrap();
            assert_eq!(e.snapshot().machines(), expected.as_slice());
        }
    }

    #[test]
    fn reset_returns_to_seed() {
        let mut e = engine(5, FiringSquad);
        let seed = e.snapshot().to_owned_snapshot();
        for _ in 0..10 {
            e.execute_step().unwrap();
        }
        e.reset().unwrap();
        assert_eq!(e.current_step(), StepId(0));
        assert_eq!(e.snapshot().machines(), seed.machines());
        assert_eq!(e.last_metrics().changed, 0);
    }
}
