//! Salvo Quickstart: run a firing squad and print every generation.
//!
//! Demonstrates:
//!   1. Building a SquadConfig and Squad
//!   2. Stepping with step_sync() and reading snapshots
//!   3. Running to completion with an observer
//!   4. Plugging in a custom rule
//!
//! Run with:
//!   cargo run --example quickstart

use salvo_core::{General, Machine, Position, SnapshotAccess, Soldier};
use salvo_engine::{DriverState, Squad, SquadConfig, StepMetrics};
use salvo_rule::{Rule, StepContext};
use salvo_space::Line;

// ─── A custom rule: a red wave sweeping left to right ───────────

struct Sweep;

impl Rule for Sweep {
    fn name(&self) -> &str {
        "sweep"
    }

    fn seed(&self, _line: &Line, position: Position) -> Machine {
        if position.0 == 0 {
            General::left_end().into()
        } else {
            Soldier::recruit().into()
        }
    }

    fn transition(&self, ctx: &StepContext<'_>, position: Position) -> Machine {
        let current = ctx.machine(position).copied();
        let left_red = position
            .0
            .checked_sub(1)
            .and_then(|p| ctx.machine(Position(p)))
            .is_some_and(|m| m.is_red());
        match current {
            Some(m) if m.is_red() => m,
            _ if left_red => General::right_end().into(),
            Some(m) => m,
            None => Soldier::recruit().into(),
        }
    }
}

fn render(snap: &dyn SnapshotAccess) -> String {
    snap.summaries().iter().map(|s| s.to_string()).collect()
}

fn main() {
    // ─── 1. Step by hand ────────────────────────────────────────
    let mut squad = Squad::new(SquadConfig::new(5)).expect("valid config");
    println!("{:>4}  {}", 0, render(&squad.snapshot()));
    for _ in 0..5 {
        let result = squad.step_sync().expect("squad still running");
        println!(
            "{:>4}  {}  ({} changed)",
            result.snapshot.step_id(),
            render(&result.snapshot),
            result.metrics.changed
        );
    }

    // ─── 2. Run to completion ───────────────────────────────────
    let mut promotions = 0;
    let outcome = squad
        .run(&mut |_: &dyn SnapshotAccess, m: &StepMetrics| promotions += m.promotions)
        .expect("run completes");
    println!("{outcome} after {promotions} promotions");
    assert_eq!(outcome.state, DriverState::Fired);

    // ─── 3. Custom rule ─────────────────────────────────────────
    let mut sweep = Squad::with_rule(SquadConfig::new(6), Sweep).expect("valid config");
    let outcome = sweep
        .run(&mut |snap: &dyn SnapshotAccess, _: &StepMetrics| {
            println!("{:>4}  {}", snap.step_id(), render(snap))
        })
        .expect("run completes");
    println!("sweep: {outcome}");
}
