//! End-to-end synchronization properties of the firing-squad squad.

use proptest::prelude::*;
use salvo_core::{LineReader, Machine, Payload, SnapshotAccess, StepId};
use salvo_engine::partition::segments;
use salvo_engine::{DriverState, Outcome, Squad, SquadConfig, StepMetrics};

/// Run a squad to completion, returning every generation.
fn generations(len: u32, cap: u64) -> (Outcome, Vec<Vec<Machine>>) {
    let mut squad = Squad::new(SquadConfig::new(len).with_max_steps(cap)).unwrap();
    let mut frames = Vec::new();
    let outcome = squad
        .run(&mut |snap: &dyn SnapshotAccess, _: &StepMetrics| {
            frames.push(snap.machines().to_vec())
        })
        .unwrap();
    (outcome, frames)
}

fn bound(len: u32) -> u64 {
    2 * u64::from(len) * u64::from(len)
}

#[test]
fn fires_for_assorted_lengths() {
    for len in [1, 2, 3, 4, 5, 8, 9, 16, 17, 32, 33] {
        let (outcome, _) = generations(len, 100_000);
        assert_eq!(outcome.state, DriverState::Fired, "length {len}");
    }
}

#[test]
fn firing_is_simultaneous() {
    for len in [3, 4, 5, 8, 9, 16, 17] {
        let (outcome, frames) = generations(len, 100_000);
        let step = outcome.step.0 as usize;
        assert_eq!(frames.len(), step + 1);
        assert!(frames[step].iter().all(Machine::is_red), "length {len}");
        assert!(
            frames[step - 1].iter().any(|m| !m.is_red()),
            "length {len} was already red one step early"
        );
    }
}

#[test]
fn firing_step_stays_within_quadratic_bound() {
    for len in [3, 4, 5, 8, 9, 16, 17, 32, 33, 64] {
        let (outcome, _) = generations(len, bound(len));
        assert!(outcome.fired(), "length {len} exceeded 2N² steps");
    }
}

#[test]
fn reference_firing_steps() {
    let cases = [(1, 0), (2, 0), (3, 4), (4, 7), (8, 50), (17, 340)];
    for (len, step) in cases {
        let (outcome, _) = generations(len, 100_000);
        assert_eq!(outcome.step, StepId(step), "length {len}");
    }
}

#[test]
fn nine_splits_at_its_middle_into_equal_halves() {
    let (_, frames) = generations(9, 100_000);
    let split = frames
        .iter()
        .map(|f| segments(&salvo_test_utils::MockLine::new(f.clone())))
        .find(|s| s.len() > 1)
        .unwrap();
    assert_eq!(split.len(), 2);
    assert_eq!(split[0].right.0, 4);
    assert_eq!(split[0].len(), split[1].len());
}

/// Positions of the generals in one generation.
fn general_positions(frame: &[Machine]) -> Vec<u32> {
    frame
        .iter()
        .enumerate()
        .filter(|(_, m)| m.is_general())
        .map(|(i, _)| i as u32)
        .collect()
}

#[test]
fn nine_halves_recurse_at_their_own_middles() {
    let (outcome, frames) = generations(9, 100_000);
    assert_eq!(outcome.step, StepId(84));

    // Each change in the general layout, with the step it first appears.
    let mut layouts: Vec<(usize, Vec<u32>)> = Vec::new();
    for (step, frame) in frames.iter().enumerate() {
        let generals = general_positions(frame);
        if layouts.last().is_none_or(|(_, last)| *last != generals) {
            layouts.push((step, generals));
        }
    }
    assert_eq!(
        layouts,
        vec![
            (0, vec![0, 8]),
            (64, vec![0, 4, 8]),
            (80, vec![0, 2, 4, 6, 8]),
            (84, (0..9).collect()),
        ]
    );

    // Both five-machine halves are split by the same step, and every
    // sub-squad has collapsed to adjacent generals when the line fires.
    let quarters = segments(&salvo_test_utils::MockLine::new(frames[80].clone()));
    assert_eq!(quarters.iter().map(|s| s.len()).collect::<Vec<_>>(), vec![3; 4]);
    let last = frames.last().unwrap();
    let settled = segments(&salvo_test_utils::MockLine::new(last.clone()));
    assert_eq!(settled.len(), 8);
    assert!(settled.iter().all(|s| s.is_settled()));
}

#[test]
fn cap_stops_a_run_before_firing() {
    let (outcome, frames) = generations(17, 100);
    assert_eq!(
        outcome,
        Outcome {
            state: DriverState::Capped,
            step: StepId(100)
        }
    );
    assert_eq!(frames.len(), 101);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn every_length_fires_once_and_for_all(len in 1u32..48) {
        let (outcome, frames) = generations(len, bound(len).max(1));
        prop_assert!(outcome.fired());

        // Generals are never demoted, and only the last frame is all red.
        for pair in frames.windows(2) {
            for (before, after) in pair[0].iter().zip(&pair[1]) {
                prop_assert!(!before.is_general() || after.is_general());
            }
            prop_assert!(!pair[0].iter().all(Machine::is_red));
        }
    }

    #[test]
    fn generals_block_soldier_traffic(len in 1u32..48) {
        let (_, frames) = generations(len, bound(len).max(1));
        for (step, pair) in frames.windows(2).enumerate() {
            for (p, (before, after)) in pair[0].iter().zip(&pair[1]).enumerate() {
                if !after.is_general() {
                    continue;
                }
                let payload = after.outgoing().payload;
                // Generals originate Test and MidAck; they never forward
                // MidTest or Promote.
                prop_assert!(
                    matches!(
                        payload,
                        Payload::Empty | Payload::Test | Payload::MidAck | Payload::Reset
                    ),
                    "general at {} sent {:?} at step {}", p, payload, step + 1
                );
                // Reset leaves a general only on the step it was promoted.
                if payload == Payload::Reset {
                    prop_assert!(!before.is_general(), "general at {} relayed Reset", p);
                }
            }
        }
    }

    #[test]
    fn segments_tile_the_line(len in 2u32..40, pick in 0usize..1000) {
        let (_, frames) = generations(len, bound(len).max(1));
        let frame = &frames[pick % frames.len()];
        let segs = segments(&salvo_test_utils::MockLine::new(frame.clone()));
        prop_assert_eq!(segs.first().map(|s| s.left.0), Some(0));
        prop_assert_eq!(segs.last().map(|s| s.right.0), Some(len - 1));
        for w in segs.windows(2) {
            prop_assert_eq!(w[0].right, w[1].left);
        }
    }
}
