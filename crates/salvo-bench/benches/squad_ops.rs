//! Criterion benchmarks for whole runs and single steps.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use salvo_bench::{run_to_fire, stress_profile, RUN_LENGTHS};
use salvo_engine::{Squad, SquadConfig};

fn bench_run_to_fire(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_to_fire");
    group.sample_size(20);
    for n in RUN_LENGTHS {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let outcome = run_to_fire(SquadConfig::new(n)).unwrap();
                black_box(outcome);
            });
        });
    }
    group.finish();
}

fn bench_step_max_length(c: &mut Criterion) {
    let mut squad = Squad::new(stress_profile()).unwrap();

    // Warm up: the first step touches both buffers.
    squad.step_sync().unwrap();

    c.bench_function("step_1024", |b| {
        b.iter(|| {
            if squad.outcome().is_some() {
                squad.reset().unwrap();
            }
            let result = squad.step_sync().unwrap();
            black_box(result.metrics.changed);
        });
    });
}

criterion_group!(benches, bench_run_to_fire, bench_step_max_length);
criterion_main!(benches);
