//! Performance benchmarks for walker_core using Criterion.rs.

use bevy_ecs::prelude::World;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use walker_core::config::SimulationConfig;
use walker_core::direction::DirectionSet;
use walker_core::runner::{initialize_simulation, run_until_empty, simulation_schedule};
use walker_core::scenario::{build_scenario, ScenarioParams};

fn bench_simulation_run(c: &mut Criterion) {
    let scenarios = vec![("small", 5), ("medium", 25), ("large", 50)];

    let mut group = c.benchmark_group("simulation_run");
    for (name, walkers) in scenarios {
        group.bench_with_input(BenchmarkId::from_parameter(name), &walkers, |b, &walkers| {
            b.iter(|| {
                let mut world = World::new();
                let params = ScenarioParams::default()
                    .with_config(SimulationConfig::default().with_walker_count(walkers))
                    .with_seed(42);
                build_scenario(&mut world, params);
                initialize_simulation(&mut world);
                let mut schedule = simulation_schedule();
                // SimulationStarted plus 500 ticks.
                black_box(run_until_empty(&mut world, &mut schedule, 501));
            });
        });
    }
    group.finish();
}

fn bench_direction_quantizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("direction_quantizer");

    group.bench_function("generate_360", |b| {
        b.iter(|| black_box(DirectionSet::generate(black_box(360))));
    });

    let set = DirectionSet::generate(360).expect("valid limit");
    group.bench_function("nearest_of_361", |b| {
        b.iter(|| black_box(set.nearest(black_box(123.4))));
    });

    group.finish();
}

criterion_group!(benches, bench_simulation_run, bench_direction_quantizer);
criterion_main!(benches);
