mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use noise_compose::prelude::{module_ref, Blend, Const, Subtract};

const FALL_OFFS: [f64; 3] = [0.0, 0.125, 0.5];

fn select_benches(c: &mut Criterion) {
    let points = common::generate_grid_points(common::EXTENT, common::GRID_RESOLUTION);

    let mut group = c.benchmark_group("operators/select");
    group.throughput(common::points_throughput(&points));

    for &fall_off in &FALL_OFFS {
        let graph = common::terrain_graph(fall_off);
        group.bench_with_input(BenchmarkId::new("fall_off", fall_off), &fall_off, |b, _| {
            b.iter(|| black_box(common::sum_over(graph.as_ref(), &points)));
        });
    }

    group.finish();
}

fn arithmetic_benches(c: &mut Criterion) {
    let points = common::generate_grid_points(common::EXTENT, common::GRID_RESOLUTION);
    let w = common::wave();

    let subtract = Subtract::with_sources(w.clone(), module_ref(Const::new(0.25)));
    let blend = Blend::with_sources(w.clone(), module_ref(Const::new(1.0)), w);

    let mut group = c.benchmark_group("operators/arithmetic");
    group.throughput(common::points_throughput(&points));

    group.bench_function("subtract", |b| {
        b.iter(|| black_box(common::sum_over(&subtract, &points)));
    });

    group.bench_function("blend", |b| {
        b.iter(|| black_box(common::sum_over(&blend, &points)));
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = select_benches, arithmetic_benches
}
criterion_main!(benches);
