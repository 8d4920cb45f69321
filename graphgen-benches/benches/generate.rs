//! Graph generation benchmarks.
//!
//! Times the edge deduplication pass on a fixed adjacency list and the full
//! generate pipeline (sampling, node building, deduplication) across graph
//! sizes and complexity factors.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::SmallRng};

use graphgen_benches::{adjacency_fixture, error::BenchSetupError, params::GraphBenchParams};
use graphgen_core::{GraphGenerator, build_edges};

/// Seed used for every benchmark fixture.
const SEED: u64 = 42;

/// Graph shapes to benchmark.
const CASES: &[GraphBenchParams] = &[
    GraphBenchParams {
        node_count: 100,
        complexity: 1,
    },
    GraphBenchParams {
        node_count: 1_000,
        complexity: 1,
    },
    GraphBenchParams {
        node_count: 1_000,
        complexity: 3,
    },
    GraphBenchParams {
        node_count: 10_000,
        complexity: 1,
    },
];

fn edge_dedup_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("build_edges");
    group.sample_size(20);
    for params in CASES {
        let adjacency = adjacency_fixture(params, SEED)?;
        group.bench_with_input(BenchmarkId::from_parameter(params), &adjacency, |b, list| {
            b.iter(|| build_edges(list));
        });
    }
    group.finish();
    Ok(())
}

fn generate_pipeline(c: &mut Criterion) {
    let generator = GraphGenerator::default();
    let mut group = c.benchmark_group("generate");
    group.sample_size(20);
    for params in CASES {
        group.bench_with_input(BenchmarkId::from_parameter(params), params, |b, p| {
            let mut rng = SmallRng::seed_from_u64(SEED);
            b.iter(|| generator.generate(p.node_count, p.complexity, &mut rng));
        });
    }
    group.finish();
}

fn edge_dedup(c: &mut Criterion) {
    if let Err(err) = edge_dedup_impl(c) {
        panic!("build_edges benchmark setup failed: {err}");
    }
}

criterion_group!(benches, edge_dedup, generate_pipeline);
criterion_main!(benches);
