//! Benchmark support crate for graphgen.
//!
//! Provides parameter types and fixture helpers for the Criterion benchmarks
//! that time edge deduplication and end-to-end graph generation.

pub mod error;
pub mod params;

use graphgen_core::{AdjacencyList, GraphGenerator, generate_adjacency};
use rand::{SeedableRng, rngs::SmallRng};

use crate::{error::BenchSetupError, params::GraphBenchParams};

/// Builds the adjacency list a benchmark case deduplicates.
///
/// # Errors
/// Returns [`BenchSetupError`] when the per-node sample count overflows.
pub fn adjacency_fixture(
    params: &GraphBenchParams,
    seed: u64,
) -> Result<AdjacencyList, BenchSetupError> {
    let samples = GraphGenerator::default().samples_per_node(params.complexity)?;
    let mut rng = SmallRng::seed_from_u64(seed);
    Ok(generate_adjacency(params.node_count, samples, &mut rng))
}
