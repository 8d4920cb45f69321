//! Property-based checks for graph generation.
//!
//! Each property runner takes a [`GraphRequest`] and checks one invariant of
//! the generated output. Runners are driven both by proptest and by a fixed
//! set of rstest cases that pin known-interesting shapes.

use std::collections::HashSet;

use proptest::{
    prelude::any,
    prop_assert, prop_assert_eq,
    test_runner::{TestCaseResult, TestRunner},
};
use rand::{SeedableRng, rngs::SmallRng};
use rstest::rstest;
use test_strategy::Arbitrary;

use crate::{EdgeId, GraphElements, GraphGenerator, test_utils::suite_proptest_config};

const CASES: u32 = 128;

/// Inputs for one generation run.
#[derive(Clone, Copy, Debug, Arbitrary)]
struct GraphRequest {
    #[strategy(0_usize..48)]
    node_count: usize,
    #[strategy(0_usize..4)]
    complexity: usize,
    seed: u64,
}

impl GraphRequest {
    fn generate(self) -> GraphElements {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        match GraphGenerator::default().generate(self.node_count, self.complexity, &mut rng) {
            Ok(graph) => graph,
            Err(err) => panic!("bounded requests must not overflow: {err}"),
        }
    }
}

fn run_node_identity_property(request: GraphRequest) -> TestCaseResult {
    let graph = request.generate();
    prop_assert_eq!(graph.nodes().len(), request.node_count);
    for (index, node) in graph.nodes().iter().enumerate() {
        prop_assert_eq!(node.id.to_string(), index.to_string());
    }
    Ok(())
}

fn run_unique_pair_property(request: GraphRequest) -> TestCaseResult {
    let graph = request.generate();
    let mut pairs = HashSet::new();
    for edge in graph.edges() {
        prop_assert!(
            pairs.insert(edge.id.canonical()),
            "pair {:?} emitted twice",
            edge.id.canonical()
        );
    }
    Ok(())
}

fn run_endpoint_range_property(request: GraphRequest) -> TestCaseResult {
    let graph = request.generate();
    for edge in graph.edges() {
        prop_assert!(edge.source < request.node_count);
        prop_assert!(edge.target < request.node_count);
    }
    Ok(())
}

fn run_edge_id_round_trip_property(request: GraphRequest) -> TestCaseResult {
    let graph = request.generate();
    for edge in graph.edges() {
        let parsed: EdgeId = edge
            .id
            .to_string()
            .parse()
            .map_err(|err| proptest::test_runner::TestCaseError::fail(format!("{err}")))?;
        prop_assert_eq!(parsed.source(), edge.source);
        prop_assert_eq!(parsed.target(), edge.target);
    }
    Ok(())
}

fn run_seed_determinism_property(request: GraphRequest) -> TestCaseResult {
    prop_assert_eq!(request.generate(), request.generate());
    Ok(())
}

fn drive(runner_fn: fn(GraphRequest) -> TestCaseResult) {
    let mut runner = TestRunner::new(suite_proptest_config(CASES));
    if let Err(err) = runner.run(&any::<GraphRequest>(), runner_fn) {
        panic!("property failed: {err}");
    }
}

#[test]
fn nodes_are_dense_and_unique() {
    drive(run_node_identity_property);
}

#[test]
fn unordered_pairs_are_unique() {
    drive(run_unique_pair_property);
}

#[test]
fn endpoints_are_valid_nodes() {
    drive(run_endpoint_range_property);
}

#[test]
fn edge_ids_round_trip() {
    drive(run_edge_id_round_trip_property);
}

#[test]
fn fixed_seed_is_deterministic() {
    drive(run_seed_determinism_property);
}

#[rstest]
#[case::empty(0, 3, 42)]
#[case::single_node(1, 2, 42)]
#[case::no_complexity(5, 0, 7)]
#[case::saturated(4, 3, 999)]
#[case::sparse(40, 1, 7777)]
fn pinned_requests_hold_every_property(
    #[case] node_count: usize,
    #[case] complexity: usize,
    #[case] seed: u64,
) {
    let request = GraphRequest {
        node_count,
        complexity,
        seed,
    };
    let runners: [fn(GraphRequest) -> TestCaseResult; 5] = [
        run_node_identity_property,
        run_unique_pair_property,
        run_endpoint_range_property,
        run_edge_id_round_trip_property,
        run_seed_determinism_property,
    ];
    for runner_fn in runners {
        if let Err(err) = runner_fn(request) {
            panic!("pinned request {request:?} failed: {err}");
        }
    }
}

#[rstest]
fn single_node_only_ever_loops() {
    let graph = GraphRequest {
        node_count: 1,
        complexity: 1,
        seed: 3,
    }
    .generate();
    let ids: Vec<String> = graph.edges().iter().map(|edge| edge.id.to_string()).collect();
    assert_eq!(ids, ["e0to0"]);
    assert_eq!(graph.suppressed(), 0);
}

#[rstest]
fn saturated_small_graph_is_complete() {
    // 4 nodes drawing 300 targets each hit every target with overwhelming
    // probability, so every unordered pair and every self loop appears.
    let graph = GraphRequest {
        node_count: 4,
        complexity: 30,
        seed: 11,
    }
    .generate();
    assert_eq!(graph.edges().len(), 10);
    assert_eq!(graph.self_loops(), 4);
    assert_eq!(graph.suppressed(), 6);
}
