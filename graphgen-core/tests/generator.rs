//! Tests for the graph generation API.

use graphgen_core::{
    Element, GraphGenError, GraphGenerator, GraphGeneratorBuilder, ReplaySource, create_graph,
};
use graphgen_test_support::tracing::RecordingLayer;
use rand::{SeedableRng, rngs::SmallRng};
use rstest::{fixture, rstest};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

#[fixture]
fn seeded() -> SmallRng {
    SmallRng::seed_from_u64(42)
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(5)]
fn empty_graph_for_any_complexity(#[case] complexity: usize) {
    let elements = create_graph(0, complexity).expect("zero nodes never fails");
    assert!(elements.is_empty());
}

#[rstest]
fn zero_complexity_yields_only_nodes() {
    let elements = create_graph(5, 0).expect("zero complexity never fails");
    assert_eq!(elements.len(), 5);
    assert!(
        elements
            .iter()
            .all(|element| matches!(element, Element::Nodes(_)))
    );
}

#[rstest]
fn nodes_precede_edges() {
    let elements = create_graph(12, 2).expect("small graphs never fail");
    let first_edge = elements
        .iter()
        .position(|element| matches!(element, Element::Edges(_)))
        .unwrap_or(elements.len());
    assert_eq!(first_edge, 12);
    assert!(
        elements[first_edge..]
            .iter()
            .all(|element| matches!(element, Element::Edges(_)))
    );
}

#[rstest]
fn create_graph_reports_overflow() {
    let err = create_graph(3, usize::MAX).expect_err("overflow must be rejected");
    assert!(matches!(err, GraphGenError::SampleCountOverflow { .. }));
}

#[rstest]
fn builder_multiplier_changes_draw_count() {
    let generator = GraphGeneratorBuilder::new()
        .with_samples_per_complexity(3)
        .build()
        .expect("non-zero multiplier is valid");
    let mut source = ReplaySource::new(vec![0, 1, 2]);
    generator
        .generate(4, 2, &mut source)
        .expect("generation succeeds");
    assert_eq!(source.consumed(), 24);
}

#[rstest]
fn node_descriptors_ignore_randomness(mut seeded: SmallRng) {
    let mut other = SmallRng::seed_from_u64(7);
    let generator = GraphGenerator::default();
    let left = generator.generate(9, 1, &mut seeded).expect("valid");
    let right = generator.generate(9, 1, &mut other).expect("valid");
    assert_eq!(left.nodes(), right.nodes());
}

#[rstest]
fn serialised_elements_match_renderer_shape(mut seeded: SmallRng) {
    let graph = GraphGenerator::default()
        .generate(3, 1, &mut seeded)
        .expect("valid");
    let edge_count = graph.edges().len();
    let value = serde_json::to_value(graph.into_elements()).expect("elements serialise");
    let items = value.as_array().expect("top level is an array");
    assert_eq!(items.len(), 3 + edge_count);
    assert_eq!(items[0]["group"], "nodes");
    assert_eq!(items[0]["data"]["id"], "0");
    for item in &items[3..] {
        assert_eq!(item["group"], "edges");
        let source = item["data"]["source"].as_u64().expect("numeric source");
        let target = item["data"]["target"].as_u64().expect("numeric target");
        assert_eq!(item["data"]["id"], format!("e{source}to{target}"));
    }
}

#[rstest]
fn generate_records_core_tracing(mut seeded: SmallRng) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let graph = tracing::subscriber::with_default(subscriber, || {
        GraphGenerator::default().generate(8, 1, &mut seeded)
    })
    .expect("generation succeeds");

    let run_span = layer
        .span_named("core.generate")
        .expect("core.generate span must exist");
    assert_eq!(run_span.fields.get("node_count"), Some(&"8".to_owned()));
    assert_eq!(run_span.fields.get("complexity"), Some(&"1".to_owned()));
    assert_eq!(
        run_span.fields.get("samples_per_complexity"),
        Some(&"10".to_owned())
    );
    assert!(layer.span_named("core.adjacency").is_some());
    assert!(layer.span_named("core.edges").is_some());

    let completed = layer
        .event_with_message(Level::INFO, "graph generated")
        .expect("completion event must exist");
    assert_eq!(completed.fields.get("nodes"), Some(&"8".to_owned()));
    assert_eq!(
        completed.fields.get("edges"),
        Some(&graph.edges().len().to_string())
    );
}

#[rstest]
fn overflow_is_logged_as_error() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let mut source = ReplaySource::default();

    let err = tracing::subscriber::with_default(subscriber, || {
        GraphGenerator::default().generate(2, usize::MAX, &mut source)
    })
    .expect_err("overflow must fail");
    assert!(matches!(err, GraphGenError::SampleCountOverflow { .. }));
    assert!(
        layer
            .events()
            .iter()
            .any(|event| event.level == Level::ERROR)
    );
}
