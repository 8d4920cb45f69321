//! Graph generation entry points.
//!
//! [`GraphGenerator`] runs the adjacency, node, and edge stages in sequence
//! against an injected [`RandomSource`]. [`create_graph`] wraps it with an
//! entropy-seeded generator and default configuration.

use std::num::NonZeroUsize;

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{info, instrument};

use crate::{
    Result,
    adjacency::generate_adjacency,
    edges::build_edges,
    element::{Element, GraphElements},
    error::GraphGenError,
    nodes::build_nodes,
    rng::RandomSource,
};

/// Samples drawn per node for each unit of complexity.
pub const DEFAULT_SAMPLES_PER_COMPLEXITY: usize = 10;

/// Configures and constructs [`GraphGenerator`] instances.
///
/// # Examples
/// ```
/// use graphgen_core::GraphGeneratorBuilder;
///
/// let generator = GraphGeneratorBuilder::new()
///     .with_samples_per_complexity(4)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(generator.samples_per_complexity().get(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct GraphGeneratorBuilder {
    samples_per_complexity: usize,
}

impl Default for GraphGeneratorBuilder {
    fn default() -> Self {
        Self {
            samples_per_complexity: DEFAULT_SAMPLES_PER_COMPLEXITY,
        }
    }
}

impl GraphGeneratorBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::GraphGeneratorBuilder;
    ///
    /// assert_eq!(GraphGeneratorBuilder::new().samples_per_complexity(), 10);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides how many targets each node draws per unit of complexity.
    #[must_use]
    pub const fn with_samples_per_complexity(mut self, samples: usize) -> Self {
        self.samples_per_complexity = samples;
        self
    }

    /// Returns the configured sample multiplier.
    #[must_use]
    pub const fn samples_per_complexity(&self) -> usize {
        self.samples_per_complexity
    }

    /// Validates the configuration and constructs a [`GraphGenerator`].
    ///
    /// # Errors
    /// Returns [`GraphGenError::InvalidSamplesPerComplexity`] when the
    /// multiplier is zero.
    pub fn build(self) -> Result<GraphGenerator> {
        let samples_per_complexity = NonZeroUsize::new(self.samples_per_complexity).ok_or(
            GraphGenError::InvalidSamplesPerComplexity {
                got: self.samples_per_complexity,
            },
        )?;
        Ok(GraphGenerator {
            samples_per_complexity,
        })
    }
}

/// Generates random graphs for rendering.
///
/// # Examples
/// ```
/// use graphgen_core::GraphGenerator;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let graph = GraphGenerator::default()
///     .generate(6, 1, &mut rng)
///     .expect("small graphs never overflow");
/// assert_eq!(graph.nodes().len(), 6);
/// assert!(graph.edges().iter().all(|edge| edge.source < 6 && edge.target < 6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphGenerator {
    samples_per_complexity: NonZeroUsize,
}

impl Default for GraphGenerator {
    fn default() -> Self {
        Self {
            samples_per_complexity: NonZeroUsize::new(DEFAULT_SAMPLES_PER_COMPLEXITY)
                .unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl GraphGenerator {
    /// Returns the sample multiplier applied to `complexity`.
    #[must_use]
    pub const fn samples_per_complexity(&self) -> NonZeroUsize {
        self.samples_per_complexity
    }

    /// Number of targets each node draws for `complexity`.
    ///
    /// # Errors
    /// Returns [`GraphGenError::SampleCountOverflow`] when the product does
    /// not fit in `usize`.
    pub const fn samples_per_node(&self, complexity: usize) -> Result<usize> {
        match complexity.checked_mul(self.samples_per_complexity.get()) {
            Some(samples) => Ok(samples),
            None => Err(GraphGenError::SampleCountOverflow {
                complexity,
                samples_per_complexity: self.samples_per_complexity.get(),
            }),
        }
    }

    /// Generates `node_count` nodes and their deduplicated random edges.
    ///
    /// # Errors
    /// Returns [`GraphGenError::SampleCountOverflow`] when `complexity` is too
    /// large for the configured multiplier. No draws are made in that case.
    #[instrument(
        name = "core.generate",
        err,
        skip(self, rng),
        fields(samples_per_complexity = self.samples_per_complexity.get()),
    )]
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        node_count: usize,
        complexity: usize,
        rng: &mut R,
    ) -> Result<GraphElements> {
        let samples_per_node = self.samples_per_node(complexity)?;
        let adjacency = generate_adjacency(node_count, samples_per_node, rng);
        let nodes = build_nodes(node_count);
        let edge_set = build_edges(&adjacency);
        info!(
            nodes = nodes.len(),
            edges = edge_set.edges.len(),
            suppressed = edge_set.suppressed,
            "graph generated"
        );
        Ok(GraphElements::new(nodes, edge_set.edges, edge_set.suppressed))
    }
}

/// Generates a random graph as a flat element list: nodes, then edges.
///
/// Uses an entropy-seeded [`SmallRng`] and the default sample multiplier.
///
/// # Errors
/// Returns [`GraphGenError::SampleCountOverflow`] when `complexity` is too
/// large.
///
/// # Examples
/// ```
/// use graphgen_core::create_graph;
///
/// assert!(create_graph(0, 3)?.is_empty());
/// assert_eq!(create_graph(5, 0)?.len(), 5);
/// # Ok::<(), graphgen_core::GraphGenError>(())
/// ```
pub fn create_graph(node_count: usize, complexity: usize) -> Result<Vec<Element>> {
    let mut rng = SmallRng::from_entropy();
    GraphGenerator::default()
        .generate(node_count, complexity, &mut rng)
        .map(GraphElements::into_elements)
}
