//! Graphgen core library.
//!
//! Generates random graphs as renderer-ready element lists. Each node draws
//! `complexity * samples_per_complexity` random targets; the resulting
//! adjacency list is collapsed so every unordered pair yields at most one
//! edge, identified as `e<source>to<target>` in the direction first seen.
//!
//! Randomness is injected through [`RandomSource`]; seed a
//! [`rand::rngs::SmallRng`] for reproducible output.

mod adjacency;
mod edges;
mod element;
mod error;
mod generator;
mod ids;
mod nodes;
mod rng;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    adjacency::{AdjacencyList, generate_adjacency},
    edges::{EdgeSet, build_edges},
    element::{EdgeDescriptor, Element, GraphElements, NodeDescriptor},
    error::{
        EdgeDescriptorError, EdgeIdError, EdgeIdErrorCode, GraphGenError, GraphGenErrorCode,
        NodeIdError, NodeIdErrorCode, Result,
    },
    generator::{
        DEFAULT_SAMPLES_PER_COMPLEXITY, GraphGenerator, GraphGeneratorBuilder, create_graph,
    },
    ids::{EdgeId, NodeId},
    nodes::build_nodes,
    rng::{RandomSource, ReplaySource},
};
