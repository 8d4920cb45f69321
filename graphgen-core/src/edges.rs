//! Edge deduplication over an adjacency list.
//!
//! Edges are undirected, so `a -> b` and `b -> a` describe the same
//! connection. The first direction met while walking the adjacency list
//! claims the unordered pair; later sightings in either direction are
//! suppressed. The emitted descriptor keeps the claiming direction.

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::{adjacency::AdjacencyList, element::EdgeDescriptor, ids::EdgeId};

/// Edge descriptors plus the number of pairs that lost their claim.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EdgeSet {
    /// Surviving edges in first-seen order.
    pub edges: Vec<EdgeDescriptor>,
    /// Adjacency pairs dropped because their unordered pair was taken.
    pub suppressed: usize,
}

/// Walks `adjacency` and keeps one edge per unordered pair.
///
/// # Examples
/// ```
/// use graphgen_core::{AdjacencyList, build_edges};
///
/// let adjacency = AdjacencyList::from_targets(vec![vec![1], vec![0, 2], vec![2]]);
/// let set = build_edges(&adjacency);
/// let ids: Vec<String> = set.edges.iter().map(|edge| edge.id.to_string()).collect();
/// assert_eq!(ids, ["e0to1", "e1to2", "e2to2"]);
/// assert_eq!(set.suppressed, 1);
/// ```
#[must_use]
#[instrument(
    name = "core.edges",
    level = "debug",
    skip(adjacency),
    fields(pairs = adjacency.pair_count()),
)]
pub fn build_edges(adjacency: &AdjacencyList) -> EdgeSet {
    let mut claimed = HashSet::with_capacity(adjacency.pair_count());
    let mut set = EdgeSet::default();
    for (source, target) in adjacency.pairs() {
        let id = EdgeId::new(source, target);
        if claimed.insert(id.canonical()) {
            set.edges.push(EdgeDescriptor::from_id(id));
        } else {
            set.suppressed += 1;
        }
    }
    debug!(
        edges = set.edges.len(),
        suppressed = set.suppressed,
        "edge deduplication finished"
    );
    set
}
