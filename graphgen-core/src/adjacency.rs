//! Random adjacency list generation.
//!
//! Every node draws a fixed number of uniformly random targets. Repeated
//! draws collapse so each source keeps a list of distinct targets in the
//! order they were first drawn. Duplicates and reverses *across* sources are
//! left for [`crate::build_edges`] to resolve.

use std::{collections::HashSet, num::NonZeroUsize};

use tracing::instrument;

use crate::rng::RandomSource;

/// Per-source target lists, indexed by source node.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AdjacencyList {
    targets: Vec<Vec<usize>>,
}

impl AdjacencyList {
    /// Wraps explicit target lists, deduplicating each one in place.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::AdjacencyList;
    ///
    /// let list = AdjacencyList::from_targets(vec![vec![1, 1, 0], vec![]]);
    /// assert_eq!(list.targets_of(0), Some(&[1, 0][..]));
    /// assert_eq!(list.len(), 2);
    /// ```
    #[must_use]
    pub fn from_targets(targets: Vec<Vec<usize>>) -> Self {
        Self {
            targets: targets.into_iter().map(dedup_in_draw_order).collect(),
        }
    }

    /// Number of source nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` when there are no source nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Distinct targets drawn for `source`, in first-draw order.
    #[must_use]
    pub fn targets_of(&self, source: usize) -> Option<&[usize]> {
        self.targets.get(source).map(Vec::as_slice)
    }

    /// Iterates `(source, target)` pairs: sources ascending, targets in
    /// insertion order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.targets
            .iter()
            .enumerate()
            .flat_map(|(source, targets)| targets.iter().map(move |&target| (source, target)))
    }

    /// Total number of `(source, target)` pairs across all sources.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.targets.iter().map(Vec::len).sum()
    }
}

/// Draws `samples_per_node` targets in `[0, node_count)` for every node.
///
/// No draws are made when `node_count` is zero.
///
/// # Examples
/// ```
/// use graphgen_core::{ReplaySource, generate_adjacency};
///
/// let mut source = ReplaySource::new(vec![1, 1, 2, 0, 0, 0, 2, 1, 2]);
/// let list = generate_adjacency(3, 3, &mut source);
/// assert_eq!(list.targets_of(0), Some(&[1, 2][..]));
/// assert_eq!(list.targets_of(1), Some(&[0][..]));
/// assert_eq!(list.targets_of(2), Some(&[2, 1][..]));
/// ```
#[instrument(name = "core.adjacency", level = "debug", skip(rng))]
pub fn generate_adjacency<R: RandomSource + ?Sized>(
    node_count: usize,
    samples_per_node: usize,
    rng: &mut R,
) -> AdjacencyList {
    let Some(bound) = NonZeroUsize::new(node_count) else {
        return AdjacencyList::default();
    };
    let targets = (0..node_count)
        .map(|_| {
            let draws = (0..samples_per_node).map(|_| rng.next_index(bound)).collect();
            dedup_in_draw_order(draws)
        })
        .collect();
    AdjacencyList { targets }
}

fn dedup_in_draw_order(mut draws: Vec<usize>) -> Vec<usize> {
    let mut seen = HashSet::with_capacity(draws.len());
    draws.retain(|target| seen.insert(*target));
    draws
}
