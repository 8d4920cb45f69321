//! Element descriptors consumed by graph-rendering front ends.
//!
//! An [`Element`] serialises as `{ "group": "nodes" | "edges", "data": ... }`,
//! the element shape accepted by common browser graph renderers.

use serde::{Deserialize, Serialize};

use crate::{
    error::EdgeDescriptorError,
    ids::{EdgeId, NodeId},
};

/// Payload of a node element.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    /// Identity of the node.
    pub id: NodeId,
}

impl NodeDescriptor {
    /// Describes the node at `index`.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self {
            id: NodeId::new(index),
        }
    }
}

/// Payload of an edge element.
///
/// `source` and `target` always agree with the endpoints encoded in `id`;
/// payloads that disagree are rejected on deserialisation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEdgeDescriptor")]
pub struct EdgeDescriptor {
    /// Node index the edge was first seen leaving.
    pub source: usize,
    /// Node index the edge was first seen entering.
    pub target: usize,
    /// `e<source>to<target>` identifier.
    pub id: EdgeId,
}

impl EdgeDescriptor {
    /// Builds the descriptor for an edge identifier.
    #[must_use]
    pub const fn from_id(id: EdgeId) -> Self {
        Self {
            source: id.source(),
            target: id.target(),
            id,
        }
    }

    /// Returns `true` when both endpoints are the same node.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

#[derive(Deserialize)]
struct RawEdgeDescriptor {
    source: usize,
    target: usize,
    id: EdgeId,
}

impl TryFrom<RawEdgeDescriptor> for EdgeDescriptor {
    type Error = EdgeDescriptorError;

    fn try_from(raw: RawEdgeDescriptor) -> Result<Self, Self::Error> {
        if raw.id.source() != raw.source || raw.id.target() != raw.target {
            return Err(EdgeDescriptorError {
                id: raw.id,
                source_index: raw.source,
                target_index: raw.target,
            });
        }
        Ok(Self::from_id(raw.id))
    }
}

/// A single renderable element.
///
/// # Examples
/// ```
/// use graphgen_core::{Element, NodeDescriptor};
///
/// let json = serde_json::to_string(&Element::Nodes(NodeDescriptor::new(3)))?;
/// assert_eq!(json, r#"{"group":"nodes","data":{"id":"3"}}"#);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(tag = "group", content = "data", rename_all = "lowercase")]
pub enum Element {
    /// A graph vertex.
    Nodes(NodeDescriptor),
    /// An undirected connection between two vertices.
    Edges(EdgeDescriptor),
}

/// Nodes and edges produced by one generation run.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GraphElements {
    nodes: Vec<NodeDescriptor>,
    edges: Vec<EdgeDescriptor>,
    suppressed: usize,
}

impl GraphElements {
    /// Bundles the output of the node and edge builders.
    ///
    /// `suppressed` counts adjacency pairs discarded because the unordered
    /// pair had already been emitted.
    #[must_use]
    pub const fn new(
        nodes: Vec<NodeDescriptor>,
        edges: Vec<EdgeDescriptor>,
        suppressed: usize,
    ) -> Self {
        Self {
            nodes,
            edges,
            suppressed,
        }
    }

    /// Node descriptors in index order.
    #[must_use]
    pub fn nodes(&self) -> &[NodeDescriptor] {
        &self.nodes
    }

    /// Edge descriptors in first-seen order.
    #[must_use]
    pub fn edges(&self) -> &[EdgeDescriptor] {
        &self.edges
    }

    /// Number of adjacency pairs dropped as duplicates or reverses.
    #[must_use]
    pub const fn suppressed(&self) -> usize {
        self.suppressed
    }

    /// Number of edges whose endpoints coincide.
    #[must_use]
    pub fn self_loops(&self) -> usize {
        self.edges.iter().filter(|edge| edge.is_self_loop()).count()
    }

    /// Returns `true` when neither nodes nor edges were produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Iterates node elements followed by edge elements without consuming
    /// the collection.
    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        self.nodes
            .iter()
            .copied()
            .map(Element::Nodes)
            .chain(self.edges.iter().copied().map(Element::Edges))
    }

    /// Flattens into all node elements followed by all edge elements.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::{EdgeDescriptor, EdgeId, Element, GraphElements, NodeDescriptor};
    ///
    /// let graph = GraphElements::new(
    ///     vec![NodeDescriptor::new(0), NodeDescriptor::new(1)],
    ///     vec![EdgeDescriptor::from_id(EdgeId::new(1, 0))],
    ///     0,
    /// );
    /// let elements = graph.into_elements();
    /// assert_eq!(elements.len(), 3);
    /// assert!(matches!(elements.last(), Some(Element::Edges(_))));
    /// ```
    #[must_use]
    pub fn into_elements(self) -> Vec<Element> {
        let mut elements = Vec::with_capacity(self.nodes.len() + self.edges.len());
        elements.extend(self.nodes.into_iter().map(Element::Nodes));
        elements.extend(self.edges.into_iter().map(Element::Edges));
        elements
    }
}
