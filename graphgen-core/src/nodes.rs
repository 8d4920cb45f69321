//! Node descriptor construction.

use crate::element::NodeDescriptor;

/// Describes nodes `0..node_count` in ascending order.
///
/// # Examples
/// ```
/// use graphgen_core::build_nodes;
///
/// let ids: Vec<String> = build_nodes(3).iter().map(|node| node.id.to_string()).collect();
/// assert_eq!(ids, ["0", "1", "2"]);
/// ```
#[must_use]
pub fn build_nodes(node_count: usize) -> Vec<NodeDescriptor> {
    (0..node_count).map(NodeDescriptor::new).collect()
}
