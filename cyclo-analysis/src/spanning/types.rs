//! Spanning tree type.

use std::collections::VecDeque;

use cyclo_core::errors::GraphError;
use cyclo_core::types::collections::{FxHashMap, FxHashSet};
use cyclo_core::NodeId;

use crate::graph::WeightedGraph;

/// A spanning tree of a weighted graph.
///
/// Carries the full node set of the source graph and the tree edges only.
/// On a connected source the edge count is exactly `node_count - 1`; on a
/// disconnected source only the component containing the root is spanned.
#[derive(Debug)]
pub struct SpanningTree {
    /// Tree edges over the source graph's node set.
    pub graph: WeightedGraph,
    /// The node the growth started from; `None` for the empty tree.
    pub root: Option<NodeId>,
}

impl SpanningTree {
    /// Number of nodes (identical to the source graph's).
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of tree edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the tree contains this edge, in either orientation.
    pub fn contains_edge(&self, u: &NodeId, v: &NodeId) -> bool {
        self.graph.has_edge(u, v)
    }

    /// Tree edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> + '_ {
        self.graph.edges()
    }

    /// The unique path between two nodes within the tree.
    ///
    /// The tree is acyclic, so a BFS parent map reconstructs the one path.
    /// Fails with `InconsistentTree` when the endpoints are not connected
    /// inside the tree, which can only happen when the tree and the graph
    /// it is queried for are inconsistent with each other.
    pub fn path_between(&self, from: &NodeId, to: &NodeId) -> Result<Vec<NodeId>, GraphError> {
        let inconsistent = || GraphError::InconsistentTree {
            from: from.clone(),
            to: to.clone(),
        };
        let src = self.graph.index_of(from).ok_or_else(inconsistent)?;
        let dst = self.graph.index_of(to).ok_or_else(inconsistent)?;

        if src == dst {
            return Ok(vec![from.clone()]);
        }

        let mut parent = FxHashMap::default();
        let mut visited = FxHashSet::default();
        let mut queue = VecDeque::new();

        visited.insert(src);
        queue.push_back(src);

        'search: while let Some(node) = queue.pop_front() {
            for neighbor in self.graph.neighbors(node) {
                if visited.insert(neighbor) {
                    parent.insert(neighbor, node);
                    if neighbor == dst {
                        break 'search;
                    }
                    queue.push_back(neighbor);
                }
            }
        }

        if !visited.contains(&dst) {
            return Err(inconsistent());
        }

        // Walk the parent chain back from the target.
        let mut path_indices = vec![dst];
        let mut current = dst;
        while let Some(&prev) = parent.get(&current) {
            path_indices.push(prev);
            current = prev;
        }
        path_indices.reverse();

        Ok(path_indices
            .into_iter()
            .filter_map(|idx| self.graph.graph.node_weight(idx))
            .map(|n| n.id.clone())
            .collect())
    }
}
