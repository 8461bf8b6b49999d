//! Bipartite graph generation and layout data.
//!
//! Builds the studied bipartite topology and supplies the coordinate and
//! label data display consumers need. No drawing happens here or anywhere
//! else in the workspace.

use cyclo_core::types::collections::FxHashMap;
use cyclo_core::NodeId;

use crate::graph::WeightedGraph;

/// Generate the bipartite graph `Li - R{(i+j) % n}` for `j in 1..n`.
///
/// Every left node connects to every right node except the one sharing its
/// index, giving `n * (n - 1)` edges over `2n` nodes. Returns the graph
/// plus the left and right node ids in index order.
pub fn generate_bipartite(n: usize) -> (WeightedGraph, Vec<NodeId>, Vec<NodeId>) {
    let mut graph = WeightedGraph::new();

    let left: Vec<NodeId> = (0..n).map(|i| NodeId::new(format!("L{i}"))).collect();
    let right: Vec<NodeId> = (0..n).map(|i| NodeId::new(format!("R{i}"))).collect();

    for id in &left {
        graph.add_node(id.clone(), None);
    }
    for id in &right {
        graph.add_node(id.clone(), None);
    }

    for i in 0..n {
        for j in 1..n {
            let u = &left[i];
            let v = &right[(i + j) % n];
            if let (Some(&a), Some(&b)) = (graph.node_index.get(u), graph.node_index.get(v)) {
                graph.add_edge_by_index(a, b);
            }
        }
    }

    (graph, left, right)
}

/// Assign `weights[i]` to `left[i]` and `right[i]` in parallel by index.
/// Extra weights beyond the node lists are ignored.
pub fn assign_weights(
    graph: &mut WeightedGraph,
    left: &[NodeId],
    right: &[NodeId],
    weights: &[f64],
) {
    for (i, &weight) in weights.iter().enumerate() {
        if let Some(id) = left.get(i) {
            graph.set_weight(id, weight);
        }
        if let Some(id) = right.get(i) {
            graph.set_weight(id, weight);
        }
    }
}

/// Two-column layout: left nodes at x=0, right nodes at x=1, row `i` at
/// y=-i. Pure coordinate data for display consumers.
pub fn positions(left: &[NodeId], right: &[NodeId]) -> FxHashMap<NodeId, (f64, f64)> {
    let mut pos = FxHashMap::default();
    for (i, id) in left.iter().enumerate() {
        pos.insert(id.clone(), (0.0, -(i as f64)));
    }
    for (i, id) in right.iter().enumerate() {
        pos.insert(id.clone(), (1.0, -(i as f64)));
    }
    pos
}

/// Display label for a 1-based node number.
pub fn format_label(number: usize) -> String {
    number.to_string()
}
