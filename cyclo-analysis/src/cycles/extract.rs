//! Fundamental cycle extraction from non-tree edges.

use cyclo_core::errors::GraphError;
use cyclo_core::types::collections::SmallVec8;
use cyclo_core::NodeId;
use tracing::debug;

use crate::graph::WeightedGraph;
use crate::spanning::SpanningTree;

use super::types::{Cycle, FundamentalCycleBasis};

/// Extract the fundamental cycle basis induced by a spanning tree.
///
/// For every graph edge absent from the tree, the cycle is the unique tree
/// path between its endpoints followed by the non-tree edge itself, closing
/// the walk. Basis order is the graph's edge iteration order filtered by
/// the non-tree predicate, so a fixed (graph, tree) pair always produces
/// the same basis.
///
/// Fails with `InconsistentTree` when a non-tree edge's endpoints are not
/// connected within the tree, which happens when the tree was built for a
/// different graph or the input is disconnected.
pub fn extract_fundamental_cycles(
    graph: &WeightedGraph,
    tree: &SpanningTree,
) -> Result<FundamentalCycleBasis, GraphError> {
    let mut cycles = Vec::new();

    for (u, v) in graph.edges() {
        if tree.contains_edge(u, v) {
            continue;
        }

        let path = tree.path_between(u, v)?;
        let mut steps: SmallVec8<(NodeId, NodeId)> = path
            .windows(2)
            .map(|pair| (pair[0].clone(), pair[1].clone()))
            .collect();
        steps.push((u.clone(), v.clone()));
        cycles.push(Cycle::new(steps));
    }

    debug!(cycles = cycles.len(), "fundamental cycle basis extracted");
    Ok(FundamentalCycleBasis { cycles })
}
