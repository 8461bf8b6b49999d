//! Superlevel subgraph filtering.
//!
//! Retains only nodes whose weight meets a threshold and feeds the filtered
//! subgraph through the same tree/cycle pipeline, unchanged in contract.

use cyclo_core::errors::GraphError;
use tracing::info;

use crate::cycles::{extract_fundamental_cycles, FundamentalCycleBasis};
use crate::graph::WeightedGraph;
use crate::spanning::{build_spanning_tree, SpanningTree};

/// Result of analyzing a superlevel subgraph.
#[derive(Debug)]
pub struct SuperlevelAnalysis {
    pub threshold: f64,
    /// The node-induced subgraph the analysis ran on.
    pub subgraph: WeightedGraph,
    /// Connected components of the subgraph. Thresholding often splits the
    /// graph; a count above 1 explains missing cycles downstream.
    pub components: usize,
    pub tree: SpanningTree,
    pub basis: FundamentalCycleBasis,
}

/// The node-induced subgraph of nodes with weight at or above `threshold`.
///
/// Nodes without a weight never pass. Relative insertion order of the
/// retained nodes and edges is preserved, so downstream results stay
/// deterministic.
pub fn superlevel_subgraph(graph: &WeightedGraph, threshold: f64) -> WeightedGraph {
    let mut sub = WeightedGraph::new();

    for node in graph.nodes() {
        if node.weight_or_neg_inf() >= threshold {
            sub.add_node(node.id.clone(), node.weight);
        }
    }

    for (u, v) in graph.edges() {
        if let (Some(&a), Some(&b)) = (sub.node_index.get(u), sub.node_index.get(v)) {
            sub.add_edge_by_index(a, b);
        }
    }

    sub
}

/// Run the full tree/cycle pipeline on the superlevel subgraph.
///
/// A threshold that disconnects the graph leaves cycles in components the
/// tree does not span; those surface as `InconsistentTree` from extraction,
/// the same contract as any other disconnected input.
pub fn analyze_superlevel(
    graph: &WeightedGraph,
    threshold: f64,
) -> Result<SuperlevelAnalysis, GraphError> {
    let subgraph = superlevel_subgraph(graph, threshold);
    let components = subgraph.component_count();

    info!(
        threshold,
        nodes = subgraph.node_count(),
        edges = subgraph.edge_count(),
        components,
        "superlevel subgraph"
    );

    let tree = build_spanning_tree(&subgraph);
    let basis = extract_fundamental_cycles(&subgraph, &tree)?;

    Ok(SuperlevelAnalysis {
        threshold,
        subgraph,
        components,
        tree,
        basis,
    })
}
