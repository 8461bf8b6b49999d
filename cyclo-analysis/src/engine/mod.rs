//! Config-driven orchestration of the analysis pipeline.

use std::time::Instant;

use cyclo_core::config::CycloConfig;
use cyclo_core::errors::{AnalysisError, CycleError};
use cyclo_core::NodeId;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cycles::{
    cycle_from_walk, decompose, extract_fundamental_cycles, Decomposition, FundamentalCycleBasis,
};
use crate::filter::{analyze_superlevel, SuperlevelAnalysis};
use crate::graph::WeightedGraph;
use crate::spanning::{build_spanning_tree, SpanningTree};

/// Summary statistics from a pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisStats {
    pub nodes: usize,
    pub edges: usize,
    pub components: usize,
    pub tree_edges: usize,
    pub cycle_count: usize,
    /// `|E| - |V| + components`, the dimension of the cycle space.
    pub cyclomatic: usize,
    pub root: Option<NodeId>,
    pub duration_ms: u64,
}

/// Result of a full pipeline run over one graph.
#[derive(Debug)]
pub struct CycleAnalysis {
    pub tree: SpanningTree,
    pub basis: FundamentalCycleBasis,
    pub stats: AnalysisStats,
}

/// Orchestrates tree construction, basis extraction, and decomposition.
///
/// Every stage is a pure function of its inputs; the analyzer only carries
/// configuration.
pub struct CycleAnalyzer {
    config: CycloConfig,
}

impl CycleAnalyzer {
    pub fn new(config: CycloConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(CycloConfig::default())
    }

    /// Build the spanning tree and fundamental cycle basis for a graph.
    pub fn analyze(&self, graph: &WeightedGraph) -> Result<CycleAnalysis, AnalysisError> {
        let start = Instant::now();

        let components = graph.component_count();
        if components > 1 {
            warn!(
                components,
                "input graph is disconnected; the tree spans the start component only"
            );
        }

        let tree = build_spanning_tree(graph);
        let basis = extract_fundamental_cycles(graph, &tree)?;

        let stats = AnalysisStats {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            components,
            tree_edges: tree.edge_count(),
            cycle_count: basis.len(),
            cyclomatic: graph.edge_count() + components - graph.node_count(),
            root: tree.root.clone(),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            nodes = stats.nodes,
            edges = stats.edges,
            cycles = stats.cycle_count,
            duration_ms = stats.duration_ms,
            "cycle analysis complete"
        );

        Ok(CycleAnalysis { tree, basis, stats })
    }

    /// Validate a manual node walk and decompose it over the basis.
    ///
    /// Returns `Ok(None)` when the walk is valid but outside the cycle
    /// space spanned by the basis; that is a normal outcome the caller must
    /// handle, not an error.
    pub fn decompose_walk(
        &self,
        graph: &WeightedGraph,
        analysis: &CycleAnalysis,
        walk: &[NodeId],
    ) -> Result<Option<Decomposition>, AnalysisError> {
        let target = cycle_from_walk(graph, walk)?;

        let max = self.config.decompose.effective_max_basis_len();
        if analysis.basis.len() > max {
            return Err(CycleError::BasisTooLarge {
                len: analysis.basis.len(),
                max,
            }
            .into());
        }

        Ok(decompose(&target, &analysis.basis))
    }

    /// Run the pipeline on the superlevel subgraph at the configured
    /// threshold.
    pub fn analyze_superlevel(
        &self,
        graph: &WeightedGraph,
    ) -> Result<SuperlevelAnalysis, AnalysisError> {
        let threshold = self.config.filter.effective_threshold();
        Ok(analyze_superlevel(graph, threshold)?)
    }
}

impl Default for CycleAnalyzer {
    fn default() -> Self {
        Self::with_defaults()
    }
}
