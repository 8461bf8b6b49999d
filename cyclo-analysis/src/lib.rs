//! cyclo-analysis: weight-biased spanning trees and cycle-space decomposition
//!
//! This crate provides the algorithmic pipeline for cyclo:
//! - Graph: weighted undirected graph model on petgraph
//! - Spanning: bottleneck-biased spanning tree construction
//! - Cycles: fundamental cycle basis extraction, walk validation, and
//!   exact GF(2) decomposition by exhaustive subset search
//! - Filter: superlevel subgraph filtering
//! - Bipartite: bipartite graph generation, weights, and layout data
//! - Engine: config-driven orchestration of the full pipeline

pub mod bipartite;
pub mod cycles;
pub mod engine;
pub mod filter;
pub mod graph;
pub mod spanning;

// Re-exports for convenience
pub use bipartite::{assign_weights, format_label, generate_bipartite, positions};
pub use cycles::{
    cycle_from_walk, decompose, extract_fundamental_cycles, Cycle, Decomposition,
    FundamentalCycleBasis,
};
pub use engine::{AnalysisStats, CycleAnalysis, CycleAnalyzer};
pub use filter::{analyze_superlevel, superlevel_subgraph, SuperlevelAnalysis};
pub use graph::{Edge, GraphNode, WeightedGraph};
pub use spanning::{build_spanning_tree, SpanningTree};
