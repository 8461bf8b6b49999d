//! Weighted graph model.
//!
//! Nodes carry an optional scalar weight; edges are unweighted connections.
//! The graph is undirected and simple: duplicate edges and self-loops are
//! silently ignored at insertion. Iteration order over nodes and edges is
//! insertion order, which keeps every downstream result deterministic.

mod types;

pub use types::{Edge, GraphNode, WeightedGraph};
