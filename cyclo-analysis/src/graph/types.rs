//! Graph types: nodes, normalized edges, and the weighted graph wrapper.

use cyclo_core::errors::GraphError;
use cyclo_core::types::collections::{FxHashMap, FxHashSet};
use cyclo_core::NodeId;
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableGraph;
use petgraph::Undirected;
use serde::{Deserialize, Serialize};

/// A node: identifier plus optional scalar weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeId,
    /// Scalar weight; may be negative or absent.
    pub weight: Option<f64>,
}

impl GraphNode {
    /// Weight used for all selection purposes. Absent weights sort below
    /// every real weight.
    pub fn weight_or_neg_inf(&self) -> f64 {
        self.weight.unwrap_or(f64::NEG_INFINITY)
    }
}

/// Normalized unordered edge, the unit of the cycle-space algebra.
///
/// Endpoints are sorted at construction so `(u, v)` and `(v, u)` hash and
/// compare as the same edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    a: NodeId,
    b: NodeId,
}

impl Edge {
    pub fn new(u: NodeId, v: NodeId) -> Self {
        if u <= v {
            Self { a: u, b: v }
        } else {
            Self { a: v, b: u }
        }
    }

    /// The endpoints in normalized order.
    pub fn endpoints(&self) -> (&NodeId, &NodeId) {
        (&self.a, &self.b)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

/// The weighted graph: an undirected petgraph StableGraph plus an id lookup.
pub struct WeightedGraph {
    /// The underlying petgraph StableGraph.
    pub graph: StableGraph<GraphNode, (), Undirected>,
    /// Map from NodeId to NodeIndex for O(1) lookup.
    pub node_index: FxHashMap<NodeId, NodeIndex>,
}

impl WeightedGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::default(),
            node_index: FxHashMap::default(),
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether a node with this id exists.
    pub fn has_node(&self, id: &NodeId) -> bool {
        self.node_index.contains_key(id)
    }

    /// Look up a node's index by id.
    pub fn index_of(&self, id: &NodeId) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    /// Look up a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&GraphNode> {
        self.index_of(id).and_then(|idx| self.graph.node_weight(idx))
    }

    /// A node's stored weight, if the node exists and has one.
    pub fn weight_of(&self, id: &NodeId) -> Option<f64> {
        self.node(id).and_then(|n| n.weight)
    }

    /// Add a node, returning its index. Re-adding an existing id returns the
    /// existing index; a `Some` weight overwrites the stored one.
    pub fn add_node(&mut self, id: NodeId, weight: Option<f64>) -> NodeIndex {
        if let Some(&existing) = self.node_index.get(&id) {
            if weight.is_some() {
                if let Some(node) = self.graph.node_weight_mut(existing) {
                    node.weight = weight;
                }
            }
            return existing;
        }
        let idx = self.graph.add_node(GraphNode {
            id: id.clone(),
            weight,
        });
        self.node_index.insert(id, idx);
        idx
    }

    /// Set the weight of an existing node. Returns false if the id is
    /// unknown.
    pub fn set_weight(&mut self, id: &NodeId, weight: f64) -> bool {
        match self.index_of(id) {
            Some(idx) => {
                if let Some(node) = self.graph.node_weight_mut(idx) {
                    node.weight = Some(weight);
                    true
                } else {
                    false
                }
            }
            None => false,
        }
    }

    /// Add an undirected edge between two existing nodes. Self-loops and
    /// duplicate edges are silently ignored.
    pub fn add_edge(&mut self, u: &NodeId, v: &NodeId) -> Result<(), GraphError> {
        let a = self
            .index_of(u)
            .ok_or_else(|| GraphError::UnknownNode { id: u.clone() })?;
        let b = self
            .index_of(v)
            .ok_or_else(|| GraphError::UnknownNode { id: v.clone() })?;
        self.add_edge_by_index(a, b);
        Ok(())
    }

    /// Add an undirected edge between two existing indices. Self-loops and
    /// duplicate edges are silently ignored.
    pub fn add_edge_by_index(&mut self, a: NodeIndex, b: NodeIndex) {
        if a == b || self.graph.find_edge(a, b).is_some() {
            return;
        }
        self.graph.add_edge(a, b, ());
    }

    /// Whether an edge exists between two ids, in either orientation.
    pub fn has_edge(&self, u: &NodeId, v: &NodeId) -> bool {
        match (self.index_of(u), self.index_of(v)) {
            (Some(a), Some(b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> + '_ {
        self.graph.node_weights()
    }

    /// Node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.nodes().map(|n| &n.id)
    }

    /// Edges in insertion order, as id pairs in insertion orientation.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> + '_ {
        self.graph.edge_indices().filter_map(move |e| {
            let (a, b) = self.graph.edge_endpoints(e)?;
            Some((&self.graph[a].id, &self.graph[b].id))
        })
    }

    /// Indices adjacent to the given index.
    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(idx)
    }

    /// Number of connected components, via BFS over unvisited nodes.
    pub fn component_count(&self) -> usize {
        let mut visited: FxHashSet<NodeIndex> = FxHashSet::default();
        let mut components = 0;

        for start in self.graph.node_indices() {
            if visited.contains(&start) {
                continue;
            }
            components += 1;
            let mut queue = std::collections::VecDeque::new();
            visited.insert(start);
            queue.push_back(start);
            while let Some(node) = queue.pop_front() {
                for neighbor in self.graph.neighbors(node) {
                    if visited.insert(neighbor) {
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        components
    }
}

impl Default for WeightedGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WeightedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightedGraph")
            .field("nodes", &self.node_count())
            .field("edges", &self.edge_count())
            .finish()
    }
}
