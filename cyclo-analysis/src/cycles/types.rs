//! Cycle types: closed walks, the fundamental basis, and decompositions.

use cyclo_core::types::collections::{FxHashSet, SmallVec4, SmallVec8};
use cyclo_core::NodeId;
use serde::{Deserialize, Serialize};

use crate::graph::Edge;

/// A cycle: an ordered sequence of directed steps forming a closed walk.
///
/// For fundamental cycles the last step is the closing non-tree edge and
/// the steps before it are the tree path between its endpoints. The
/// unordered edge-set view used for XOR algebra is always derived from the
/// step sequence, never stored separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    steps: SmallVec8<(NodeId, NodeId)>,
}

impl Cycle {
    pub fn new(steps: impl IntoIterator<Item = (NodeId, NodeId)>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    /// Number of edges in the cycle.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The directed steps in walk order.
    pub fn steps(&self) -> &[(NodeId, NodeId)] {
        &self.steps
    }

    /// The steps along the tree path, everything except the closing edge.
    pub fn tree_path(&self) -> &[(NodeId, NodeId)] {
        match self.steps.split_last() {
            Some((_, path)) => path,
            None => &[],
        }
    }

    /// The closing edge, the step that is not part of the tree path.
    pub fn closing_edge(&self) -> Option<&(NodeId, NodeId)> {
        self.steps.last()
    }

    /// The unordered edge set, derived from the step sequence.
    pub fn edge_set(&self) -> FxHashSet<Edge> {
        self.steps
            .iter()
            .map(|(u, v)| Edge::new(u.clone(), v.clone()))
            .collect()
    }
}

/// The fundamental cycle basis induced by a spanning tree: one cycle per
/// non-tree edge, in the graph's edge iteration order. The cycles are
/// linearly independent generators of the cycle space over GF(2), since
/// each contains an edge (its closing edge) absent from every other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundamentalCycleBasis {
    pub(crate) cycles: Vec<Cycle>,
}

impl FundamentalCycleBasis {
    /// Number of basis cycles, the cyclomatic number on connected inputs.
    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Cycle> {
        self.cycles.get(index)
    }

    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cycle> + '_ {
        self.cycles.iter()
    }
}

/// The subset of basis cycles whose edge-set XOR equals a target cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decomposition {
    indices: SmallVec4<usize>,
}

impl Decomposition {
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
        }
    }

    /// Basis indices in ascending order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
