//! Graph structure errors.

use super::error_code::{self, ErrorCode};
use crate::types::identifiers::NodeId;

/// Errors raised by graph and spanning-tree operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The tree does not connect two endpoints it was expected to span.
    /// Only possible when the tree and graph are inconsistent with each
    /// other; propagated to the caller, never recovered internally.
    #[error("Spanning tree does not connect {from} to {to}")]
    InconsistentTree { from: NodeId, to: NodeId },

    #[error("Edge references unknown node {id}")]
    UnknownNode { id: NodeId },
}

impl ErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        error_code::GRAPH_ERROR
    }
}
