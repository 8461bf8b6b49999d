//! Cycle validation errors.

use super::error_code::{self, ErrorCode};
use crate::types::identifiers::NodeId;

/// Errors raised when a candidate closed walk fails validation.
/// Caught at the boundary before decomposition is attempted.
#[derive(Debug, thiserror::Error)]
pub enum CycleError {
    #[error("Walk is not closed: starts at {start}, ends at {end}")]
    NotClosed { start: NodeId, end: NodeId },

    /// Fewer than 3 edges. The 2-edge back-and-forth over a single edge is
    /// degenerate and excluded.
    #[error("Walk has {edges} edges, a cycle needs at least {min}")]
    TooShort { edges: usize, min: usize },

    #[error("Walk step {from} -> {to} is not an edge of the graph")]
    MissingEdge { from: NodeId, to: NodeId },

    /// The basis is larger than the configured search bound.
    #[error("Basis has {len} cycles, exceeding the configured limit of {max}")]
    BasisTooLarge { len: usize, max: usize },
}

impl ErrorCode for CycleError {
    fn error_code(&self) -> &'static str {
        error_code::CYCLE_ERROR
    }
}
