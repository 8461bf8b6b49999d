//! Closed-walk validation.

use cyclo_core::constants::MIN_CYCLE_EDGES;
use cyclo_core::errors::CycleError;
use cyclo_core::NodeId;

use crate::graph::WeightedGraph;

use super::types::Cycle;

/// Validate an ordered node walk and convert it into a `Cycle`.
///
/// A valid walk is closed (first and last node coincide), has at least 3
/// edges (the 2-edge back-and-forth over a single edge is degenerate and
/// rejected), and every consecutive pair is a real edge of the graph in
/// either orientation. Validation runs before any decomposition is
/// attempted, so an invalid walk never reaches the subset search.
pub fn cycle_from_walk(graph: &WeightedGraph, walk: &[NodeId]) -> Result<Cycle, CycleError> {
    let (Some(first), Some(last)) = (walk.first(), walk.last()) else {
        return Err(CycleError::TooShort {
            edges: 0,
            min: MIN_CYCLE_EDGES,
        });
    };

    if first != last {
        return Err(CycleError::NotClosed {
            start: first.clone(),
            end: last.clone(),
        });
    }

    let edges = walk.len() - 1;
    if edges < MIN_CYCLE_EDGES {
        return Err(CycleError::TooShort {
            edges,
            min: MIN_CYCLE_EDGES,
        });
    }

    for pair in walk.windows(2) {
        if !graph.has_edge(&pair[0], &pair[1]) {
            return Err(CycleError::MissingEdge {
                from: pair[0].clone(),
                to: pair[1].clone(),
            });
        }
    }

    Ok(Cycle::new(
        walk.windows(2).map(|pair| (pair[0].clone(), pair[1].clone())),
    ))
}
