//! Shared constants for the cyclo cycle-space engine.

/// Cyclo version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum number of edges in a valid cycle.
///
/// A closed walk of 2 edges is a degenerate back-and-forth over a single
/// edge and is rejected by validation.
pub const MIN_CYCLE_EDGES: usize = 3;

/// Default cap on the fundamental basis size accepted by the decomposer.
///
/// The subset search is O(2^n) in the basis size; 20 bounds it at roughly a
/// million subsets.
pub const DEFAULT_MAX_BASIS_LEN: usize = 20;

/// Default superlevel filter threshold when none is configured.
pub const DEFAULT_SUPERLEVEL_THRESHOLD: f64 = 0.0;
