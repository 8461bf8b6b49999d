//! Fundamental cycle bases and cycle-space decomposition.
//!
//! One fundamental cycle per non-tree edge; cycles combine via symmetric
//! difference of their edge sets (GF(2)). Decomposition searches subsets of
//! the basis exhaustively, smallest first.

mod decompose;
mod extract;
mod types;
mod validate;

pub use decompose::decompose;
pub use extract::extract_fundamental_cycles;
pub use types::{Cycle, Decomposition, FundamentalCycleBasis};
pub use validate::cycle_from_walk;
