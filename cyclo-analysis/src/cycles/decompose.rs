//! Exact cycle decomposition by exhaustive subset search.

use cyclo_core::types::collections::FxHashSet;
use tracing::{debug, warn};

use crate::graph::Edge;

use super::types::{Cycle, Decomposition, FundamentalCycleBasis};

/// Find the subset of basis cycles whose edge-set XOR equals the target.
///
/// Subset sizes are tried in increasing order and combinations within a
/// size in lexicographic order, so the first match is a minimal-cardinality
/// decomposition with a deterministic tie-break. Returns `None` when no
/// subset matches, meaning the target is outside the cycle space spanned by
/// the basis (its edges are not drawn from the same graph, or the basis is
/// stale).
///
/// Worst case O(2^n) in the basis size. That is a scaling limit, not a
/// defect: intended basis sizes are a handful of non-tree edges, and the
/// engine bounds the search via `DecomposeConfig::max_basis_len`.
pub fn decompose(target: &Cycle, basis: &FundamentalCycleBasis) -> Option<Decomposition> {
    let target_set = target.edge_set();
    let basis_sets: Vec<FxHashSet<Edge>> = basis.iter().map(Cycle::edge_set).collect();
    let n = basis_sets.len();

    for size in 1..=n {
        let mut combos = Combinations::new(n, size);
        while let Some(indices) = combos.next() {
            let mut acc: FxHashSet<Edge> = FxHashSet::default();
            for &i in indices {
                xor_in_place(&mut acc, &basis_sets[i]);
            }
            if acc == target_set {
                debug!(size, ?indices, "decomposed target cycle");
                return Some(Decomposition::new(indices.iter().copied()));
            }
        }
    }

    warn!(
        basis = n,
        target_edges = target_set.len(),
        "target cycle is not decomposable over the fundamental basis"
    );
    None
}

/// Symmetric difference accumulated into `acc`.
fn xor_in_place(acc: &mut FxHashSet<Edge>, other: &FxHashSet<Edge>) {
    for edge in other {
        if !acc.remove(edge) {
            acc.insert(edge.clone());
        }
    }
}

/// Lexicographic k-combinations of `0..n`, yielded in place.
struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }

    fn next(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.indices);
        }

        let k = self.indices.len();
        let mut i = k;
        while i > 0 {
            i -= 1;
            if self.indices[i] < self.n - k + i {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return Some(&self.indices);
            }
        }

        self.done = true;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyclo_core::NodeId;

    fn id(s: &str) -> NodeId {
        NodeId::new(s)
    }

    fn cycle(steps: &[(&str, &str)]) -> Cycle {
        Cycle::new(steps.iter().map(|(u, v)| (id(u), id(v))))
    }

    fn basis_of(cycles: Vec<Cycle>) -> FundamentalCycleBasis {
        FundamentalCycleBasis { cycles }
    }

    #[test]
    fn test_combinations_are_lexicographic() {
        let mut combos = Combinations::new(4, 2);
        let mut seen = Vec::new();
        while let Some(indices) = combos.next() {
            seen.push(indices.to_vec());
        }
        assert_eq!(
            seen,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }

    #[test]
    fn test_combinations_full_size() {
        let mut combos = Combinations::new(3, 3);
        assert_eq!(combos.next(), Some(&[0, 1, 2][..]));
        assert_eq!(combos.next(), None);
    }

    #[test]
    fn test_combinations_oversized_is_empty() {
        let mut combos = Combinations::new(2, 3);
        assert_eq!(combos.next(), None);
    }

    #[test]
    fn test_xor_cancels_shared_edges() {
        let a = cycle(&[("a", "b"), ("b", "c"), ("c", "a")]).edge_set();
        let b = cycle(&[("a", "c"), ("c", "d"), ("d", "a")]).edge_set();
        let mut acc = FxHashSet::default();
        xor_in_place(&mut acc, &a);
        xor_in_place(&mut acc, &b);
        // The shared a-c edge cancels, leaving the outer 4-cycle.
        assert_eq!(acc.len(), 4);
        assert!(!acc.contains(&Edge::new(id("a"), id("c"))));
    }

    #[test]
    fn test_singleton_decomposition() {
        let c0 = cycle(&[("a", "b"), ("b", "c"), ("c", "a")]);
        let c1 = cycle(&[("a", "c"), ("c", "d"), ("d", "a")]);
        let basis = basis_of(vec![c0.clone(), c1]);

        let result = decompose(&c0, &basis).unwrap();
        assert_eq!(result.indices(), &[0]);
    }

    #[test]
    fn test_pair_decomposition() {
        let c0 = cycle(&[("a", "b"), ("b", "c"), ("c", "a")]);
        let c1 = cycle(&[("a", "c"), ("c", "d"), ("d", "a")]);
        let basis = basis_of(vec![c0, c1]);

        // XOR of the two triangles: the outer square a-b-c-d.
        let target = cycle(&[("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")]);
        let result = decompose(&target, &basis).unwrap();
        assert_eq!(result.indices(), &[0, 1]);
    }

    #[test]
    fn test_foreign_cycle_is_not_decomposable() {
        let c0 = cycle(&[("a", "b"), ("b", "c"), ("c", "a")]);
        let basis = basis_of(vec![c0]);

        let target = cycle(&[("x", "y"), ("y", "z"), ("z", "x")]);
        assert!(decompose(&target, &basis).is_none());
    }

    #[test]
    fn test_empty_basis_decomposes_nothing() {
        let basis = basis_of(Vec::new());
        let target = cycle(&[("a", "b"), ("b", "c"), ("c", "a")]);
        assert!(decompose(&target, &basis).is_none());
    }
}
