//! Bottleneck-biased spanning tree builder.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use cyclo_core::types::collections::FxHashSet;
use cyclo_core::NodeId;
use petgraph::graph::NodeIndex;
use tracing::debug;

use crate::graph::WeightedGraph;

use super::types::SpanningTree;

/// A candidate edge on the tree frontier.
///
/// Ordered so that `BinaryHeap::pop` yields the highest priority first,
/// with ties broken by the smallest `from` id, then the smallest `to` id.
/// The tie-break keeps extraction order fully deterministic.
#[derive(Debug, Clone)]
struct FrontierEdge {
    priority: f64,
    from: NodeId,
    to: NodeId,
    from_idx: NodeIndex,
    to_idx: NodeIndex,
}

impl PartialEq for FrontierEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEdge {}

impl PartialOrd for FrontierEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| other.from.cmp(&self.from))
            .then_with(|| other.to.cmp(&self.to))
    }
}

/// Build a spanning tree biased toward high-weight nodes.
///
/// Growth starts at the node of maximum weight and repeatedly adopts the
/// frontier edge whose priority, `max(weight(u), weight(v))`, is highest.
/// The result keeps the full node set of the source graph; on a
/// disconnected input only the component containing the start node gains
/// edges, leaving a degenerate forest rather than an error.
///
/// An empty input yields an empty tree.
pub fn build_spanning_tree(graph: &WeightedGraph) -> SpanningTree {
    let mut tree = WeightedGraph::new();
    for node in graph.nodes() {
        tree.add_node(node.id.clone(), node.weight);
    }

    let Some(start) = select_start(graph) else {
        return SpanningTree {
            graph: tree,
            root: None,
        };
    };

    let root = graph.graph[start].id.clone();
    let mut visited: FxHashSet<NodeIndex> = FxHashSet::default();
    let mut heap: BinaryHeap<FrontierEdge> = BinaryHeap::new();

    visited.insert(start);
    push_frontier(graph, start, &visited, &mut heap);

    while visited.len() < graph.node_count() {
        // An exhausted frontier means the input was disconnected.
        let Some(entry) = heap.pop() else { break };

        let from_seen = visited.contains(&entry.from_idx);
        let to_seen = visited.contains(&entry.to_idx);
        if from_seen && to_seen {
            // Stale entry: the far endpoint was adopted via a better edge.
            continue;
        }

        let new_idx = if from_seen { entry.to_idx } else { entry.from_idx };
        visited.insert(new_idx);

        if let (Some(&a), Some(&b)) = (
            tree.node_index.get(&entry.from),
            tree.node_index.get(&entry.to),
        ) {
            tree.add_edge_by_index(a, b);
        }

        push_frontier(graph, new_idx, &visited, &mut heap);
    }

    debug!(
        root = %root,
        nodes = tree.node_count(),
        edges = tree.edge_count(),
        "spanning tree built"
    );

    SpanningTree {
        graph: tree,
        root: Some(root),
    }
}

/// The start node: maximum weight, ties broken by the smallest id.
fn select_start(graph: &WeightedGraph) -> Option<NodeIndex> {
    graph
        .graph
        .node_indices()
        .max_by(|&a, &b| {
            let na = &graph.graph[a];
            let nb = &graph.graph[b];
            na.weight_or_neg_inf()
                .total_cmp(&nb.weight_or_neg_inf())
                .then_with(|| nb.id.cmp(&na.id))
        })
}

/// Push all edges from a newly adopted node to its unvisited neighbors.
fn push_frontier(
    graph: &WeightedGraph,
    from: NodeIndex,
    visited: &FxHashSet<NodeIndex>,
    heap: &mut BinaryHeap<FrontierEdge>,
) {
    let from_node = &graph.graph[from];
    for neighbor in graph.neighbors(from) {
        if visited.contains(&neighbor) {
            continue;
        }
        let to_node = &graph.graph[neighbor];
        let priority = from_node
            .weight_or_neg_inf()
            .max(to_node.weight_or_neg_inf());
        heap.push(FrontierEdge {
            priority,
            from: from_node.id.clone(),
            to: to_node.id.clone(),
            from_idx: from,
            to_idx: neighbor,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> NodeId {
        NodeId::new(s)
    }

    fn triangle_with_tail() -> WeightedGraph {
        // a-b-c triangle plus a pendant d off c.
        let mut g = WeightedGraph::new();
        g.add_node(id("a"), Some(1.0));
        g.add_node(id("b"), Some(5.0));
        g.add_node(id("c"), Some(3.0));
        g.add_node(id("d"), Some(2.0));
        g.add_edge(&id("a"), &id("b")).unwrap();
        g.add_edge(&id("b"), &id("c")).unwrap();
        g.add_edge(&id("c"), &id("a")).unwrap();
        g.add_edge(&id("c"), &id("d")).unwrap();
        g
    }

    #[test]
    fn test_tree_shape() {
        let g = triangle_with_tail();
        let tree = build_spanning_tree(&g);
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.edge_count(), 3);
        assert_eq!(tree.root, Some(id("b")));
        for (u, v) in tree.edges() {
            assert!(g.has_edge(u, v));
        }
    }

    #[test]
    fn test_growth_prefers_heavy_nodes() {
        // From b (w=5) both a (w=1) and c (w=3) are frontier candidates
        // with priority 5; the id tie-break adopts b-a first, then b-c
        // wins over c-a and c-d, leaving a-c as the non-tree edge.
        let g = triangle_with_tail();
        let tree = build_spanning_tree(&g);
        assert!(tree.contains_edge(&id("a"), &id("b")));
        assert!(tree.contains_edge(&id("b"), &id("c")));
        assert!(tree.contains_edge(&id("c"), &id("d")));
        assert!(!tree.contains_edge(&id("a"), &id("c")));
    }

    #[test]
    fn test_start_tie_breaks_by_id() {
        let mut g = WeightedGraph::new();
        g.add_node(id("z"), Some(7.0));
        g.add_node(id("m"), Some(7.0));
        g.add_edge(&id("z"), &id("m")).unwrap();
        let tree = build_spanning_tree(&g);
        assert_eq!(tree.root, Some(id("m")));
    }

    #[test]
    fn test_empty_graph_yields_empty_tree() {
        let g = WeightedGraph::new();
        let tree = build_spanning_tree(&g);
        assert_eq!(tree.node_count(), 0);
        assert_eq!(tree.edge_count(), 0);
        assert_eq!(tree.root, None);
    }

    #[test]
    fn test_disconnected_input_spans_start_component() {
        let mut g = WeightedGraph::new();
        g.add_node(id("a"), Some(9.0));
        g.add_node(id("b"), Some(1.0));
        g.add_node(id("x"), Some(2.0));
        g.add_node(id("y"), Some(3.0));
        g.add_edge(&id("a"), &id("b")).unwrap();
        g.add_edge(&id("x"), &id("y")).unwrap();

        let tree = build_spanning_tree(&g);
        // Full node set, but only the start component has edges.
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.edge_count(), 1);
        assert!(tree.contains_edge(&id("a"), &id("b")));
        assert!(!tree.contains_edge(&id("x"), &id("y")));
    }

    #[test]
    fn test_absent_weights_are_adopted_last() {
        let mut g = WeightedGraph::new();
        g.add_node(id("a"), Some(1.0));
        g.add_node(id("b"), None);
        g.add_node(id("c"), Some(2.0));
        g.add_edge(&id("a"), &id("b")).unwrap();
        g.add_edge(&id("a"), &id("c")).unwrap();
        g.add_edge(&id("b"), &id("c")).unwrap();

        let tree = build_spanning_tree(&g);
        assert_eq!(tree.root, Some(id("c")));
        // Both frontier edges from c carry priority 2 = max(2, other), so
        // the id tie-break adopts c-a then c-b; a-b never enters the tree.
        assert_eq!(tree.edge_count(), 2);
        assert!(tree.contains_edge(&id("c"), &id("a")));
        assert!(tree.contains_edge(&id("c"), &id("b")));
        assert!(!tree.contains_edge(&id("a"), &id("b")));
    }

    #[test]
    fn test_deterministic_across_runs() {
        let g = triangle_with_tail();
        let t1 = build_spanning_tree(&g);
        let t2 = build_spanning_tree(&g);
        let e1: Vec<_> = t1
            .edges()
            .map(|(u, v)| (u.clone(), v.clone()))
            .collect();
        let e2: Vec<_> = t2
            .edges()
            .map(|(u, v)| (u.clone(), v.clone()))
            .collect();
        assert_eq!(e1, e2);
        assert_eq!(t1.root, t2.root);
    }
}
