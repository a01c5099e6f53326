use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableUnGraph};

/// Color of an edge: which of the two spanning trees it belongs to.
///
/// `Black` means the edge has not been assigned to a tree yet.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EdgeColor {
    Black,
    Red,
    Blue,
}

impl EdgeColor {
    /// The tree an edge of this color is tested against during the
    /// augmenting search: the tree opposite its own. `Black` counts as
    /// the color before red, so uncolored edges are tested against red.
    pub fn other_tree(self) -> EdgeColor {
        match self {
            EdgeColor::Red => EdgeColor::Blue,
            _ => EdgeColor::Red,
        }
    }

    /// Swaps red and blue; a black edge stays black.
    pub fn flipped(self) -> EdgeColor {
        match self {
            EdgeColor::Red => EdgeColor::Blue,
            EdgeColor::Blue => EdgeColor::Red,
            EdgeColor::Black => EdgeColor::Black,
        }
    }
}

impl std::fmt::Display for EdgeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeColor::Black => write!(f, "Black"),
            EdgeColor::Red => write!(f, "Red"),
            EdgeColor::Blue => write!(f, "Blue"),
        }
    }
}

/// Wrapper for petgraph's stable undirected multigraph.
///
/// Stable indices keep vertex and edge ids valid across deletions, so ids
/// need not be contiguous. Edge iteration is in ascending edge id order,
/// which the decomposition relies on for reproducibility.
pub type BiGraph = StableUnGraph<u32, EdgeColor>;

/// Builds a graph with nodes 0..n (node weight = label) and the given
/// uncolored edges, added in order.
pub fn from_edge_list(n: usize, edges: &[(usize, usize)]) -> BiGraph {
    let mut graph = BiGraph::default();
    let nodes: Vec<_> = (0..n).map(|i| graph.add_node(i as u32)).collect();
    for &(v, w) in edges {
        graph.add_edge(nodes[v], nodes[w], EdgeColor::Black);
    }
    graph
}

/// Returns the endpoint of `e` other than `v` (or `v` for a self-loop).
pub fn opposite(graph: &BiGraph, v: NodeIndex, e: EdgeIndex) -> NodeIndex {
    let (a, b) = graph.edge_endpoints(e).expect("edge should exist");
    if a == v { b } else { a }
}

/// One past the largest live vertex id, for sizing per-vertex scratch.
pub fn vertex_bound(graph: &BiGraph) -> usize {
    graph.node_indices().map(|v| v.index() + 1).max().unwrap_or(0)
}

/// One past the largest live edge id, for sizing per-edge scratch.
pub fn edge_bound(graph: &BiGraph) -> usize {
    graph.edge_indices().map(|e| e.index() + 1).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::visit::{EdgeRef, IntoEdgeReferences};

    #[test]
    fn test_from_edge_list() {
        let graph = from_edge_list(3, &[(0, 1), (1, 2)]);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.edge_references().all(|e| *e.weight() == EdgeColor::Black));
        assert_eq!(vertex_bound(&graph), 3);
        assert_eq!(edge_bound(&graph), 2);
    }

    #[test]
    fn test_opposite() {
        let graph = from_edge_list(2, &[(0, 1)]);
        let e = graph.edge_indices().next().unwrap();
        let (a, b) = graph.edge_endpoints(e).unwrap();
        assert_eq!(opposite(&graph, a, e), b);
        assert_eq!(opposite(&graph, b, e), a);
    }

    #[test]
    fn test_color_helpers() {
        assert_eq!(EdgeColor::Black.other_tree(), EdgeColor::Red);
        assert_eq!(EdgeColor::Red.other_tree(), EdgeColor::Blue);
        assert_eq!(EdgeColor::Blue.other_tree(), EdgeColor::Red);
        assert_eq!(EdgeColor::Red.flipped(), EdgeColor::Blue);
        assert_eq!(EdgeColor::Blue.flipped(), EdgeColor::Red);
        assert_eq!(EdgeColor::Black.flipped(), EdgeColor::Black);
    }
}
