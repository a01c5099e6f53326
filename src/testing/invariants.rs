use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::types::{BiGraph, EdgeColor, vertex_bound};
use crate::union_find::UnionFind;

/// Panics unless the red edges and the blue edges each form a spanning
/// tree: |V|-1 edges, no monochromatic cycle, every vertex reached.
pub fn assert_two_spanning_trees(graph: &BiGraph) {
    let target = graph.node_count().saturating_sub(1);

    for color in [EdgeColor::Red, EdgeColor::Blue] {
        let mut sets = UnionFind::new(vertex_bound(graph));
        let mut count = 0;

        for edge in graph.edge_references() {
            if *edge.weight() != color {
                continue;
            }
            assert!(
                sets.union(edge.source().index(), edge.target().index()),
                "a {} edge closes a cycle",
                color
            );
            count += 1;
        }
        assert_eq!(count, target, "wrong {} tree size", color);

        if let Some(first) = graph.node_indices().next() {
            let root = sets.find(first.index());
            assert!(
                graph.node_indices().all(|v| sets.find(v.index()) == root),
                "{} tree does not span every vertex",
                color
            );
        }
    }
}
