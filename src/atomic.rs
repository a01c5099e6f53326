//! Nash-Williams atomicity test for bispanning graphs.
//!
//! A bispanning graph is composite when some nontrivial partition of its
//! vertex set into k blocks is crossed by exactly 2*(k-1) edges; the graph
//! then splits into smaller bispanning pieces glued at vertex pairs.
//! Atomic graphs admit no such partition. The test enumerates all Bell(n)
//! set partitions and is therefore exponential; callers bound the vertex
//! count.

use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::set_partition::enumerate_set_partitions;
use crate::types::{BiGraph, vertex_bound};

/// Tests whether the graph is an atomic bispanner. Precondition: the
/// current coloring satisfies the bispanning invariant.
pub fn is_atomic(graph: &BiGraph) -> bool {
    let n = graph.node_count();

    // dense relabeling of the possibly gappy vertex ids
    let mut vmap = vec![0usize; vertex_bound(graph)];
    for (k, v) in graph.node_indices().enumerate() {
        vmap[v.index()] = k;
    }

    let edges: Vec<(usize, usize)> = graph
        .edge_references()
        .map(|e| (vmap[e.source().index()], vmap[e.target().index()]))
        .collect();

    enumerate_set_partitions(n, |blocks| {
        let k = blocks.iter().copied().max().map_or(0, |b| b + 1);
        if k <= 1 || k == n {
            return true; // trivial partitions witness nothing
        }

        let crossing = edges.iter().filter(|&&(v, w)| blocks[v] != blocks[w]).count();

        // equality means the partition decomposes the graph: composite
        crossing != 2 * (k - 1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose::{decompose, is_okay};
    use crate::testing::graph_enumerator::GraphEnumeratorState;
    use crate::testing::random_graphs::random_bispanning_graph;
    use crate::types::from_edge_list;
    use crate::union_find::UnionFind;

    /// Reference implementation over edge subsets: remove every candidate
    /// cut set and compare its size against the component count of the
    /// rest. Agrees with the partition enumeration on all graphs.
    fn is_atomic_by_edge_subsets(graph: &BiGraph) -> bool {
        let edges: Vec<(usize, usize)> = graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
            .collect();
        let m = edges.len();
        assert!(m < usize::BITS as usize);

        for mask in 1usize..(1 << m) {
            let cut_size = mask.count_ones() as usize;
            if cut_size == m {
                continue;
            }

            let mut sets = UnionFind::new(vertex_bound(graph));
            let mut components = graph.node_count();
            for (i, &(v, w)) in edges.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    continue;
                }
                if sets.union(v, w) {
                    components -= 1;
                }
            }

            if 2 * (components - 1) == cut_size {
                return false;
            }
        }

        true
    }

    fn k4() -> BiGraph {
        from_edge_list(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])
    }

    #[test]
    fn test_double_edge_is_atomic() {
        let mut graph = from_edge_list(2, &[(0, 1), (0, 1)]);
        assert!(decompose(&mut graph));
        assert!(is_atomic(&graph));
        assert!(is_atomic_by_edge_subsets(&graph));
    }

    #[test]
    fn test_k4_is_atomic() {
        let mut graph = k4();
        assert!(decompose(&mut graph));
        assert!(is_okay(&graph));
        assert!(is_atomic(&graph));
        assert!(is_atomic_by_edge_subsets(&graph));
    }

    #[test]
    fn test_glued_blocks_are_composite() {
        // a K4 block and a four-cycle block glued at the vertex pair
        // (0, 1): splitting off vertices 4 and 5 crosses exactly
        // 2*(3-1) = 4 edges
        let mut graph = from_edge_list(
            6,
            &[
                (0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3), // K4 block
                (0, 4), (1, 4), (0, 5), (1, 5), // second block through 0 and 1
            ],
        );
        assert!(decompose(&mut graph));
        assert!(is_okay(&graph));
        assert!(!is_atomic(&graph));
        assert!(!is_atomic_by_edge_subsets(&graph));
    }

    #[test]
    fn test_glued_multigraph_blocks_are_composite() {
        // two blocks glued at (0, 1), each contributing its own copy of
        // the shared edge
        let mut graph = from_edge_list(
            6,
            &[
                (0, 1), (0, 1),
                (0, 2), (0, 3), (1, 2), (1, 3),
                (0, 4), (0, 5), (1, 4), (1, 5),
            ],
        );
        assert!(decompose(&mut graph));
        assert!(is_okay(&graph));
        assert!(!is_atomic(&graph));
        assert!(!is_atomic_by_edge_subsets(&graph));
    }

    #[test]
    fn test_random_bispanners_agree_with_reference() {
        for n in 4..=6 {
            for seed in 0..4 {
                let graph = random_bispanning_graph(n, seed);
                assert_eq!(
                    is_atomic(&graph),
                    is_atomic_by_edge_subsets(&graph),
                    "implementations disagree for n = {} seed = {}",
                    n,
                    seed
                );
            }
        }
    }

    #[test]
    fn test_exhaustive_small_graphs_agree_with_reference() {
        for n in 2..=5 {
            let enumerator = GraphEnumeratorState {
                n,
                mask: 0,
                last_mask: 1 << (n * (n - 1) / 2),
            };
            for mut graph in enumerator {
                if graph.edge_count() != 2 * (n - 1) {
                    continue;
                }
                if !decompose(&mut graph) || !is_okay(&graph) {
                    continue;
                }
                assert_eq!(is_atomic(&graph), is_atomic_by_edge_subsets(&graph));
            }
        }
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn test_exhaustive_six_vertex_graphs_agree_with_reference() {
        let enumerator = GraphEnumeratorState {
            n: 6,
            mask: 0,
            last_mask: 1 << (6 * 5 / 2),
        };
        for mut graph in enumerator {
            if graph.edge_count() != 10 {
                continue;
            }
            if !decompose(&mut graph) || !is_okay(&graph) {
                continue;
            }
            assert_eq!(is_atomic(&graph), is_atomic_by_edge_subsets(&graph));
        }
    }
}
