use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::decompose::{decompose, is_okay};
use crate::types::{BiGraph, EdgeColor};

/// Generates a random bispanning graph with `n` vertices and 2n-2 edges by
/// rejection sampling: random simple graphs of the right size are drawn
/// until the decomposition validates one. Seeded for reproducibility.
///
/// `n` must be 0, 1, or at least 4; smaller sizes have no simple
/// bispanning graph and the sampling would never terminate.
pub fn random_bispanning_graph(n: usize, seed: u64) -> BiGraph {
    let mut rng = StdRng::seed_from_u64(seed);

    loop {
        let mut graph = BiGraph::default();
        let nodes: Vec<_> = (0..n).map(|i| graph.add_node(i as u32)).collect();

        if n > 1 {
            let mut placed = 0;
            while placed < 2 * n - 2 {
                let x = rng.random_range(0..n);
                let y = rng.random_range(0..n);
                if x == y || graph.find_edge(nodes[x], nodes[y]).is_some() {
                    continue;
                }
                graph.add_edge(nodes[x], nodes[y], EdgeColor::Black);
                placed += 1;
            }
        }

        if decompose(&mut graph) && is_okay(&graph) {
            return graph;
        }
    }
}
