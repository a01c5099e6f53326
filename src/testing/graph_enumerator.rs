use petgraph::visit::NodeIndexable;

use crate::types::{BiGraph, EdgeColor};

/// Iterator over every simple graph on `n` labeled vertices: each bit of
/// `mask` selects one of the n*(n-1)/2 possible edges. Start at mask 0 and
/// set `last_mask` to 1 << (n*(n-1)/2) to sweep them all.
pub struct GraphEnumeratorState {
    pub n: usize,
    pub mask: usize,
    pub last_mask: usize,
}

impl Iterator for GraphEnumeratorState {
    type Item = BiGraph;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == self.last_mask {
            return None;
        }

        let mut graph = BiGraph::default();
        for i in 0..self.n {
            graph.add_node(i.try_into().unwrap());
        }

        let mut check = 0;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.mask & (1 << check) != 0 {
                    graph.add_edge(graph.from_index(i), graph.from_index(j), EdgeColor::Black);
                }
                check += 1;
            }
        }

        self.mask = self.mask.wrapping_add(1);
        Some(graph)
    }
}
