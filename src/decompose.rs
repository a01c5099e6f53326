//! Decomposition of a graph into two edge-disjoint spanning trees.
//!
//! Every edge of the graph is assigned to the red or the blue tree by a
//! matroid union style algorithm: edges that connect two components of a
//! tree are taken directly, all others go through an augmenting search
//! over the breadth first forests of both colors. A failed search is
//! fatal, the edge set cannot be split into two spanning forests.

use std::collections::VecDeque;

use hashbrown::HashMap;
use log::debug;
use petgraph::stable_graph::{EdgeIndex, NodeIndex};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::types::{BiGraph, EdgeColor, opposite, vertex_bound};
use crate::union_find::UnionFind;

/// Colors every edge of `graph` red or blue in place so that each color
/// class forms a spanning tree, keeping as much of a pre-seeded coloring
/// as possible. Returns true iff both trees reach |V|-1 edges; on failure
/// the coloring is left partial and must not be analyzed further.
pub fn decompose(graph: &mut BiGraph) -> bool {
    Bispanner::new(graph).run()
}

/// Checks the bispanning invariant on the current coloring: no black
/// edges remain and both trees hold exactly |V|-1 edges.
pub fn is_okay(graph: &BiGraph) -> bool {
    let target = graph.node_count().saturating_sub(1);
    let mut red = 0;
    let mut blue = 0;
    for edge in graph.edge_references() {
        match edge.weight() {
            EdgeColor::Black => return false,
            EdgeColor::Red => red += 1,
            EdgeColor::Blue => blue += 1,
        }
    }
    red == target && blue == target
}

/// State of one decomposition run: a union-find and an edge count per
/// tree, plus the breadth first forests the augmenting search walks.
struct Bispanner<'a> {
    graph: &'a mut BiGraph,
    union_red: UnionFind,
    union_blue: UnionFind,
    count_red: usize,
    count_blue: usize,
    pred_red: HashMap<NodeIndex, EdgeIndex>,
    pred_blue: HashMap<NodeIndex, EdgeIndex>,
}

impl<'a> Bispanner<'a> {
    fn new(graph: &'a mut BiGraph) -> Self {
        let bound = vertex_bound(graph);
        Bispanner {
            union_red: UnionFind::new(bound),
            union_blue: UnionFind::new(bound),
            count_red: 0,
            count_blue: 0,
            pred_red: HashMap::new(),
            pred_blue: HashMap::new(),
            graph,
        }
    }

    fn run(&mut self) -> bool {
        let edges: Vec<EdgeIndex> = self.graph.edge_indices().collect();
        let target = self.graph.node_count().saturating_sub(1);

        // Keep a pre-seeded coloring where it is still consistent: an edge
        // stays in its tree iff it joins two components there. On a
        // conflict the lower edge id wins and the loser is re-seeded.
        for &e in &edges {
            let color = self.graph[e];
            if color == EdgeColor::Black {
                continue;
            }
            let (v, w) = self.graph.edge_endpoints(e).expect("edge should exist");
            let kept = match color {
                EdgeColor::Red => self.union_red.union(v.index(), w.index()),
                _ => self.union_blue.union(v.index(), w.index()),
            };
            if kept {
                match color {
                    EdgeColor::Red => self.count_red += 1,
                    _ => self.count_blue += 1,
                }
            } else {
                debug!("pre-seeded {} on e{} is redundant, resetting", color, e.index());
                self.graph[e] = EdgeColor::Black;
            }
        }

        for &e0 in &edges {
            // both trees complete: remaining edges stay black by design
            if self.count_red == target && self.count_blue == target {
                break;
            }
            if self.graph[e0] != EdgeColor::Black {
                continue;
            }
            let (x, y) = self.graph.edge_endpoints(e0).expect("edge should exist");

            if self.union_red.union(x.index(), y.index()) {
                debug!("e{} taken directly into the red tree", e0.index());
                self.graph[e0] = EdgeColor::Red;
                self.count_red += 1;
            } else if self.union_blue.union(x.index(), y.index()) {
                debug!("e{} taken directly into the blue tree", e0.index());
                self.graph[e0] = EdgeColor::Blue;
                self.count_blue += 1;
            } else {
                debug!("augmenting search seeded at e{}", e0.index());
                self.bfs_tree(EdgeColor::Red, x);
                self.bfs_tree(EdgeColor::Blue, x);
                if !self.augment(e0) {
                    debug!("augmenting search exhausted, graph is not bispanning");
                    return false;
                }
            }
        }

        self.count_red == target && self.count_blue == target
    }

    /// Breadth first forest of one color class rooted at `root`, recording
    /// the incoming edge of every reached vertex. Recomputed from scratch
    /// before each augmenting search.
    fn bfs_tree(&mut self, color: EdgeColor, root: NodeIndex) {
        let pred = match color {
            EdgeColor::Red => &mut self.pred_red,
            _ => &mut self.pred_blue,
        };
        pred.clear();

        let mut queue = VecDeque::new();
        queue.push_back(root);

        while let Some(v) = queue.pop_front() {
            for edge in self.graph.edges(v) {
                if *edge.weight() != color {
                    continue;
                }
                let w = edge.target();
                if w == root || pred.contains_key(&w) {
                    continue;
                }
                pred.insert(w, edge.id());
                queue.push_back(w);
            }
        }
    }

    /// Searches for an alternating sequence of edges that frees a slot for
    /// `e0`, whose endpoints are already connected in both trees. Every
    /// examined edge is tested against the tree opposite its own color;
    /// new edges are discovered along the unlabeled part of an endpoint's
    /// path to the root of the breadth first forest.
    fn augment(&mut self, e0: EdgeIndex) -> bool {
        let (root, _) = self.graph.edge_endpoints(e0).expect("edge should exist");

        let mut queue = VecDeque::new();
        queue.push_back(e0);

        // which edge discovered which, walked backwards on success
        let mut label: HashMap<EdgeIndex, EdgeIndex> = HashMap::new();

        while let Some(e) = queue.pop_front() {
            let ti = self.graph[e].other_tree();
            let (v, w) = self.graph.edge_endpoints(e).expect("edge should exist");

            let split = match ti {
                EdgeColor::Red => self.union_red.find(v.index()) != self.union_red.find(w.index()),
                _ => self.union_blue.find(v.index()) != self.union_blue.find(w.index()),
            };
            if split {
                match ti {
                    EdgeColor::Red => {
                        self.union_red.union(v.index(), w.index());
                        self.count_red += 1;
                    }
                    _ => {
                        self.union_blue.union(v.index(), w.index());
                        self.count_blue += 1;
                    }
                }
                self.recolor_chain(e, ti, &label);
                return true;
            }

            let pred = match ti {
                EdgeColor::Red => &self.pred_red,
                _ => &self.pred_blue,
            };

            // pick an endpoint whose incoming forest edge is unlabeled
            let start = [v, w].into_iter().find(|u| {
                *u != root && pred.get(u).is_some_and(|pe| !label.contains_key(pe))
            });
            let Some(mut u) = start else {
                debug!("both ends of e{} already labeled", e.index());
                continue;
            };

            // collect the unlabeled tail of u's path towards the root
            let mut path = Vec::new();
            while u != root {
                let Some(&pe) = pred.get(&u) else { break };
                if label.contains_key(&pe) {
                    break;
                }
                path.push(pe);
                u = opposite(self.graph, u, pe);
            }

            // label nearest-root edges first so discovery stays ordered
            while let Some(ep) = path.pop() {
                label.insert(ep, e);
                queue.push_back(ep);
            }
        }

        false
    }

    /// Applies the augmenting chain: starting from the successful edge,
    /// give each edge the running target color, pass its old color on,
    /// and follow the label links down to the unlabeled seed edge. Net
    /// effect is one more edge in each tree and one black edge less.
    fn recolor_chain(
        &mut self,
        mut e: EdgeIndex,
        mut target: EdgeColor,
        label: &HashMap<EdgeIndex, EdgeIndex>,
    ) {
        while let Some(&next) = label.get(&e) {
            let old = self.graph[e];
            self.graph[e] = target;
            debug!("recolored e{} to {}", e.index(), target);
            target = old;
            e = next;
        }
        self.graph[e] = target;
        debug!("recolored chain head e{} to {}", e.index(), target);
    }
}
