//! Cycle, cut and unique-exchange analysis on a valid bispanning
//! decomposition.
//!
//! All queries here assume the graph currently satisfies the bispanning
//! invariant (see [`crate::decompose::is_okay`]). Recoloring a single tree
//! edge breaks the invariant in exactly one way: it closes one
//! monochromatic cycle and opens one monochromatic cut. The functions in
//! this module compute both, and classify which edges repair the damage.

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use hashbrown::{HashMap, HashSet};
use petgraph::stable_graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::types::{BiGraph, EdgeColor, edge_bound, opposite, vertex_bound};

/// Breadth first path between the endpoints of `e0`.
///
/// With `same_color` the search walks edges of e0's own color class,
/// excluding `e0` itself; the result with `e0` appended is the unique
/// monochromatic cycle `e0` closes. Without it the search walks the other
/// color class and the result is the path connecting e0's endpoints in the
/// other tree. Returns None iff the far endpoint is unreached, which on a
/// valid bispanning graph signals a violated precondition.
pub fn compute_path(graph: &BiGraph, e0: EdgeIndex, same_color: bool) -> Option<Vec<EdgeIndex>> {
    let color = graph[e0];
    let (x, y) = graph.edge_endpoints(e0).expect("edge should exist");

    let mut queue = VecDeque::new();
    queue.push_back(x);
    let mut pred: HashMap<NodeIndex, EdgeIndex> = HashMap::new();

    while let Some(v) = queue.pop_front() {
        for edge in graph.edges(v) {
            if same_color && (*edge.weight() != color || edge.id() == e0) {
                continue;
            }
            if !same_color && *edge.weight() == color {
                continue;
            }
            let w = edge.target();
            if w == x || pred.contains_key(&w) {
                continue;
            }
            pred.insert(w, edge.id());
            queue.push_back(w);
        }
    }

    if !pred.contains_key(&y) {
        return None;
    }

    let mut path = Vec::new();
    let mut v = y;
    while v != x {
        let e = pred[&v];
        path.push(e);
        v = opposite(graph, v, e);
    }
    if same_color {
        path.push(e0);
    }
    Some(path)
}

/// Two-sided breadth first cut induced by `e0`.
///
/// Vertices are partitioned into e0_x's side and e0_y's side along one
/// color class (the other class for `same_color`, e0's own class without
/// `e0` otherwise); the returned set holds every edge of the complementary
/// class crossing the partition, `e0` included when it is of that class.
/// Returns None iff both endpoints land on the same side, meaning there is
/// no cut.
pub fn compute_cut(graph: &BiGraph, e0: EdgeIndex, same_color: bool) -> Option<HashSet<EdgeIndex>> {
    let color = graph[e0];
    let (x, y) = graph.edge_endpoints(e0).expect("edge should exist");

    // 0 = unseen, 1 = x's side, 2 = y's side
    let mut mark = vec![0u8; vertex_bound(graph)];

    let mut queue = VecDeque::new();
    queue.push_back(x);
    mark[x.index()] = 1;

    while let Some(v) = queue.pop_front() {
        for edge in graph.edges(v) {
            if same_color && *edge.weight() == color {
                continue;
            }
            if !same_color && (*edge.weight() != color || edge.id() == e0) {
                continue;
            }
            let w = edge.target();
            if mark[w.index()] == 0 {
                mark[w.index()] = 1;
                queue.push_back(w);
            }
        }
    }

    if mark[y.index()] != 0 {
        return None; // endpoints stay connected without e0
    }

    queue.push_back(y);
    mark[y.index()] = 2;
    let mut cut = HashSet::new();

    while let Some(v) = queue.pop_front() {
        for edge in graph.edges(v) {
            let w = edge.target();
            if same_color == (*edge.weight() == color) {
                if mark[w.index()] == 1 {
                    cut.insert(edge.id());
                }
            } else if mark[w.index()] == 0 {
                mark[w.index()] = 2;
                queue.push_back(w);
            }
        }
    }

    Some(cut)
}

/// True iff the endpoints of `e0` are connected inside e0's own color
/// class without using `e0`, i.e. the edge sits on a monochromatic cycle.
pub fn test_cycle(graph: &BiGraph, e0: EdgeIndex) -> bool {
    let color = graph[e0];
    let (x, y) = graph.edge_endpoints(e0).expect("edge should exist");

    let mut seen = FixedBitSet::with_capacity(vertex_bound(graph));
    let mut queue = VecDeque::new();
    queue.push_back(x);

    while let Some(v) = queue.pop_front() {
        for edge in graph.edges(v) {
            if *edge.weight() != color || edge.id() == e0 {
                continue;
            }
            let w = edge.target();
            if seen.contains(w.index()) {
                continue;
            }
            seen.insert(w.index());
            queue.push_back(w);
        }
    }

    seen.contains(y.index())
}

/// Classifies the exchange the edge `e0` would start under the current
/// coloring: flipping `e0` to the other tree leaves exactly one legal
/// repair iff this returns true.
///
/// Panics if the other-color path or cut does not exist, which cannot
/// happen while the graph satisfies the bispanning invariant.
pub fn is_unique_exchange(graph: &BiGraph, e0: EdgeIndex) -> bool {
    if test_cycle(graph, e0) {
        return false;
    }

    let path = compute_path(graph, e0, false)
        .expect("no path in the other tree: graph is not bispanning");
    let cut = compute_cut(graph, e0, false)
        .expect("no cut in the other tree: graph is not bispanning");

    path.iter().copied().filter(|e| cut.contains(e)).count() == 1
}

/// Per-edge flag sets written by the marking queries. Every marking call
/// clears its flags before recomputing, so the sets only describe the most
/// recent query; they are scratch state, not persistent facts.
#[derive(Debug, Default)]
pub struct ExchangeAnalyzer {
    in_cycle: FixedBitSet,
    in_cut: FixedBitSet,
    is_fix: FixedBitSet,
    unique: FixedBitSet,
}

impl ExchangeAnalyzer {
    pub fn new() -> Self {
        ExchangeAnalyzer::default()
    }

    fn reset(set: &mut FixedBitSet, bound: usize) {
        set.clear();
        set.grow(bound);
    }

    /// Marks the monochromatic cycle `e0` closes in its own color class,
    /// if any. Call after recoloring `e0` to detect the cycle it created.
    pub fn mark_cycle(&mut self, graph: &BiGraph, e0: EdgeIndex) -> bool {
        Self::reset(&mut self.in_cycle, edge_bound(graph));

        let Some(cycle) = compute_path(graph, e0, true) else {
            return false;
        };
        for e in cycle {
            self.in_cycle.insert(e.index());
        }
        true
    }

    /// Marks e0's cycle, its cut, and the fix edges: the cycle ∩ cut edges
    /// other than `e0` itself, exactly those whose recoloring restores the
    /// invariant while keeping `e0` at its new color.
    pub fn mark_cycle_fixes(&mut self, graph: &BiGraph, e0: EdgeIndex) -> bool {
        let bound = edge_bound(graph);
        Self::reset(&mut self.in_cycle, bound);
        Self::reset(&mut self.in_cut, bound);
        Self::reset(&mut self.is_fix, bound);

        let Some(cycle) = compute_path(graph, e0, true) else {
            return false;
        };
        for e in &cycle {
            self.in_cycle.insert(e.index());
        }

        let Some(cut) = compute_cut(graph, e0, true) else {
            return false;
        };
        for e in cut {
            self.in_cut.insert(e.index());
            if e != e0 && self.in_cycle.contains(e.index()) {
                self.is_fix.insert(e.index());
            }
        }

        true
    }

    /// Runs the unique-exchange test for every edge into the unique flag
    /// set, then clears the transient cycle/cut/fix flags.
    pub fn tag_unique_exchanges(&mut self, graph: &BiGraph) {
        let bound = edge_bound(graph);
        Self::reset(&mut self.unique, bound);
        for e in graph.edge_indices() {
            if is_unique_exchange(graph, e) {
                self.unique.insert(e.index());
            }
        }
        Self::reset(&mut self.in_cycle, bound);
        Self::reset(&mut self.in_cut, bound);
        Self::reset(&mut self.is_fix, bound);
    }

    pub fn in_cycle(&self, e: EdgeIndex) -> bool {
        self.in_cycle.contains(e.index())
    }

    pub fn in_cut(&self, e: EdgeIndex) -> bool {
        self.in_cut.contains(e.index())
    }

    pub fn is_fix(&self, e: EdgeIndex) -> bool {
        self.is_fix.contains(e.index())
    }

    pub fn is_unique(&self, e: EdgeIndex) -> bool {
        self.unique.contains(e.index())
    }
}
