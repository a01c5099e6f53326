//! DOT rendering of a colored graph, for eyeballing decompositions.

use dot::{Edges, GraphWalk, Labeller, Nodes};
use hashbrown::HashMap;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::types::{BiGraph, EdgeColor};

type Node = usize;

#[derive(Debug, Clone)]
struct Edge {
    id: usize,
    source: Node,
    target: Node,
    color: EdgeColor,
}

struct DotGraph {
    nodes: Vec<Node>,
    labels: HashMap<Node, u32>,
    edges: Vec<Edge>,
}

impl<'a> Labeller<'a, Node, Edge> for DotGraph {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("G").unwrap()
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&self, n: &Node) -> dot::LabelText<'a> {
        dot::LabelText::label(format!("{}", self.labels[n]))
    }

    fn edge_label(&self, e: &Edge) -> dot::LabelText<'a> {
        dot::LabelText::label(format!("e{} {}", e.id, e.color))
    }
}

impl<'a> GraphWalk<'a, Node, Edge> for DotGraph {
    fn nodes(&self) -> Nodes<'_, Node> {
        self.nodes.iter().cloned().collect()
    }

    fn edges(&self) -> Edges<'_, Edge> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &Edge) -> Node {
        e.source
    }

    fn target(&self, e: &Edge) -> Node {
        e.target
    }
}

/// Returns the graph in DOT format, every edge labeled with its id and
/// tree color.
pub fn draw_decomposition(graph: &BiGraph) -> String {
    let dot_graph = DotGraph {
        nodes: graph.node_indices().map(|v| v.index()).collect(),
        labels: graph.node_indices().map(|v| (v.index(), graph[v])).collect(),
        edges: graph
            .edge_references()
            .map(|e| Edge {
                id: e.id().index(),
                source: e.source().index(),
                target: e.target().index(),
                color: *e.weight(),
            })
            .collect(),
    };

    let mut buffer = std::io::Cursor::new(Vec::new());
    dot::render(&dot_graph, &mut buffer).expect("rendering into memory should not fail");
    String::from_utf8(buffer.into_inner()).expect("DOT output should be utf8")
}

/// Writes the graph to a file in DOT format.
pub fn to_dot_file(graph: &BiGraph, path: &str) {
    to_file(&draw_decomposition(graph), path);
}

/// Writes a string to a file.
pub fn to_file(content: &str, path: &str) {
    std::fs::write(path, content).expect("Rust should write to file");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose::decompose;
    use crate::types::from_edge_list;

    #[test]
    fn test_draw_decomposition_lists_every_edge() {
        let mut graph = from_edge_list(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        assert!(decompose(&mut graph));

        let rendered = draw_decomposition(&graph);
        assert!(rendered.contains("digraph G"));
        for e in graph.edge_indices() {
            assert!(rendered.contains(&format!("e{} {}", e.index(), graph[e])));
        }
        assert!(!rendered.contains("Black"));
    }

    #[test]
    fn test_to_dot_file_round_trip() {
        let graph = from_edge_list(2, &[(0, 1), (0, 1)]);
        let path = std::env::temp_dir().join("bispanning_dot_test.dot");
        let path = path.to_str().unwrap();

        to_dot_file(&graph, path);
        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written, draw_decomposition(&graph));
        let _ = std::fs::remove_file(path);
    }
}
