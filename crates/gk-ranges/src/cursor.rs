use gk_core::Vertex;
use gk_graph::{Edge, GraphView};

/// Position of an edgewise scan: `(vertex, slot within vertex's list)`.
///
/// Always settled on a valid edge or past the last vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EdgeCursor {
    vertex: Vertex,
    slot: usize,
}

impl EdgeCursor {
    pub(crate) fn start<G: GraphView>(graph: &G) -> Self {
        let mut cursor = Self { vertex: 0, slot: 0 };
        cursor.settle(graph);
        cursor
    }

    pub(crate) fn is_end<G: GraphView>(&self, graph: &G) -> bool {
        self.vertex >= graph.size()
    }

    /// Yield the current edge and step past it.
    pub(crate) fn step<'a, G: GraphView>(&mut self, graph: &'a G) -> Option<(Vertex, &'a Edge<G::Props>)> {
        let source = self.vertex;
        let edge = graph.neighbors(source).get(self.slot)?;
        self.slot += 1;
        self.settle(graph);
        Some((source, edge))
    }

    /// Skip vertices whose list is exhausted.
    fn settle<G: GraphView>(&mut self, graph: &G) {
        let n = graph.size();
        while self.vertex < n && self.slot >= graph.neighbors(self.vertex).len() {
            self.vertex += 1;
            self.slot = 0;
        }
    }
}
