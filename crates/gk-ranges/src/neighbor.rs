//! Plain edge enumeration.

use gk_core::Vertex;
use gk_graph::GraphView;

use crate::TraversalRange;
use crate::cursor::EdgeCursor;

/// Every stored `(source, target)` pair exactly once, vertex-major, in
/// adjacency order.
pub struct NeighborRange<'a, G: GraphView> {
    graph: &'a G,
    cursor: EdgeCursor,
}

impl<'a, G: GraphView> NeighborRange<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            cursor: EdgeCursor::start(graph),
        }
    }
}

impl<G: GraphView> Clone for NeighborRange<'_, G> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            cursor: self.cursor,
        }
    }
}

impl<G: GraphView> Iterator for NeighborRange<'_, G> {
    type Item = (Vertex, Vertex);

    fn next(&mut self) -> Option<Self::Item> {
        let (source, edge) = self.cursor.step(self.graph)?;
        Some((source, edge.target))
    }
}

impl<G: GraphView> TraversalRange for NeighborRange<'_, G> {
    fn is_end(&self) -> bool {
        self.cursor.is_end(self.graph)
    }
}
