//! Sparse-matrix view of a graph.

use gk_core::Vertex;
use gk_graph::{EdgeWeight, GraphView};

use crate::TraversalRange;
use crate::cursor::EdgeCursor;

/// Every `(row, col, value)` entry of the graph read as a sparse matrix:
/// row = source, col = target, value = edge weight.
///
/// Callers fold the entries into dense vectors indexed by row or column.
pub struct SpmvRange<'a, G: GraphView> {
    graph: &'a G,
    cursor: EdgeCursor,
}

impl<'a, G> SpmvRange<'a, G>
where
    G: GraphView,
    G::Props: EdgeWeight,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            cursor: EdgeCursor::start(graph),
        }
    }
}

impl<G: GraphView> Clone for SpmvRange<'_, G> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            cursor: self.cursor,
        }
    }
}

impl<G> Iterator for SpmvRange<'_, G>
where
    G: GraphView,
    G::Props: EdgeWeight,
{
    type Item = (Vertex, Vertex, <G::Props as EdgeWeight>::Weight);

    fn next(&mut self) -> Option<Self::Item> {
        let (row, edge) = self.cursor.step(self.graph)?;
        Some((row, edge.target, edge.props.weight()))
    }
}

impl<G> TraversalRange for SpmvRange<'_, G>
where
    G: GraphView,
    G::Props: EdgeWeight,
{
    fn is_end(&self) -> bool {
        self.cursor.is_end(self.graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gk_graph::{Directedness, SparseGraph};

    #[test]
    fn matrix_vector_product() {
        // [[0, 2, 0],
        //  [0, 0, 3],
        //  [1, 0, 0]]
        let g = SparseGraph::from_edges(
            3,
            Directedness::Directed,
            [(0, 1, 2.0), (1, 2, 3.0), (2, 0, 1.0)],
        )
        .unwrap();
        let x = [1.0, 10.0, 100.0];
        let mut y = [0.0; 3];
        for (row, col, value) in SpmvRange::new(&g) {
            y[row] += value * x[col];
        }
        assert_eq!(y, [20.0, 300.0, 1.0]);
    }

    #[test]
    fn unweighted_entries_are_one() {
        let g = SparseGraph::from_edges(2, Directedness::Undirected, [(0, 1, ())]).unwrap();
        let entries: Vec<_> = SpmvRange::new(&g).collect();
        assert_eq!(entries, vec![(0, 1, 1), (1, 0, 1)]);
    }
}
