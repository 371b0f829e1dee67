//! Parsed file contents, ready for the builder.

use gk_core::{Real, Vertex};
use gk_graph::{Directedness, GraphResult, SparseGraph};

/// Edge triples read from a file, 0-based.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeList {
    pub num_vertices: usize,
    pub directedness: Directedness,
    pub edges: Vec<(Vertex, Vertex, Real)>,
    /// Flow source designated in the file, if any.
    pub source: Option<Vertex>,
    /// Flow sink designated in the file, if any.
    pub sink: Option<Vertex>,
}

impl EdgeList {
    pub(crate) fn new(num_vertices: usize, directedness: Directedness) -> Self {
        Self {
            num_vertices,
            directedness,
            edges: Vec::new(),
            source: None,
            sink: None,
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Push every triple through the builder with the file's weights.
    pub fn to_graph(&self) -> GraphResult<SparseGraph<Real>> {
        SparseGraph::from_edges(self.num_vertices, self.directedness, self.edges.iter().copied())
    }

    /// Same topology, weights dropped.
    pub fn to_unweighted(&self) -> GraphResult<SparseGraph<()>> {
        SparseGraph::from_edges(
            self.num_vertices,
            self.directedness,
            self.edges.iter().map(|&(u, v, _)| (u, v, ())),
        )
    }
}
