//! Core graph data structures.

use gk_core::Vertex;

use crate::builder::GraphBuilder;
use crate::error::GraphResult;

/// Whether `push_back(u, v)` also stores the mirror edge `v -> u`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Directedness {
    Directed,
    Undirected,
}

/// A stored edge: target vertex plus its property record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<P> {
    pub target: Vertex,
    pub props: P,
}

/// Address of one stored edge: `slot` indexes `neighbors(vertex)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeHandle {
    pub vertex: Vertex,
    pub slot: usize,
}

/// Read-only graph capability consumed by traversal ranges.
pub trait GraphView {
    type Props;

    /// Number of vertices.
    fn size(&self) -> usize;

    /// Out-edges of `v`, sorted by target. Empty if `v` is out of range.
    fn neighbors(&self, v: Vertex) -> &[Edge<Self::Props>];

    fn directedness(&self) -> Directedness;
}

/// The graph: an immutable, vertex-indexed adjacency structure.
///
/// Vertex `v`'s edges are in `edges[offsets[v]..offsets[v + 1]]`, sorted by
/// target. Undirected graphs hold every non-loop edge twice, once per endpoint.
#[derive(Debug, Clone)]
pub struct SparseGraph<P> {
    pub(crate) directedness: Directedness,

    /// Length `N + 1`, monotone, last entry equals `edges.len()`.
    pub(crate) offsets: Vec<usize>,

    pub(crate) edges: Vec<Edge<P>>,
}

impl<P: Clone> SparseGraph<P> {
    /// Run the whole open / push_back / close / build protocol over `triples`.
    pub fn from_edges<I>(num_vertices: usize, directedness: Directedness, triples: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (Vertex, Vertex, P)>,
    {
        let mut builder = GraphBuilder::new(num_vertices, directedness);
        builder.open()?;
        for (u, v, props) in triples {
            builder.push_back(u, v, props)?;
        }
        builder.close()?;
        builder.build()
    }
}

impl<P> SparseGraph<P> {
    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Number of stored edges (mirrored edges count twice).
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Out-edges of `v`, sorted by target.
    pub fn neighbors(&self, v: Vertex) -> &[Edge<P>] {
        if v >= self.size() {
            return &[];
        }
        &self.edges[self.offsets[v]..self.offsets[v + 1]]
    }

    /// Out-degree of `v` (0 if out of range).
    pub fn degree(&self, v: Vertex) -> usize {
        self.neighbors(v).len()
    }

    /// Look up a stored edge.
    pub fn edge(&self, handle: EdgeHandle) -> Option<&Edge<P>> {
        self.neighbors(handle.vertex).get(handle.slot)
    }

    /// First stored edge `u -> v`, if any.
    pub fn find_edge(&self, u: Vertex, v: Vertex) -> Option<EdgeHandle> {
        let list = self.neighbors(u);
        let slot = list.partition_point(|e| e.target < v);
        match list.get(slot) {
            Some(e) if e.target == v => Some(EdgeHandle { vertex: u, slot }),
            _ => None,
        }
    }

    /// Mutable access to one edge's properties.
    ///
    /// The adjacency shape never changes after build; only property values
    /// (capacity/flow during max-flow) are updated in place.
    pub fn props_mut(&mut self, handle: EdgeHandle) -> Option<&mut P> {
        if handle.vertex >= self.size() {
            return None;
        }
        let start = self.offsets[handle.vertex];
        let end = self.offsets[handle.vertex + 1];
        if handle.slot >= end - start {
            return None;
        }
        Some(&mut self.edges[start + handle.slot].props)
    }
}

impl<P> GraphView for SparseGraph<P> {
    type Props = P;

    fn size(&self) -> usize {
        SparseGraph::size(self)
    }

    fn neighbors(&self, v: Vertex) -> &[Edge<P>] {
        SparseGraph::neighbors(self, v)
    }

    fn directedness(&self) -> Directedness {
        self.directedness
    }
}
