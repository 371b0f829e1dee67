//! Kruskal spanning forests.

use std::cmp::Ordering;

use gk_core::{Vertex, cmp_scalar};
use gk_graph::{Directedness, EdgeWeight, GraphView};
use gk_ranges::SpmvRange;
use tracing::debug;

use crate::disjoint_set::DisjointSet;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanningEdge<W> {
    pub source: Vertex,
    pub target: Vertex,
    pub weight: W,
}

/// Minimum spanning forest: candidates in ascending weight order.
pub fn minimum_spanning_tree<G, W>(graph: &G) -> Vec<SpanningEdge<W>>
where
    G: GraphView,
    G::Props: EdgeWeight<Weight = W>,
    W: gk_core::Scalar,
{
    spanning_tree_by(graph, |a, b| cmp_scalar(&a.weight, &b.weight))
}

/// Spanning forest keeping candidates in the order given by `compare`.
///
/// An edge is kept iff its endpoints were still in different components,
/// so the result has `N - components` edges and no cycle. Edges are treated
/// as undirected; an undirected graph contributes each edge once.
pub fn spanning_tree_by<G, W, F>(graph: &G, mut compare: F) -> Vec<SpanningEdge<W>>
where
    G: GraphView,
    G::Props: EdgeWeight<Weight = W>,
    W: gk_core::Scalar,
    F: FnMut(&SpanningEdge<W>, &SpanningEdge<W>) -> Ordering,
{
    let undirected = graph.directedness() == Directedness::Undirected;
    let mut candidates: Vec<SpanningEdge<W>> = SpmvRange::new(graph)
        .filter(|&(u, v, _)| u != v && (!undirected || u < v))
        .map(|(source, target, weight)| SpanningEdge {
            source,
            target,
            weight,
        })
        .collect();
    candidates.sort_by(&mut compare);

    let mut components = DisjointSet::new(graph.size());
    let tree: Vec<_> = candidates
        .into_iter()
        .filter(|e| components.union(e.source, e.target))
        .collect();

    debug!(
        vertices = graph.size(),
        tree_edges = tree.len(),
        components = components.num_sets(),
        "spanning forest built"
    );
    tree
}

/// Sum of the weights of `edges`.
pub fn total_weight<W: gk_core::Scalar>(edges: &[SpanningEdge<W>]) -> W {
    edges.iter().fold(W::zero(), |acc, e| acc + e.weight)
}
