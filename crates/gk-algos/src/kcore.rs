//! Single-pass, degree-based k-core reduction.

use std::collections::BTreeSet;

use gk_core::Vertex;
use gk_graph::GraphView;
use gk_ranges::{DfsEdge, DfsEdgeRange};
use tracing::debug;

/// Edges to drop and the number of vertices that keep at least one edge
/// (or never had one).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KCoreResult {
    /// Undirected pairs normalised to `(min, max)`.
    pub removed: BTreeSet<(Vertex, Vertex)>,
    pub remaining_vertices: usize,
}

impl KCoreResult {
    pub fn is_removed(&self, u: Vertex, v: Vertex) -> bool {
        self.removed.contains(&(u.min(v), u.max(v)))
    }
}

/// Walk every edge once in depth-first order; an edge whose examining
/// endpoint currently has degree below `k` is removed and both endpoint
/// degrees drop by one.
///
/// This is a one-pass reduction: it returns the removal set only and does
/// not build a compacted graph. Filter the original edges against
/// [`KCoreResult::removed`] when one is needed.
///
/// Degrees are only compared when an edge is examined, so an edge whose
/// endpoints both still have degree `>= k` at that moment survives even if
/// later removals drop them below `k`. The result can therefore keep edges
/// that a repeated peel would strip; `k` above the maximum core number
/// removes every edge only when it also exceeds every vertex degree.
pub fn k_core<G: GraphView>(graph: &G, k: usize) -> KCoreResult {
    let n = graph.size();
    let mut degree: Vec<usize> = (0..n).map(|v| graph.neighbors(v).len()).collect();
    let mut removed = BTreeSet::new();
    let mut remaining_vertices = n;

    for DfsEdge { source, target, .. } in DfsEdgeRange::forest(graph) {
        let pair = (source.min(target), source.max(target));
        if degree[source] >= k || removed.contains(&pair) {
            continue;
        }
        removed.insert(pair);
        for v in [pair.0, pair.1] {
            if degree[v] > 0 {
                degree[v] -= 1;
                if degree[v] == 0 {
                    remaining_vertices -= 1;
                }
            }
        }
    }

    debug!(k, removed = removed.len(), remaining_vertices, "k-core reduction");
    KCoreResult {
        removed,
        remaining_vertices,
    }
}
