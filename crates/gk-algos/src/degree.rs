//! In/out degree as folds over the sparse-matrix view.

use gk_graph::{EdgeWeight, GraphView};
use gk_ranges::SpmvRange;

/// Out-degree per vertex: stored entries counted by row.
pub fn out_degree<G>(graph: &G) -> Vec<usize>
where
    G: GraphView,
    G::Props: EdgeWeight,
{
    let mut degree = vec![0; graph.size()];
    for (row, _, _) in SpmvRange::new(graph) {
        degree[row] += 1;
    }
    degree
}

/// In-degree per vertex: stored entries counted by column.
pub fn in_degree<G>(graph: &G) -> Vec<usize>
where
    G: GraphView,
    G::Props: EdgeWeight,
{
    let mut degree = vec![0; graph.size()];
    for (_, col, _) in SpmvRange::new(graph) {
        degree[col] += 1;
    }
    degree
}

#[cfg(test)]
mod tests {
    use super::*;
    use gk_graph::{Directedness, SparseGraph};

    #[test]
    fn directed_in_and_out_differ() {
        let g = SparseGraph::from_edges(
            4,
            Directedness::Directed,
            [(0, 1, ()), (0, 2, ()), (0, 3, ()), (2, 1, ())],
        )
        .unwrap();
        assert_eq!(out_degree(&g), vec![3, 0, 1, 0]);
        assert_eq!(in_degree(&g), vec![0, 2, 1, 1]);
    }

    #[test]
    fn undirected_in_equals_out() {
        let g = SparseGraph::from_edges(
            4,
            Directedness::Undirected,
            [(0, 1, 2.0), (1, 2, 2.0), (1, 3, 2.0)],
        )
        .unwrap();
        assert_eq!(out_degree(&g), vec![1, 3, 1, 1]);
        assert_eq!(in_degree(&g), out_degree(&g));
    }

    #[test]
    fn empty_graph_has_no_degrees() {
        let g = SparseGraph::<()>::from_edges(0, Directedness::Directed, []).unwrap();
        assert!(out_degree(&g).is_empty());
    }
}
