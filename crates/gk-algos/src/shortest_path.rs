//! Single-source shortest paths.

use gk_core::{Scalar, Vertex};
use gk_graph::{EdgeWeight, GraphView};
use gk_ranges::{BfsEdgeRange, PriorityBfsRange};
use tracing::debug;

use crate::error::{AlgoResult, check_endpoint};

/// Dijkstra distances from `source`.
///
/// Unreachable vertices keep the sentinel `W::max_value()`. A path whose
/// length would reach past the sentinel is treated as unreachable. Weights
/// must be non-negative; negative weights give unspecified distances.
pub fn dijkstra<G, W>(graph: &G, source: Vertex) -> AlgoResult<Vec<W>>
where
    G: GraphView,
    G::Props: EdgeWeight<Weight = W>,
    W: Scalar,
{
    check_endpoint(graph.size(), source, "source")?;

    let mut distance = vec![W::max_value(); graph.size()];
    distance[source] = W::zero();

    let mut range = PriorityBfsRange::new(graph, source, W::zero());
    let mut relaxed = 0_usize;
    while let Some((u, v, w)) = range.next() {
        if w > W::max_value() - distance[u] {
            continue;
        }
        let candidate = distance[u] + w;
        if candidate < distance[v] {
            distance[v] = candidate;
            range.push(v, candidate);
            relaxed += 1;
        }
    }

    debug!(source, vertices = graph.size(), relaxed, "dijkstra finished");
    Ok(distance)
}

/// Hop count from `source` along a level-order search; `None` when unreachable.
pub fn hop_distances<G>(graph: &G, source: Vertex) -> AlgoResult<Vec<Option<usize>>>
where
    G: GraphView,
    G::Props: EdgeWeight,
{
    check_endpoint(graph.size(), source, "source")?;

    let mut hops = vec![None; graph.size()];
    hops[source] = Some(0);
    for (parent, child, _) in BfsEdgeRange::new(graph, source) {
        hops[child] = hops[parent].map(|h: usize| h + 1);
    }
    Ok(hops)
}

/// Is `d` the unreachable sentinel?
pub fn is_unreachable<W: Scalar>(d: W) -> bool {
    d == W::max_value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AlgoError;
    use gk_graph::{Directedness, SparseGraph};

    fn sample() -> SparseGraph<u32> {
        SparseGraph::from_edges(
            6,
            Directedness::Directed,
            [
                (0, 1, 7),
                (0, 2, 9),
                (0, 5, 14),
                (1, 2, 10),
                (1, 3, 15),
                (2, 3, 11),
                (2, 5, 2),
                (3, 4, 6),
                (5, 4, 9),
            ],
        )
        .unwrap()
    }

    #[test]
    fn textbook_distances() {
        let d = dijkstra(&sample(), 0).unwrap();
        assert_eq!(d, vec![0, 7, 9, 20, 20, 11]);
    }

    #[test]
    fn unreachable_keeps_sentinel() {
        let d = dijkstra(&sample(), 4).unwrap();
        assert_eq!(d[4], 0);
        assert!(is_unreachable(d[0]));
        assert!(is_unreachable(d[3]));
    }

    #[test]
    fn sums_past_the_sentinel_stay_unreachable() {
        let g = SparseGraph::from_edges(
            4,
            Directedness::Directed,
            [(0, 1, u32::MAX - 1), (1, 2, 5), (0, 3, 3), (3, 2, 4)],
        )
        .unwrap();
        let d = dijkstra(&g, 0).unwrap();
        assert_eq!(d, vec![0, u32::MAX - 1, 7, 3]);

        let chain = SparseGraph::from_edges(3, Directedness::Directed, [(0, 1, u32::MAX - 1), (1, 2, 5)])
            .unwrap();
        let d = dijkstra(&chain, 0).unwrap();
        assert_eq!(d[1], u32::MAX - 1);
        assert!(is_unreachable(d[2]));
    }

    #[test]
    fn float_weights() {
        let g = SparseGraph::from_edges(
            3,
            Directedness::Undirected,
            [(0, 1, 0.5), (1, 2, 0.25), (0, 2, 1.0)],
        )
        .unwrap();
        assert_eq!(dijkstra(&g, 0).unwrap(), vec![0.0, 0.5, 0.75]);
    }

    #[test]
    fn rejects_bad_source() {
        assert!(matches!(dijkstra(&sample(), 6), Err(AlgoError::Core(_))));
        let empty = SparseGraph::<u32>::from_edges(0, Directedness::Directed, []).unwrap();
        assert_eq!(dijkstra(&empty, 0), Err(AlgoError::EmptyGraph));
    }

    #[test]
    fn hop_distances_ignore_weights() {
        let hops = hop_distances(&sample(), 0).unwrap();
        assert_eq!(
            hops,
            vec![Some(0), Some(1), Some(1), Some(2), Some(2), Some(1)]
        );
    }
}
