//! Cross-algorithm properties checked on generated graphs.

use std::collections::BTreeSet;

use gk_algos::{
    DisjointSet, MaxFlowConfig, dijkstra, flow_network, is_unreachable, k_core, max_flow,
    minimum_spanning_tree, triangle_count_edgewise, triangle_count_naive, triangle_count_parallel,
    triangle_count_pruned,
};
use gk_graph::{Directedness, SparseGraph};
use gk_ranges::NeighborRange;
use proptest::prelude::*;

/// Simple undirected edge set: no loops, no duplicate pairs.
fn arb_simple_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2_usize..16).prop_flat_map(|n| {
        let pairs = prop::collection::btree_set((0..n, 0..n), 0..60).prop_map(|set| {
            set.into_iter()
                .filter(|(u, v)| u < v)
                .collect::<Vec<_>>()
        });
        (Just(n), pairs)
    })
}

fn arb_weighted() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
    (1_usize..14).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, 0_u32..50), 0..50),
        )
    })
}

fn components(n: usize, edges: &[(usize, usize)]) -> usize {
    let mut ds = DisjointSet::new(n);
    for &(u, v) in edges {
        ds.union(u, v);
    }
    ds.num_sets()
}

proptest! {
    #[test]
    fn neighbor_range_enumerates_pushed_edges((n, edges) in arb_weighted()) {
        let g = SparseGraph::from_edges(n, Directedness::Directed, edges.clone()).unwrap();
        let mut seen: Vec<_> = NeighborRange::new(&g).collect();
        prop_assert!(seen.windows(2).all(|w| w[0].0 <= w[1].0));
        seen.sort_unstable();
        let mut pushed: Vec<_> = edges.iter().map(|&(u, v, _)| (u, v)).collect();
        pushed.sort_unstable();
        prop_assert_eq!(seen, pushed);
    }

    #[test]
    fn undirected_neighbor_range_doubles_edges((n, edges) in arb_simple_graph()) {
        let g = SparseGraph::from_edges(n, Directedness::Undirected, edges.iter().map(|&(u, v)| (u, v, ()))).unwrap();
        let seen: BTreeSet<_> = NeighborRange::new(&g).collect();
        prop_assert_eq!(seen.len(), 2 * edges.len());
        for &(u, v) in &edges {
            prop_assert!(seen.contains(&(u, v)) && seen.contains(&(v, u)));
        }
    }

    #[test]
    fn triangle_variants_agree((n, edges) in arb_simple_graph(), workers in 1_usize..6) {
        let g = SparseGraph::from_edges(n, Directedness::Undirected, edges.iter().map(|&(u, v)| (u, v, ()))).unwrap();
        let edgewise = triangle_count_edgewise(&g).unwrap();
        prop_assert_eq!(triangle_count_pruned(&g).unwrap(), edgewise);
        prop_assert_eq!(triangle_count_naive(&g).unwrap(), edgewise);
        prop_assert_eq!(triangle_count_parallel(&g, workers).unwrap(), edgewise);
    }

    #[test]
    fn dijkstra_satisfies_relaxation((n, edges) in arb_weighted(), source_seed in any::<usize>()) {
        let g = SparseGraph::from_edges(n, Directedness::Directed, edges.clone()).unwrap();
        let source = source_seed % n;
        let d = dijkstra(&g, source).unwrap();
        prop_assert_eq!(d[source], 0);
        for &(u, v, w) in &edges {
            if !is_unreachable(d[u]) {
                prop_assert!(d[v] <= d[u] + w);
            }
        }
    }

    #[test]
    fn kruskal_is_a_spanning_forest((n, edges) in arb_simple_graph(), weights in prop::collection::vec(1_u32..100, 60)) {
        let weighted: Vec<_> = edges.iter().enumerate().map(|(i, &(u, v))| (u, v, weights[i])).collect();
        let g = SparseGraph::from_edges(n, Directedness::Undirected, weighted).unwrap();
        let tree = minimum_spanning_tree(&g);
        prop_assert_eq!(tree.len(), n - components(n, &edges));

        let mut ds = DisjointSet::new(n);
        for e in &tree {
            prop_assert!(ds.union(e.source, e.target), "cycle through {:?}", e);
        }
    }

    #[test]
    fn max_flow_respects_capacity((n, edges) in arb_weighted()) {
        prop_assume!(n >= 2);
        let mut g = flow_network(n, edges.iter().map(|&(u, v, c)| (u, v, i64::from(c)))).unwrap();
        let flow = max_flow(&mut g, 0, n - 1, &MaxFlowConfig::default()).unwrap();
        prop_assert!(flow >= 0);
        let cut: i64 = edges.iter().filter(|&&(u, _, _)| u == 0).map(|&(_, _, c)| i64::from(c)).sum();
        prop_assert!(flow <= cut);
        for v in 0..n {
            for e in g.neighbors(v) {
                prop_assert!(e.props.flow <= e.props.capacity);
            }
        }
    }

    #[test]
    fn k_core_extremes((n, edges) in arb_simple_graph()) {
        let g = SparseGraph::from_edges(n, Directedness::Undirected, edges.iter().map(|&(u, v)| (u, v, ()))).unwrap();
        let none = k_core(&g, 0);
        prop_assert!(none.removed.is_empty());
        prop_assert_eq!(none.remaining_vertices, n);

        let all = k_core(&g, n);
        prop_assert_eq!(all.removed.len(), edges.len());
        let isolated = (0..n).filter(|&v| g.degree(v) == 0).count();
        prop_assert_eq!(all.remaining_vertices, isolated);
    }
}
