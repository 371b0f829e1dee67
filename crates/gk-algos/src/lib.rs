//! Graph analytics built as folds over traversal ranges.
//!
//! Each routine picks one range from `gk-ranges` and folds it into a result:
//!
//! - shortest paths: priority-ordered BFS (`dijkstra`), level-order BFS (`hop_distances`)
//! - triangle counting: edgewise, pruned, naive and parallel set intersection
//! - degree: row/column folds of the sparse-matrix view
//! - PageRank: power iteration over a damping-scaled transition structure
//! - spanning forest: Kruskal over sorted matrix entries + `DisjointSet`
//! - max flow: augmenting paths found by predicate-filtered BFS
//! - k-core: one depth-first pass producing a removal set
//!
//! Algorithms are single-threaded (except `triangle_count_parallel`) and own
//! all of their scratch state.

pub mod degree;
pub mod disjoint_set;
pub mod error;
pub mod kcore;
pub mod max_flow;
pub mod pagerank;
pub mod shortest_path;
pub mod spanning_tree;
pub mod triangles;

pub use degree::{in_degree, out_degree};
pub use disjoint_set::DisjointSet;
pub use error::{AlgoError, AlgoResult};
pub use kcore::{KCoreResult, k_core};
pub use max_flow::{MaxFlowConfig, flow_network, max_flow};
pub use pagerank::{PageRankConfig, PageRankResult, pagerank};
pub use shortest_path::{dijkstra, hop_distances, is_unreachable};
pub use spanning_tree::{SpanningEdge, minimum_spanning_tree, spanning_tree_by, total_weight};
pub use triangles::{
    triangle_count_edgewise, triangle_count_naive, triangle_count_parallel, triangle_count_pruned,
};
