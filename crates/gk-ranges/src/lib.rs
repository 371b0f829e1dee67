//! gk-ranges: lazy traversal ranges over a [`GraphView`](gk_graph::GraphView).
//!
//! Every analytics routine is a fold over one of these ranges:
//!
//! | Range | Record | Order |
//! |---|---|---|
//! | [`NeighborRange`] | `(source, target)` | vertex-major, adjacency order |
//! | [`SpmvRange`] | `(row, col, value)` | vertex-major, adjacency order |
//! | [`BfsEdgeRange`] | `(parent, child, weight)` | level order from a source |
//! | [`PriorityBfsRange`] | `(u, v, weight)` | ascending frontier key |
//! | [`DfsEdgeRange`] | [`DfsEdge`] | depth-first examination order |
//! | [`FilteredBfsEdgeRange`] | [`TreeEdge`] | level order, pruned, sink-terminated |
//!
//! Ranges are pull-based: no work happens between calls to `next`, and
//! dropping a range cancels it. They only read the graph, so independent
//! ranges over the same graph can be driven from different threads.

mod bfs;
mod cursor;
mod dfs;
mod filtered;
mod neighbor;
mod spmv;

pub use bfs::{BfsEdgeRange, PriorityBfsRange};
pub use dfs::{DfsEdge, DfsEdgeRange, EdgeKind};
pub use filtered::{FilteredBfsEdgeRange, TreeEdge};
pub use neighbor::NeighborRange;
pub use spmv::SpmvRange;

/// A traversal range: an iterator that can also report exhaustion without
/// consuming a record.
pub trait TraversalRange: Iterator {
    /// True when no further record will be produced.
    fn is_end(&self) -> bool;
}
