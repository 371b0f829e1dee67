//! gk-graph: sparse graph layer for the graph kernel.
//!
//! Provides:
//! - An immutable, vertex-indexed adjacency structure (`SparseGraph`)
//! - A two-phase builder (`open` / `push_back` / `close` / `build`)
//! - Named edge property records (`EdgeWeight`, `FlowEdge`)
//!
//! # Example
//!
//! ```
//! use gk_graph::GraphBuilder;
//!
//! let mut builder = GraphBuilder::undirected(3);
//! builder.open().unwrap();
//! builder.push_back(0, 1, 4.0).unwrap();
//! builder.push_back(1, 2, 1.5).unwrap();
//! builder.close().unwrap();
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.size(), 3);
//! assert_eq!(graph.num_edges(), 4);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod props;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::{BuildState, GraphError, GraphResult};
pub use graph::{Directedness, Edge, EdgeHandle, GraphView, SparseGraph};
pub use props::{EdgeWeight, FlowEdge};
