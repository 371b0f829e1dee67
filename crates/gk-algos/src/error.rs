//! Error types for algorithm entry points.

use gk_core::{GkError, Vertex, check_vertex};
use gk_graph::GraphError;
use thiserror::Error;

/// Errors reported before an algorithm starts traversing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgoError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Graph has no vertices")]
    EmptyGraph,

    #[error(transparent)]
    Core(#[from] GkError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type AlgoResult<T> = Result<T, AlgoError>;

/// Reject empty graphs and out-of-range endpoints.
pub(crate) fn check_endpoint(size: usize, v: Vertex, what: &'static str) -> AlgoResult<()> {
    if size == 0 {
        return Err(AlgoError::EmptyGraph);
    }
    check_vertex(v, size, what)?;
    Ok(())
}
