//! Graph-specific error types.

use core::fmt;

use gk_core::Vertex;
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Lifecycle stage of a [`GraphBuilder`](crate::GraphBuilder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildState {
    /// Constructed, `open()` not called yet.
    Idle,
    /// Accepting `push_back`.
    Open,
    /// Adjacency lists sorted; only `build()` remains.
    Closed,
}

impl fmt::Display for BuildState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuildState::Idle => "idle",
            BuildState::Open => "open",
            BuildState::Closed => "closed",
        };
        f.write_str(name)
    }
}

/// Graph construction and validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint lies outside `[0, N)`.
    #[error("Vertex {vertex} is out of range for a graph of {len} vertices")]
    VertexOutOfRange { vertex: Vertex, len: usize },

    /// A builder operation was called in the wrong lifecycle stage.
    #[error("Cannot {op} a builder that is {state}")]
    Lifecycle { op: &'static str, state: BuildState },

    /// Flattened adjacency does not describe a well-formed graph.
    #[error("Inconsistent adjacency at vertex {vertex}: {what}")]
    InconsistentAdjacency { vertex: Vertex, what: &'static str },
}
