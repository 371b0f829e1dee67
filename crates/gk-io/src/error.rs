//! Reader error types.

use gk_graph::GraphError;
use thiserror::Error;

pub type ReadResult<T> = Result<T, ReadError>;

/// Anything that stops a file from becoming an edge list.
///
/// Readers fail on the first problem; no partial list is returned.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Banner, size line or problem line is missing or malformed.
    #[error("Bad header: {what}")]
    Header { what: String },

    #[error("Parse error on line {line}: {what}")]
    Parse { line: usize, what: String },

    #[error("Declared {expected} entries but found {found}")]
    CountMismatch { expected: usize, found: usize },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

impl ReadError {
    pub(crate) fn header(what: impl Into<String>) -> Self {
        Self::Header { what: what.into() }
    }

    pub(crate) fn parse(line: usize, what: impl Into<String>) -> Self {
        Self::Parse {
            line,
            what: what.into(),
        }
    }
}
