//! Dense vertex indices.

use crate::{GkError, GkResult};

/// Dense vertex index in `[0, N)`.
pub type Vertex = usize;

/// Check that `v` addresses one of `len` vertices.
pub fn check_vertex(v: Vertex, len: usize, what: &'static str) -> GkResult<Vertex> {
    if v < len {
        Ok(v)
    } else {
        Err(GkError::IndexOob {
            what,
            index: v,
            len,
        })
    }
}
