//! Build-time validation of the flattened adjacency.

use crate::error::{GraphError, GraphResult};
use crate::graph::Edge;

/// Validate offsets and targets: offsets monotone and ending at the edge
/// count, every target within `[0, N)`, every list sorted by target.
pub(crate) fn validate_adjacency<P>(offsets: &[usize], edges: &[Edge<P>]) -> GraphResult<()> {
    let Some((&first, _)) = offsets.split_first() else {
        return Err(GraphError::InconsistentAdjacency {
            vertex: 0,
            what: "offsets must have length N + 1",
        });
    };
    if first != 0 {
        return Err(GraphError::InconsistentAdjacency {
            vertex: 0,
            what: "offsets must start at zero",
        });
    }
    if offsets.last() != Some(&edges.len()) {
        return Err(GraphError::InconsistentAdjacency {
            vertex: offsets.len() - 1,
            what: "last offset must equal the edge count",
        });
    }

    let n = offsets.len() - 1;
    for (vertex, w) in offsets.windows(2).enumerate() {
        if w[0] > w[1] {
            return Err(GraphError::InconsistentAdjacency {
                vertex,
                what: "offsets must be monotone",
            });
        }

        let list = &edges[w[0]..w[1]];
        if let Some(e) = list.iter().find(|e| e.target >= n) {
            return Err(GraphError::VertexOutOfRange {
                vertex: e.target,
                len: n,
            });
        }
        if list.windows(2).any(|pair| pair[0].target > pair[1].target) {
            return Err(GraphError::InconsistentAdjacency {
                vertex,
                what: "adjacency list is not sorted by target",
            });
        }
    }

    Ok(())
}
