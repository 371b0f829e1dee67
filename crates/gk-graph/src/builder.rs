//! Staged graph builder.

use gk_core::Vertex;

use crate::error::{BuildState, GraphError, GraphResult};
use crate::graph::{Directedness, Edge, SparseGraph};
use crate::validate;

/// Builder for constructing a graph in two phases.
///
/// `open()` starts accepting `push_back(u, v, props)` in any order;
/// `close()` sorts every adjacency list by target; `build()` then freezes the
/// lists into an immutable [`SparseGraph`]. Each call made out of order
/// returns [`GraphError::Lifecycle`].
#[derive(Debug)]
pub struct GraphBuilder<P> {
    directedness: Directedness,
    state: BuildState,
    adjacency: Vec<Vec<Edge<P>>>,
}

impl<P: Clone> GraphBuilder<P> {
    /// Create an idle builder for `num_vertices` vertices.
    pub fn new(num_vertices: usize, directedness: Directedness) -> Self {
        let mut adjacency = Vec::with_capacity(num_vertices);
        adjacency.resize_with(num_vertices, Vec::new);
        Self {
            directedness,
            state: BuildState::Idle,
            adjacency,
        }
    }

    pub fn directed(num_vertices: usize) -> Self {
        Self::new(num_vertices, Directedness::Directed)
    }

    pub fn undirected(num_vertices: usize) -> Self {
        Self::new(num_vertices, Directedness::Undirected)
    }

    /// Number of vertices the built graph will have.
    pub fn size(&self) -> usize {
        self.adjacency.len()
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    /// Start accepting edges.
    pub fn open(&mut self) -> GraphResult<()> {
        self.expect_state("open", BuildState::Idle)?;
        self.state = BuildState::Open;
        Ok(())
    }

    /// Append the edge `u -> v` (and `v -> u` for undirected builders).
    ///
    /// An undirected self-loop is stored once.
    pub fn push_back(&mut self, u: Vertex, v: Vertex, props: P) -> GraphResult<()> {
        self.expect_state("push_back", BuildState::Open)?;
        let len = self.adjacency.len();
        for vertex in [u, v] {
            if vertex >= len {
                return Err(GraphError::VertexOutOfRange { vertex, len });
            }
        }

        if self.directedness == Directedness::Undirected && u != v {
            self.adjacency[v].push(Edge {
                target: u,
                props: props.clone(),
            });
        }
        self.adjacency[u].push(Edge { target: v, props });
        Ok(())
    }

    /// Finish accepting edges and sort each adjacency list by target.
    ///
    /// The sort is stable, so parallel edges keep their push order.
    pub fn close(&mut self) -> GraphResult<()> {
        self.expect_state("close", BuildState::Open)?;
        for list in &mut self.adjacency {
            list.sort_by_key(|e| e.target);
        }
        self.state = BuildState::Closed;
        Ok(())
    }

    /// Consume a closed builder and return the immutable graph.
    pub fn build(self) -> GraphResult<SparseGraph<P>> {
        self.expect_state("build", BuildState::Closed)?;

        let (offsets, edges) = Self::flatten(self.adjacency);
        validate::validate_adjacency(&offsets, &edges)?;

        Ok(SparseGraph {
            directedness: self.directedness,
            offsets,
            edges,
        })
    }

    fn expect_state(&self, op: &'static str, expected: BuildState) -> GraphResult<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(GraphError::Lifecycle {
                op,
                state: self.state,
            })
        }
    }

    /// Build compact adjacency: offsets of length N + 1 and one flat edge list.
    fn flatten(adjacency: Vec<Vec<Edge<P>>>) -> (Vec<usize>, Vec<Edge<P>>) {
        let total: usize = adjacency.iter().map(Vec::len).sum();
        let mut offsets = Vec::with_capacity(adjacency.len() + 1);
        let mut edges = Vec::with_capacity(total);
        offsets.push(0);

        for list in adjacency {
            edges.extend(list);
            offsets.push(edges.len());
        }

        (offsets, edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_basic() {
        let mut builder = GraphBuilder::directed(3);
        assert_eq!(builder.state(), BuildState::Idle);
        builder.open().unwrap();
        builder.push_back(0, 1, 1.5).unwrap();
        builder.push_back(1, 2, 2.5).unwrap();
        builder.close().unwrap();
        let graph = builder.build().unwrap();

        assert_eq!(graph.size(), 3);
        assert_eq!(graph.num_edges(), 2);
        assert_eq!(graph.neighbors(0)[0].target, 1);
        assert_eq!(graph.neighbors(1)[0].props, 2.5);
        assert!(graph.neighbors(2).is_empty());
    }

    #[test]
    fn push_before_open_is_rejected() {
        let mut builder = GraphBuilder::directed(2);
        let err = builder.push_back(0, 1, ()).unwrap_err();
        assert_eq!(
            err,
            GraphError::Lifecycle {
                op: "push_back",
                state: BuildState::Idle
            }
        );
    }

    #[test]
    fn push_after_close_is_rejected() {
        let mut builder = GraphBuilder::directed(2);
        builder.open().unwrap();
        builder.close().unwrap();
        let err = builder.push_back(0, 1, ()).unwrap_err();
        assert_eq!(
            err,
            GraphError::Lifecycle {
                op: "push_back",
                state: BuildState::Closed
            }
        );
    }

    #[test]
    fn double_close_and_double_open_are_rejected() {
        let mut builder = GraphBuilder::<()>::undirected(2);
        builder.open().unwrap();
        assert!(builder.open().is_err());
        builder.close().unwrap();
        assert!(matches!(
            builder.close(),
            Err(GraphError::Lifecycle { op: "close", .. })
        ));
    }

    #[test]
    fn build_requires_close() {
        let mut builder = GraphBuilder::<()>::directed(1);
        builder.open().unwrap();
        assert!(matches!(
            builder.build(),
            Err(GraphError::Lifecycle {
                op: "build",
                state: BuildState::Open
            })
        ));
    }

    #[test]
    fn out_of_range_endpoint_is_rejected() {
        let mut builder = GraphBuilder::directed(3);
        builder.open().unwrap();
        let err = builder.push_back(1, 3, ()).unwrap_err();
        assert_eq!(err, GraphError::VertexOutOfRange { vertex: 3, len: 3 });
        // Nothing was stored for the source either.
        builder.close().unwrap();
        assert_eq!(builder.build().unwrap().num_edges(), 0);
    }

    #[test]
    fn undirected_self_loop_is_stored_once() {
        let mut builder = GraphBuilder::undirected(1);
        builder.open().unwrap();
        builder.push_back(0, 0, 3_u32).unwrap();
        builder.close().unwrap();
        let graph = builder.build().unwrap();
        assert_eq!(graph.num_edges(), 1);
    }

    #[test]
    fn close_keeps_parallel_edges_in_push_order() {
        let mut builder = GraphBuilder::directed(2);
        builder.open().unwrap();
        builder.push_back(0, 1, 'b').unwrap();
        builder.push_back(0, 0, 'x').unwrap();
        builder.push_back(0, 1, 'a').unwrap();
        builder.close().unwrap();
        let graph = builder.build().unwrap();
        let props: Vec<_> = graph.neighbors(0).iter().map(|e| e.props).collect();
        assert_eq!(props, vec!['x', 'b', 'a']);
    }
}
