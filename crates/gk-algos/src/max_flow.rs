//! Maximum flow by repeated augmenting-path search.

use gk_core::{GkError, Scalar, Vertex};
use gk_graph::{Edge, EdgeHandle, FlowEdge, GraphBuilder, GraphResult, SparseGraph};
use gk_ranges::{FilteredBfsEdgeRange, TreeEdge};
use tracing::{debug, trace};

use crate::error::{AlgoError, AlgoResult, check_endpoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaxFlowConfig {
    /// Upper bound on augmentations.
    pub max_iters: usize,
}

impl Default for MaxFlowConfig {
    fn default() -> Self {
        Self {
            max_iters: usize::MAX,
        }
    }
}

/// Directed capacity graph with a zero-capacity reverse arc for every arc.
///
/// Augmenting along a reverse arc cancels flow on its forward twin, which
/// makes [`max_flow`] exact on networks built here.
pub fn flow_network<C, I>(num_vertices: usize, arcs: I) -> GraphResult<SparseGraph<FlowEdge<C>>>
where
    C: Scalar,
    I: IntoIterator<Item = (Vertex, Vertex, C)>,
{
    let mut builder = GraphBuilder::directed(num_vertices);
    builder.open()?;
    for (u, v, capacity) in arcs {
        builder.push_back(u, v, FlowEdge::with_capacity(capacity))?;
        if u != v {
            builder.push_back(v, u, FlowEdge::with_capacity(C::zero()))?;
        }
    }
    builder.close()?;
    builder.build()
}

/// Predecessor records of one augmenting-path search.
///
/// Only vertices discovered by the current search have an entry; the tree is
/// rebuilt from scratch for every augmentation.
struct SearchTree {
    parent: Vec<Option<TreeEdge>>,
}

impl SearchTree {
    /// Breadth-first search over arcs with positive residual capacity.
    /// Returns `None` when the sink is unreachable.
    fn grow<C: Scalar>(graph: &SparseGraph<FlowEdge<C>>, source: Vertex, sink: Vertex) -> Option<Self> {
        let mut tree = Self {
            parent: vec![None; graph.size()],
        };
        let mut range = FilteredBfsEdgeRange::new(graph, source, sink, |_, e: &Edge<FlowEdge<C>>| {
            e.props.residual() > C::zero()
        });
        for edge in range.by_ref() {
            tree.parent[edge.child] = Some(edge);
        }
        range.found().then_some(tree)
    }

    /// Handles of the path's arcs, sink first.
    fn path(&self, sink: Vertex) -> Vec<EdgeHandle> {
        let mut path = Vec::new();
        let mut v = sink;
        while let Some(edge) = self.parent[v] {
            path.push(edge.handle());
            v = edge.parent;
        }
        path
    }
}

fn missing_arc() -> AlgoError {
    AlgoError::Core(GkError::Invariant {
        what: "search tree refers to a missing arc",
    })
}

/// Push `amount` along `handle`, cancelling the same amount on the first
/// opposite arc if there is one.
fn augment<C: Scalar>(graph: &mut SparseGraph<FlowEdge<C>>, handle: EdgeHandle, amount: C) -> AlgoResult<()> {
    let target = graph.edge(handle).ok_or_else(missing_arc)?.target;
    let forward = graph.props_mut(handle).ok_or_else(missing_arc)?;
    forward.flow = forward.flow + amount;

    if let Some(reverse) = graph.find_edge(target, handle.vertex) {
        let reverse = graph.props_mut(reverse).ok_or_else(missing_arc)?;
        reverse.flow = reverse.flow - amount;
    }
    Ok(())
}

/// Route flow from `source` to `sink`, updating `flow` fields in place, and
/// return the total pushed.
///
/// Each round searches for a path whose arcs all have residual capacity
/// (`capacity - flow > 0`), pushes its bottleneck, and repeats until no path
/// exists or `config.max_iters` rounds have run. Stopping at `max_iters` is
/// not an error; the flow found so far is returned. No arc's flow ever
/// exceeds its capacity.
pub fn max_flow<C: Scalar>(
    graph: &mut SparseGraph<FlowEdge<C>>,
    source: Vertex,
    sink: Vertex,
    config: &MaxFlowConfig,
) -> AlgoResult<C> {
    check_endpoint(graph.size(), source, "source")?;
    check_endpoint(graph.size(), sink, "sink")?;
    if source == sink {
        return Err(AlgoError::InvalidArg {
            what: format!("source and sink are both vertex {source}"),
        });
    }

    let mut total = C::zero();
    let mut rounds = 0;
    while rounds < config.max_iters {
        let Some(tree) = SearchTree::grow(graph, source, sink) else {
            break;
        };
        let path = tree.path(sink);

        let mut bottleneck = C::max_value();
        for &handle in &path {
            let residual = graph.edge(handle).ok_or_else(missing_arc)?.props.residual();
            if residual < bottleneck {
                bottleneck = residual;
            }
        }
        for &handle in &path {
            augment(graph, handle, bottleneck)?;
        }

        total = total + bottleneck;
        rounds += 1;
        trace!(round = rounds, bottleneck = ?bottleneck, hops = path.len(), "augmented");
    }

    debug!(source, sink, rounds, total = ?total, "max flow finished");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Six-vertex network from the standard textbook figure; optimum 23.
    fn textbook() -> SparseGraph<FlowEdge<i64>> {
        flow_network(
            6,
            [
                (0, 1, 16),
                (0, 2, 13),
                (1, 3, 12),
                (2, 1, 4),
                (2, 4, 14),
                (3, 2, 9),
                (3, 5, 20),
                (4, 3, 7),
                (4, 5, 4),
            ],
        )
        .unwrap()
    }

    fn no_arc_over_capacity(g: &SparseGraph<FlowEdge<i64>>) -> bool {
        (0..g.size()).all(|v| g.neighbors(v).iter().all(|e| e.props.flow <= e.props.capacity))
    }

    #[test]
    fn textbook_network_reaches_optimum() {
        let mut g = textbook();
        let flow = max_flow(&mut g, 0, 5, &MaxFlowConfig::default()).unwrap();
        assert_eq!(flow, 23);
        assert!(no_arc_over_capacity(&g));
    }

    #[test]
    fn flow_is_conserved_at_inner_vertices() {
        let mut g = textbook();
        max_flow(&mut g, 0, 5, &MaxFlowConfig::default()).unwrap();
        for v in 1..5 {
            let net: i64 = g.neighbors(v).iter().map(|e| e.props.flow).sum();
            assert_eq!(net, 0, "vertex {v}");
        }
        let out_of_source: i64 = g.neighbors(0).iter().map(|e| e.props.flow).sum();
        assert_eq!(out_of_source, 23);
    }

    #[test]
    fn max_iters_bounds_augmentations() {
        let mut g = textbook();
        let partial = max_flow(&mut g, 0, 5, &MaxFlowConfig { max_iters: 1 }).unwrap();
        assert!(partial > 0 && partial < 23);
        assert!(no_arc_over_capacity(&g));
    }

    #[test]
    fn disconnected_sink_carries_nothing() {
        let mut g = flow_network(3, [(0, 1, 5_i64)]).unwrap();
        assert_eq!(max_flow(&mut g, 0, 2, &MaxFlowConfig::default()).unwrap(), 0);
    }

    #[test]
    fn forward_only_graph_still_respects_capacity() {
        let mut g = SparseGraph::from_edges(
            4,
            gk_graph::Directedness::Directed,
            [
                (0, 1, FlowEdge::with_capacity(3.0)),
                (1, 3, FlowEdge::with_capacity(2.0)),
                (0, 2, FlowEdge::with_capacity(1.0)),
                (2, 3, FlowEdge::with_capacity(5.0)),
            ],
        )
        .unwrap();
        let flow = max_flow(&mut g, 0, 3, &MaxFlowConfig::default()).unwrap();
        assert_eq!(flow, 3.0);
    }

    #[test]
    fn rejects_bad_endpoints() {
        let mut g = textbook();
        let config = MaxFlowConfig::default();
        assert!(matches!(
            max_flow(&mut g, 0, 0, &config),
            Err(AlgoError::InvalidArg { .. })
        ));
        assert!(matches!(
            max_flow(&mut g, 0, 6, &config),
            Err(AlgoError::Core(GkError::IndexOob { .. }))
        ));
    }
}
