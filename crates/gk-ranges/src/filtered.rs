//! Predicate-filtered breadth-first search towards a sink.

use std::collections::VecDeque;

use gk_core::Vertex;
use gk_graph::{Edge, EdgeHandle, GraphView};

use crate::TraversalRange;

/// A discovery edge: `slot` indexes `parent`'s adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeEdge {
    pub parent: Vertex,
    pub child: Vertex,
    pub slot: usize,
}

impl TreeEdge {
    pub fn handle(&self) -> EdgeHandle {
        EdgeHandle {
            vertex: self.parent,
            slot: self.slot,
        }
    }
}

/// Breadth-first discovery from `source` that only follows edges accepted
/// by `predicate(vertex, edge)`, and stops as soon as `sink` is discovered.
///
/// [`found`](Self::found) separates "sink reached" from "frontier exhausted".
pub struct FilteredBfsEdgeRange<'a, G: GraphView, F> {
    graph: &'a G,
    sink: Vertex,
    predicate: F,
    queue: VecDeque<Vertex>,
    parent: Vec<Option<TreeEdge>>,
    visited: Vec<bool>,
    current: Option<(Vertex, usize)>,
    found: bool,
    pending: Option<TreeEdge>,
}

impl<'a, G, F> FilteredBfsEdgeRange<'a, G, F>
where
    G: GraphView,
    F: FnMut(Vertex, &Edge<G::Props>) -> bool,
{
    /// Out-of-range endpoints yield an empty range with `found() == false`.
    pub fn new(graph: &'a G, source: Vertex, sink: Vertex, predicate: F) -> Self {
        let n = graph.size();
        let mut range = Self {
            graph,
            sink,
            predicate,
            queue: VecDeque::new(),
            parent: vec![None; n],
            visited: vec![false; n],
            current: None,
            found: false,
            pending: None,
        };
        if source < n && sink < n {
            range.visited[source] = true;
            if source == sink {
                range.found = true;
            } else {
                range.queue.push_back(source);
            }
        }
        range.pending = range.advance();
        range
    }

    /// True once the sink has been discovered.
    ///
    /// The range reads one record ahead to keep `is_end` exact, so this
    /// turns true as soon as the edge reaching the sink is buffered, before
    /// the caller pulls it with `next`. `parent` and `path` see that edge
    /// at the same moment.
    pub fn found(&self) -> bool {
        self.found
    }

    /// Discovery edge that reached `v`, if any.
    pub fn parent(&self, v: Vertex) -> Option<TreeEdge> {
        self.parent.get(v).copied().flatten()
    }

    /// Edge handles from the sink back to the source, or `None` if the sink
    /// has not been found.
    pub fn path(&self) -> Option<Vec<EdgeHandle>> {
        if !self.found {
            return None;
        }
        let mut path = Vec::new();
        let mut v = self.sink;
        while let Some(edge) = self.parent(v) {
            path.push(edge.handle());
            v = edge.parent;
        }
        Some(path)
    }

    fn advance(&mut self) -> Option<TreeEdge> {
        if self.found {
            return None;
        }
        let graph = self.graph;
        loop {
            let (u, mut slot) = match self.current {
                Some(pos) => pos,
                None => (self.queue.pop_front()?, 0),
            };
            let list = graph.neighbors(u);
            while let Some(edge) = list.get(slot) {
                slot += 1;
                let child = edge.target;
                if self.visited[child] || !(self.predicate)(u, edge) {
                    continue;
                }
                self.visited[child] = true;
                let tree_edge = TreeEdge {
                    parent: u,
                    child,
                    slot: slot - 1,
                };
                self.parent[child] = Some(tree_edge);
                if child == self.sink {
                    self.found = true;
                    self.queue.clear();
                    self.current = None;
                } else {
                    self.queue.push_back(child);
                    self.current = Some((u, slot));
                }
                return Some(tree_edge);
            }
            self.current = None;
        }
    }
}

impl<G, F> Iterator for FilteredBfsEdgeRange<'_, G, F>
where
    G: GraphView,
    F: FnMut(Vertex, &Edge<G::Props>) -> bool,
{
    type Item = TreeEdge;

    fn next(&mut self) -> Option<TreeEdge> {
        let out = self.pending.take()?;
        self.pending = self.advance();
        Some(out)
    }
}

impl<G, F> TraversalRange for FilteredBfsEdgeRange<'_, G, F>
where
    G: GraphView,
    F: FnMut(Vertex, &Edge<G::Props>) -> bool,
{
    fn is_end(&self) -> bool {
        self.pending.is_none()
    }
}
