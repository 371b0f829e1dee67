//! Breadth-first edge discovery: level order and priority order.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use gk_core::{Vertex, cmp_scalar};
use gk_graph::{EdgeWeight, GraphView};

use crate::TraversalRange;

type Weight<G> = <<G as GraphView>::Props as EdgeWeight>::Weight;

/// Discovery edges `(parent, child, weight)` in level order from a source.
///
/// Each reachable vertex other than the source appears as `child` exactly once.
pub struct BfsEdgeRange<'a, G>
where
    G: GraphView,
    G::Props: EdgeWeight,
{
    graph: &'a G,
    queue: VecDeque<Vertex>,
    level: Vec<Option<usize>>,
    current: Option<(Vertex, usize)>,
    pending: Option<(Vertex, Vertex, Weight<G>)>,
}

impl<'a, G> BfsEdgeRange<'a, G>
where
    G: GraphView,
    G::Props: EdgeWeight,
{
    /// Start at `source`. An out-of-range source yields an empty range.
    pub fn new(graph: &'a G, source: Vertex) -> Self {
        let n = graph.size();
        let mut level = vec![None; n];
        let mut queue = VecDeque::new();
        if source < n {
            level[source] = Some(0);
            queue.push_back(source);
        }
        let mut range = Self {
            graph,
            queue,
            level,
            current: None,
            pending: None,
        };
        range.pending = range.advance();
        range
    }

    /// Hop distance of `v` from the source, once discovered.
    pub fn level(&self, v: Vertex) -> Option<usize> {
        self.level.get(v).copied().flatten()
    }

    fn advance(&mut self) -> Option<(Vertex, Vertex, Weight<G>)> {
        let graph = self.graph;
        loop {
            let (u, mut slot) = match self.current {
                Some(pos) => pos,
                None => (self.queue.pop_front()?, 0),
            };
            let list = graph.neighbors(u);
            while let Some(edge) = list.get(slot) {
                slot += 1;
                if self.level[edge.target].is_none() {
                    self.level[edge.target] = self.level[u].map(|l| l + 1);
                    self.queue.push_back(edge.target);
                    self.current = Some((u, slot));
                    return Some((u, edge.target, edge.props.weight()));
                }
            }
            self.current = None;
        }
    }
}

impl<G> Iterator for BfsEdgeRange<'_, G>
where
    G: GraphView,
    G::Props: EdgeWeight,
{
    type Item = (Vertex, Vertex, Weight<G>);

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.pending.take()?;
        self.pending = self.advance();
        Some(out)
    }
}

impl<G> TraversalRange for BfsEdgeRange<'_, G>
where
    G: GraphView,
    G::Props: EdgeWeight,
{
    fn is_end(&self) -> bool {
        self.pending.is_none()
    }
}

/// Frontier entry ordered so that `BinaryHeap` pops the smallest key first.
struct Frontier<K> {
    key: K,
    vertex: Vertex,
}

impl<K: PartialOrd> PartialEq for Frontier<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: PartialOrd> Eq for Frontier<K> {}

impl<K: PartialOrd> PartialOrd for Frontier<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: PartialOrd> Ord for Frontier<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_scalar(&other.key, &self.key).then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Edges `(u, v, weight)` out of vertices taken from the frontier in
/// ascending key order.
///
/// The range owns the frontier and the finalized marks. A vertex is
/// finalized when first popped and never expanded again; later, stale
/// frontier entries for it are discarded. Edges into finalized vertices are
/// skipped. Callers feed improved keys back with [`push`](Self::push) between
/// pulls.
pub struct PriorityBfsRange<'a, G: GraphView, K> {
    graph: &'a G,
    frontier: BinaryHeap<Frontier<K>>,
    finalized: Vec<bool>,
    current: Option<(Vertex, usize)>,
}

impl<'a, G, K> PriorityBfsRange<'a, G, K>
where
    G: GraphView,
    G::Props: EdgeWeight,
    K: PartialOrd,
{
    /// Seed the frontier with `source` at `key`. An out-of-range source
    /// yields an empty range.
    pub fn new(graph: &'a G, source: Vertex, key: K) -> Self {
        let mut range = Self {
            graph,
            frontier: BinaryHeap::new(),
            finalized: vec![false; graph.size()],
            current: None,
        };
        range.push(source, key);
        range
    }

    /// (Re-)insert `v` with `key`. Ignored for finalized or out-of-range vertices.
    pub fn push(&mut self, v: Vertex, key: K) {
        if self.finalized.get(v) == Some(&false) {
            self.frontier.push(Frontier { key, vertex: v });
        }
    }

    pub fn is_finalized(&self, v: Vertex) -> bool {
        self.finalized.get(v).copied().unwrap_or(false)
    }

    /// Number of finalized vertices so far.
    pub fn finalized_count(&self) -> usize {
        self.finalized.iter().filter(|&&f| f).count()
    }
}

impl<G, K> Iterator for PriorityBfsRange<'_, G, K>
where
    G: GraphView,
    G::Props: EdgeWeight,
    K: PartialOrd,
{
    type Item = (Vertex, Vertex, Weight<G>);

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        loop {
            if let Some((u, slot)) = self.current {
                let list = graph.neighbors(u);
                let found = list
                    .iter()
                    .enumerate()
                    .skip(slot)
                    .find(|(_, e)| !self.finalized[e.target]);
                if let Some((i, edge)) = found {
                    self.current = Some((u, i + 1));
                    return Some((u, edge.target, edge.props.weight()));
                }
                self.current = None;
            }

            // Pop the best unfinalized vertex; stale entries are dropped.
            let u = loop {
                let entry = self.frontier.pop()?;
                if !self.finalized[entry.vertex] {
                    break entry.vertex;
                }
            };
            self.finalized[u] = true;
            self.current = Some((u, 0));
        }
    }
}

impl<G, K> TraversalRange for PriorityBfsRange<'_, G, K>
where
    G: GraphView,
    G::Props: EdgeWeight,
    K: PartialOrd,
{
    /// No expanding vertex and no live frontier entry left.
    fn is_end(&self) -> bool {
        let expanding = self.current.is_some_and(|(u, slot)| {
            self.graph.neighbors(u)[slot.min(self.graph.neighbors(u).len())..]
                .iter()
                .any(|e| !self.finalized[e.target])
        });
        !expanding && self.frontier.iter().all(|f| self.finalized[f.vertex])
    }
}
