//! Depth-first edge discovery.

use gk_core::Vertex;
use gk_graph::GraphView;

use crate::TraversalRange;

/// How the traversal classified an examined edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// First reached `target`; the edge joins the DFS tree.
    Tree,
    /// `target` was already visited (back, forward or cross edge).
    NonTree,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DfsEdge {
    pub source: Vertex,
    pub target: Vertex,
    pub kind: EdgeKind,
}

/// Every edge examined by a depth-first traversal, in examination order.
///
/// [`new`](Self::new) covers the vertices reachable from one source;
/// [`forest`](Self::forest) restarts at the lowest unvisited vertex until every
/// vertex is visited, so each stored edge is examined exactly once.
pub struct DfsEdgeRange<'a, G: GraphView> {
    graph: &'a G,
    stack: Vec<(Vertex, usize)>,
    visited: Vec<bool>,
    /// Next root candidate in forest mode.
    next_root: Option<Vertex>,
    pending: Option<DfsEdge>,
}

impl<'a, G: GraphView> DfsEdgeRange<'a, G> {
    /// Traverse from `source`. An out-of-range source yields an empty range.
    pub fn new(graph: &'a G, source: Vertex) -> Self {
        let mut range = Self::empty(graph, None);
        if source < graph.size() {
            range.visit(source);
        }
        range.pending = range.advance();
        range
    }

    /// Traverse the whole graph, one tree per unvisited root.
    pub fn forest(graph: &'a G) -> Self {
        let mut range = Self::empty(graph, Some(0));
        range.pending = range.advance();
        range
    }

    pub fn is_visited(&self, v: Vertex) -> bool {
        self.visited.get(v).copied().unwrap_or(false)
    }

    fn empty(graph: &'a G, next_root: Option<Vertex>) -> Self {
        Self {
            graph,
            stack: Vec::new(),
            visited: vec![false; graph.size()],
            next_root,
            pending: None,
        }
    }

    fn visit(&mut self, v: Vertex) {
        self.visited[v] = true;
        self.stack.push((v, 0));
    }

    fn advance(&mut self) -> Option<DfsEdge> {
        let graph = self.graph;
        loop {
            if let Some(top) = self.stack.last_mut() {
                let (source, slot) = *top;
                match graph.neighbors(source).get(slot) {
                    Some(edge) => {
                        top.1 += 1;
                        let target = edge.target;
                        let kind = if self.visited[target] {
                            EdgeKind::NonTree
                        } else {
                            self.visit(target);
                            EdgeKind::Tree
                        };
                        return Some(DfsEdge {
                            source,
                            target,
                            kind,
                        });
                    }
                    None => {
                        self.stack.pop();
                        continue;
                    }
                }
            }

            let mut root = self.next_root?;
            while root < self.visited.len() && self.visited[root] {
                root += 1;
            }
            if root == self.visited.len() {
                self.next_root = None;
                return None;
            }
            self.next_root = Some(root + 1);
            self.visit(root);
        }
    }
}

impl<G: GraphView> Iterator for DfsEdgeRange<'_, G> {
    type Item = DfsEdge;

    fn next(&mut self) -> Option<DfsEdge> {
        let out = self.pending.take()?;
        self.pending = self.advance();
        Some(out)
    }
}

impl<G: GraphView> TraversalRange for DfsEdgeRange<'_, G> {
    fn is_end(&self) -> bool {
        self.pending.is_none()
    }
}
