//! PageRank by power iteration over a damping-scaled transition structure.

use gk_core::{Real, ensure_finite};
use gk_graph::{GraphBuilder, GraphView, SparseGraph};
use gk_ranges::{NeighborRange, SpmvRange};
use tracing::{debug, trace, warn};

use crate::error::{AlgoError, AlgoResult};

/// Iteration parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRankConfig {
    /// Probability of following an out-edge, in `[0, 1]`.
    pub damping: Real,
    /// Stop once `squared_error / N` drops below this.
    pub threshold: Real,
    pub max_iters: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            threshold: 1e-4,
            max_iters: 20,
        }
    }
}

impl PageRankConfig {
    fn validate(&self) -> AlgoResult<()> {
        let damping = ensure_finite(self.damping, "damping")?;
        if !(0.0..=1.0).contains(&damping) {
            return Err(AlgoError::InvalidArg {
                what: format!("damping must lie in [0, 1], got {damping}"),
            });
        }
        let threshold = ensure_finite(self.threshold, "threshold")?;
        if threshold < 0.0 {
            return Err(AlgoError::InvalidArg {
                what: format!("threshold must be non-negative, got {threshold}"),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRankResult {
    pub ranks: Vec<Real>,
    pub iterations: usize,
    pub converged: bool,
    /// Sum of squared rank changes, one entry per iteration.
    pub squared_errors: Vec<Real>,
}

/// Entry `(u, v)` holds `damping / out_degree(u)` for every edge `u -> v`.
///
/// Built once per call; the iterations only fold over it.
fn transition_structure<G: GraphView>(graph: &G, damping: Real) -> AlgoResult<SparseGraph<Real>> {
    let mut builder = GraphBuilder::directed(graph.size());
    builder.open()?;
    for (u, v) in NeighborRange::new(graph) {
        let scale = damping / graph.neighbors(u).len() as Real;
        builder.push_back(u, v, scale)?;
    }
    builder.close()?;
    Ok(builder.build()?)
}

/// Rank every vertex, starting from the uniform vector.
///
/// Each iteration computes `rank[v] = sum(value(u, v) * prev[u]) + (1 - d) / N`.
/// Rank held by vertices without out-edges is not redistributed. Hitting
/// `max_iters` is not an error: the latest ranks are returned with
/// `converged == false`.
pub fn pagerank<G: GraphView>(graph: &G, config: &PageRankConfig) -> AlgoResult<PageRankResult> {
    config.validate()?;
    let n = graph.size();
    if n == 0 {
        return Err(AlgoError::EmptyGraph);
    }

    let transition = transition_structure(graph, config.damping)?;
    let nf = n as Real;
    let teleport = (1.0 - config.damping) / nf;

    let mut prev = vec![1.0 / nf; n];
    let mut rank = vec![0.0; n];
    let mut squared_errors = Vec::new();
    let mut converged = false;

    for iteration in 1..=config.max_iters {
        rank.fill(0.0);
        for (row, col, value) in SpmvRange::new(&transition) {
            rank[col] += value * prev[row];
        }
        for r in &mut rank {
            *r += teleport;
        }

        let squared_error: Real = rank
            .iter()
            .zip(&prev)
            .map(|(r, p)| (r - p) * (r - p))
            .sum();
        squared_errors.push(squared_error);
        std::mem::swap(&mut rank, &mut prev);
        trace!(iteration, squared_error, "pagerank iteration");

        if squared_error / nf < config.threshold {
            converged = true;
            break;
        }
    }

    let iterations = squared_errors.len();
    if converged {
        debug!(iterations, vertices = n, "pagerank converged");
    } else {
        warn!(iterations, vertices = n, "pagerank stopped at max_iters");
    }

    Ok(PageRankResult {
        ranks: prev,
        iterations,
        converged,
        squared_errors,
    })
}
