//! Bundled exact backend based on successive max-gain augmentation.
//!
//! Each product's sub-model is a transportation network: a source arc
//! per warehouse capped at stock, a route arc per materialized
//! (warehouse, order) pair carrying the route score as gain, and a sink
//! arc per order capped at demand. The solver repeatedly augments along
//! the maximum-gain residual path while that gain stays non-negative,
//! which maximizes the score sum first and, among score-optimal
//! assignments, the shipped volume. Quantities are integral because
//! every augmentation pushes an integer bottleneck.
//!
//! Path search is deterministic: ties between equal-gain paths resolve
//! by arc insertion order, so a model solves to the same assignment on
//! every run. Sub-models are independent and may solve in parallel.

use rayon::prelude::*;
use smallvec::SmallVec;

use stockwise_model::{ProductModel, SourcingModel};

use crate::solver::{Solution, SourcingSolver};

/// Gains within this distance of zero count as zero when deciding
/// whether a residual path is still worth augmenting.
pub const DEFAULT_SCORE_EPSILON: f64 = 1e-9;

/// The bundled exact solver.
///
/// Always returns an [`Optimal`](crate::SolutionStatus::Optimal)
/// solution: the zero assignment is feasible for every model and the
/// demand ceilings bound the objective.
#[derive(Debug, Clone)]
pub struct FlowSolver {
    parallel: bool,
    score_epsilon: f64,
}

impl Default for FlowSolver {
    fn default() -> Self {
        FlowSolver {
            parallel: false,
            score_epsilon: DEFAULT_SCORE_EPSILON,
        }
    }
}

impl FlowSolver {
    /// A serial solver with the default epsilon.
    pub fn new() -> Self {
        FlowSolver::default()
    }

    /// Solves product sub-models on the rayon pool when enabled.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Overrides the zero-gain tolerance; negative values clamp to
    /// zero so zero-score routes stay eligible.
    pub fn with_score_epsilon(mut self, epsilon: f64) -> Self {
        self.score_epsilon = epsilon.max(0.0);
        self
    }

    fn solve_product(&self, sub: &ProductModel) -> Vec<i64> {
        let warehouses = sub.stock().len();
        let orders = sub.demand().len();
        let source = 0;
        let sink = warehouses + orders + 1;
        let mut network = FlowNetwork::new(warehouses + orders + 2);

        for (w, &units) in sub.stock().iter().enumerate() {
            network.add_edge(source, 1 + w, units, 0.0);
        }
        let mut route_edges = Vec::with_capacity(sub.route_count());
        for route in sub.routes() {
            let cap = sub.stock()[route.warehouse].min(sub.demand()[route.order]);
            let edge = network.add_edge(
                1 + route.warehouse,
                1 + warehouses + route.order,
                cap,
                route.score,
            );
            route_edges.push(edge);
        }
        for (o, &units) in sub.demand().iter().enumerate() {
            network.add_edge(1 + warehouses + o, sink, units, 0.0);
        }

        while let Some((gain, path)) = network.best_path(source, sink) {
            if gain < -self.score_epsilon {
                break;
            }
            network.augment(&path);
        }

        route_edges.iter().map(|&edge| network.flow(edge)).collect()
    }
}

impl SourcingSolver for FlowSolver {
    fn solve(&self, model: &SourcingModel) -> Solution {
        if model.is_trivial() {
            return Solution::optimal(Vec::new(), 0.0);
        }
        let flows: Vec<Vec<i64>> = if self.parallel {
            model
                .submodels()
                .par_iter()
                .map(|sub| self.solve_product(sub))
                .collect()
        } else {
            model
                .submodels()
                .iter()
                .map(|sub| self.solve_product(sub))
                .collect()
        };
        let mut quantities = vec![0i64; model.variable_count()];
        for (p, product_flows) in flows.into_iter().enumerate() {
            quantities[model.route_range(p)].copy_from_slice(&product_flows);
        }
        let objective = model.objective_value(&quantities);
        Solution::optimal(quantities, objective)
    }

    fn name(&self) -> &str {
        "flow"
    }
}

struct Edge {
    to: usize,
    cap: i64,
    gain: f64,
}

/// Residual network with xor-paired forward and reverse arcs.
struct FlowNetwork {
    edges: Vec<Edge>,
    adjacency: Vec<SmallVec<[usize; 4]>>,
}

impl FlowNetwork {
    fn new(nodes: usize) -> Self {
        FlowNetwork {
            edges: Vec::new(),
            adjacency: vec![SmallVec::new(); nodes],
        }
    }

    /// Adds a forward arc and its zero-capacity reverse, returning the
    /// forward arc's index.
    fn add_edge(&mut self, from: usize, to: usize, cap: i64, gain: f64) -> usize {
        let idx = self.edges.len();
        self.edges.push(Edge { to, cap, gain });
        self.edges.push(Edge {
            to: from,
            cap: 0,
            gain: -gain,
        });
        self.adjacency[from].push(idx);
        self.adjacency[to].push(idx + 1);
        idx
    }

    /// Units pushed through a forward arc so far.
    fn flow(&self, edge: usize) -> i64 {
        self.edges[edge ^ 1].cap
    }

    /// Maximum-gain residual path from source to sink, as (gain, arcs).
    ///
    /// Bellman-Ford over node order; the residual graph never contains
    /// a positive cycle under max-gain augmentation, so relaxation
    /// settles within `nodes - 1` rounds. Equal-gain candidates keep
    /// the first predecessor found, which makes the search order and
    /// the returned path deterministic.
    fn best_path(&self, source: usize, sink: usize) -> Option<(f64, Vec<usize>)> {
        let nodes = self.adjacency.len();
        let mut gain = vec![f64::NEG_INFINITY; nodes];
        let mut pred: Vec<Option<usize>> = vec![None; nodes];
        gain[source] = 0.0;

        for _ in 1..nodes {
            let mut improved = false;
            for from in 0..nodes {
                if gain[from] == f64::NEG_INFINITY {
                    continue;
                }
                for &edge_idx in &self.adjacency[from] {
                    let edge = &self.edges[edge_idx];
                    if edge.cap == 0 {
                        continue;
                    }
                    let candidate = gain[from] + edge.gain;
                    if candidate > gain[edge.to] {
                        gain[edge.to] = candidate;
                        pred[edge.to] = Some(edge_idx);
                        improved = true;
                    }
                }
            }
            if !improved {
                break;
            }
        }

        if gain[sink] == f64::NEG_INFINITY {
            return None;
        }
        let mut path = Vec::new();
        let mut node = sink;
        while node != source {
            let edge_idx = pred[node]?;
            path.push(edge_idx);
            node = self.edges[edge_idx ^ 1].to;
        }
        path.reverse();
        Some((gain[sink], path))
    }

    /// Pushes the bottleneck quantity along a residual path.
    fn augment(&mut self, path: &[usize]) -> i64 {
        let mut pushed = i64::MAX;
        for &edge in path {
            pushed = pushed.min(self.edges[edge].cap);
        }
        for &edge in path {
            self.edges[edge].cap -= pushed;
            self.edges[edge ^ 1].cap += pushed;
        }
        pushed
    }
}
