use std::time::{Duration, Instant};

use log::{debug, info};
use tsp_bounds::{mst_cost_masked, nearest_neighbor};
use tsp_core::{CancellationToken, DistanceMatrix, EdgeCost, Error, Result, Tour, MAX_BITMASK_CITIES};

use crate::config::BranchBoundConfig;
use crate::context::{SearchContext, SearchStats};

#[derive(Clone, Debug)]
pub struct BranchBoundSolution {
    pub tour: Tour,
    pub cost: f64,
    pub elapsed: Duration,
    /// Edge-by-edge costs of `tour`.
    pub trace: Vec<EdgeCost>,
    pub stats: SearchStats,
    /// `true` when the whole tree was searched, i.e. `cost` is optimal.
    pub exhausted: bool,
}

impl BranchBoundSolution {
    pub fn nodes_expanded(&self) -> u64 {
        self.stats.nodes_expanded
    }
}

pub struct BranchBoundSolver<'a> {
    matrix: &'a DistanceMatrix,
    config: BranchBoundConfig,
    cancellation: Option<CancellationToken>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

impl<'a> BranchBoundSolver<'a> {
    pub fn new(matrix: &'a DistanceMatrix) -> Self {
        Self { matrix, config: BranchBoundConfig::default(), cancellation: None }
    }

    pub fn with_config(mut self, config: BranchBoundConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Runs the search to completion (or until cancelled / out of nodes) and
    /// returns the best tour found. Each call starts from scratch.
    pub fn solve(&self) -> Result<BranchBoundSolution> {
        self.matrix.validate_for_tour()?;
        let n = self.matrix.size();
        if n > MAX_BITMASK_CITIES {
            return Err(Error::invalid_input(format!(
                "exact search supports at most {MAX_BITMASK_CITIES} cities, got {n}"
            )));
        }

        let start = Instant::now();

        let (greedy, greedy_cost) = nearest_neighbor(self.matrix, 0)?;
        debug!("nearest-neighbour incumbent: cost={greedy_cost:.3}");

        let mut ctx = SearchContext::new(self.matrix, greedy.cities().to_vec(), greedy_cost);
        let flow = self.dfs(&mut ctx);

        let elapsed = start.elapsed();
        let tour = Tour::from_closed(ctx.best_path, n)?;
        let trace = tour.breakdown(self.matrix);
        let exhausted = flow == Flow::Continue;

        info!(
            "branch-and-bound: n={n} cost={:.3} nodes={} improvements={} exhausted={exhausted} time={:.3}s",
            ctx.best_cost,
            ctx.stats.nodes_expanded,
            ctx.stats.improvements,
            elapsed.as_secs_f64()
        );

        Ok(BranchBoundSolution {
            tour,
            cost: ctx.best_cost,
            elapsed,
            trace,
            stats: ctx.stats,
            exhausted,
        })
    }

    fn should_stop(&self, ctx: &SearchContext) -> bool {
        if self.cancellation.as_ref().is_some_and(CancellationToken::is_cancelled) {
            return true;
        }
        self.config.node_limit.is_some_and(|limit| ctx.stats.nodes_expanded > limit)
    }

    fn dfs(&self, ctx: &mut SearchContext) -> Flow {
        ctx.stats.nodes_expanded += 1;
        if self.should_stop(ctx) {
            return Flow::Stop;
        }

        let depth = ctx.path.len();
        let curr = ctx.current();
        let matrix = ctx.matrix;

        // Base Case: every city placed, close the cycle
        if depth == ctx.n {
            let total = ctx.cost + matrix.get(curr, 0);
            if total < ctx.best_cost {
                ctx.record_incumbent(total);
                debug!("improved incumbent: cost={total:.3} after {} nodes", ctx.stats.nodes_expanded);
            }
            return Flow::Continue;
        }

        // Direction fixing: the last city must end up above path[1]
        if self.config.break_symmetry && depth >= 2 {
            let unvisited = !ctx.visited & ctx.full_mask;
            let highest = (63 - unvisited.leading_zeros()) as usize;
            if highest < ctx.path[1] {
                ctx.stats.pruned_by_symmetry += 1;
                return Flow::Continue;
            }
        }

        // Node bound: MST over the cities still to connect, plus both ends
        let remaining = (!ctx.visited & ctx.full_mask) | (1u64 << curr) | 1;
        if ctx.cost + mst_cost_masked(matrix, remaining, &mut ctx.mst_scratch) >= ctx.best_cost {
            ctx.stats.pruned_by_mst += 1;
            return Flow::Continue;
        }

        let mut candidates = std::mem::take(&mut ctx.candidates[depth]);
        candidates.clear();
        let row = matrix.row(curr);
        for city in 0..ctx.n {
            if !ctx.is_visited(city) {
                candidates.push((row[city], city));
            }
        }
        candidates.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        let mut flow = Flow::Continue;

        for &(edge_cost, next) in &candidates {
            let new_cost = ctx.cost + edge_cost;
            if new_cost + matrix.get(next, 0) >= ctx.best_cost {
                ctx.stats.pruned_by_edge += 1;
                continue;
            }

            let saved = ctx.push(next, edge_cost);
            flow = self.dfs(ctx);
            ctx.pop(saved);

            if flow == Flow::Stop {
                break;
            }
        }

        ctx.candidates[depth] = candidates;
        flow
    }
}
