use serde::{Deserialize, Serialize};
use tsp_aco::{AcoConfig, AntColony};
use tsp_branch_bound::BranchBoundSolver;
use tsp_core::{Instance, Result};

/// Exact and ACO results for one instance, side by side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub n: usize,
    pub exact_cost: f64,
    pub exact_time: f64,
    pub exact_nodes: u64,
    pub aco_cost: f64,
    pub aco_time: f64,
    /// Relative ACO excess over the optimum, `(aco - exact) / exact`.
    pub gap: f64,
}

pub fn compare(instance: &Instance, aco: AcoConfig) -> Result<ComparisonRecord> {
    let matrix = instance.distance_matrix();

    let exact = BranchBoundSolver::new(&matrix).solve()?;
    let heuristic = AntColony::new(&matrix, aco).run()?;

    let gap = if exact.cost > 0.0 { (heuristic.cost - exact.cost) / exact.cost } else { 0.0 };

    Ok(ComparisonRecord {
        n: matrix.size(),
        exact_cost: exact.cost,
        exact_time: exact.elapsed.as_secs_f64(),
        exact_nodes: exact.nodes_expanded(),
        aco_cost: heuristic.cost,
        aco_time: heuristic.elapsed.as_secs_f64(),
        gap,
    })
}
