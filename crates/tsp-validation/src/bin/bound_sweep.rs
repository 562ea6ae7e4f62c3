//! Sweeps random instances and checks that the MST lower bound never exceeds
//! the exact optimum and the nearest-neighbour tour never beats it. Emits one
//! JSON record per instance on stdout.

use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{error, info, warn};
use tsp_bounds::{mst_cost, nearest_neighbor};
use tsp_branch_bound::BranchBoundSolver;
use tsp_validation::{prefix_bounds, random_instance, BoundRecord};

const TOLERANCE: f64 = 1e-9;

#[derive(Parser, Debug)]
#[command(name = "bound-sweep", about = "Empirical soundness and tightness of the MST lower bound")]
struct Args {
    /// Smallest instance size.
    #[arg(long, default_value_t = 5)]
    min_n: usize,
    /// Largest instance size.
    #[arg(long, default_value_t = 11)]
    max_n: usize,
    /// Instances per size.
    #[arg(long, default_value_t = 10)]
    seeds: u64,
}

fn sweep_one(n: usize, seed: u64) -> tsp_core::Result<BoundRecord> {
    let matrix = random_instance(n, seed).distance_matrix();
    let exact = BranchBoundSolver::new(&matrix).solve()?;
    let all: Vec<usize> = (0..n).collect();
    let root_mst = mst_cost(&matrix, &all);
    let (_, greedy) = nearest_neighbor(&matrix, 0)?;
    let max_prefix_bound = prefix_bounds(&matrix, &exact.tour).into_iter().fold(0.0, f64::max);

    let slack = TOLERANCE * exact.cost.max(1.0);
    let sound = root_mst <= exact.cost + slack
        && max_prefix_bound <= exact.cost + slack
        && greedy + slack >= exact.cost;

    Ok(BoundRecord {
        n,
        seed,
        optimum: exact.cost,
        root_mst,
        nearest_neighbor: greedy,
        tightness: if exact.cost > 0.0 { root_mst / exact.cost } else { 1.0 },
        max_prefix_bound,
        sound,
    })
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut violations = 0usize;
    let mut records = 0usize;

    for n in args.min_n.max(3)..=args.max_n {
        for seed in 0..args.seeds {
            let record = match sweep_one(n, seed) {
                Ok(record) => record,
                Err(e) => {
                    error!("n={n} seed={seed}: {e}");
                    return ExitCode::FAILURE;
                }
            };

            if !record.sound {
                warn!("bound violation at n={n} seed={seed}: {record:?}");
                violations += 1;
            }

            match serde_json::to_string(&record) {
                Ok(line) => println!("{line}"),
                Err(e) => {
                    error!("failed to serialize record: {e}");
                    return ExitCode::FAILURE;
                }
            }
            records += 1;
        }
    }

    info!("bound sweep finished: {records} instances, {violations} violations");
    if violations > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
