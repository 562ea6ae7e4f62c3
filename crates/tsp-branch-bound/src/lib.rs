#![deny(clippy::all)]

//! Exact branch-and-bound solver for the symmetric TSP.
//!
//! The search fixes city 0 as the tour start and extends a partial path one
//! city at a time, cheapest edge first. Two bounds prune the tree: the
//! closing-edge test per candidate and an MST bound over the cities still to
//! connect per node. The incumbent is seeded with a nearest-neighbour tour so
//! the bound is finite from the first call.

mod config;
mod context;
mod solver;

pub use config::BranchBoundConfig;
pub use context::SearchStats;
pub use solver::{BranchBoundSolution, BranchBoundSolver};
