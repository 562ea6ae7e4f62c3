#![deny(clippy::all)]

//! Bounds for the symmetric TSP.
//!
//! [`mst_cost`] is an admissible lower bound on the cost of connecting a set
//! of cities; [`nearest_neighbor`] builds a greedy tour whose cost is an
//! upper bound on the optimum.

mod mst;
mod upper;

pub use mst::{mst_cost, mst_cost_masked, MstScratch};
pub use upper::nearest_neighbor;
