#![deny(clippy::all)]

//! Reference tooling for checking the solvers: a brute-force optimum for
//! small instances, seeded random instances, MST bound checks along a tour
//! and side-by-side exact/ACO comparison records.

mod bounds;
mod brute_force;
mod compare;
mod generator;

pub use bounds::{prefix_bounds, BoundRecord};
pub use brute_force::{brute_force, MAX_BRUTE_FORCE_CITIES};
pub use compare::{compare, ComparisonRecord};
pub use generator::random_instance;
