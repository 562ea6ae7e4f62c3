#![deny(clippy::all)]

//! Ant Colony Optimization for the symmetric TSP.
//!
//! Each iteration builds one tour per ant from the current pheromone levels,
//! then evaporates and reinforces the pheromone matrix in a single pass over
//! the finished batch. Ants never write pheromone while constructing, so
//! construction can be spread over worker threads without locking.

mod ant;
mod colony;
mod config;
mod pheromone;

pub use colony::{AcoSolution, AntColony, IterationSample};
pub use config::AcoConfig;
pub use pheromone::PheromoneMatrix;
