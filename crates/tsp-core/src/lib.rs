#![deny(clippy::all)]

//! Shared types for the symmetric TSP solvers.
//!
//! Every solver in the workspace consumes a [`DistanceMatrix`] and produces a
//! closed [`Tour`] plus an edge-by-edge [`EdgeCost`] trace. Inputs are
//! validated eagerly, so solvers never start work on a malformed matrix.

mod cancel;
mod error;
mod geometry;
mod instance;
mod matrix;
mod tour;

pub use cancel::CancellationToken;
pub use error::{Error, Result};
pub use geometry::{euclidean, great_circle_km, Point};
pub use instance::{CityLabels, Instance};
pub use matrix::DistanceMatrix;
pub use tour::{EdgeCost, Tour};

/// Largest city count supported by bitmask-based search (one bit per city).
pub const MAX_BITMASK_CITIES: usize = 64;
