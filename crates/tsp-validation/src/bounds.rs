use serde::{Deserialize, Serialize};
use tsp_bounds::mst_cost;
use tsp_core::{DistanceMatrix, Tour};

/// One line of the bound sweep: how the root MST bound and the greedy
/// upper bound compare with the proven optimum.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundRecord {
    pub n: usize,
    pub seed: u64,
    pub optimum: f64,
    pub root_mst: f64,
    pub nearest_neighbor: f64,
    /// `root_mst / optimum`; 1.0 would be a perfectly tight bound.
    pub tightness: f64,
    /// Largest `prefix cost + MST(rest)` over every prefix of the optimal tour.
    pub max_prefix_bound: f64,
    pub sound: bool,
}

/// For each proper prefix of `tour`, the lower bound exact search would
/// compute there: prefix cost plus the MST over the unvisited cities, the
/// prefix end and city 0. Every entry is at most the tour cost when the tour
/// is optimal.
pub fn prefix_bounds(matrix: &DistanceMatrix, tour: &Tour) -> Vec<f64> {
    let cities = tour.cities();
    let n = tour.len();

    (1..n)
        .map(|k| {
            let prefix = &cities[..k];
            let mut rest: Vec<usize> = cities[k..n].to_vec();
            rest.push(prefix[k - 1]);
            rest.push(0);
            matrix.path_cost(prefix) + mst_cost(matrix, &rest)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsp_core::Point;

    #[test]
    fn prefix_bounds_never_exceed_square_perimeter() {
        let matrix = DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
        ]);
        let tour = Tour::from_open(vec![0, 1, 2, 3]).unwrap();
        let bounds = prefix_bounds(&matrix, &tour);

        assert_eq!(bounds.len(), 3);
        assert_eq!(bounds[0], 30.0);
        assert!(bounds.iter().all(|&b| b <= 40.0));
    }
}
