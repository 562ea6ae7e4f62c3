use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::instance::CityLabels;
use crate::matrix::DistanceMatrix;

/// A Hamiltonian cycle stored closed: `n + 1` city indices, first and last
/// both city 0.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Tour {
    cities: Vec<usize>,
}

/// Cost of one traversed edge, used for per-tour traces.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeCost {
    pub from: usize,
    pub to: usize,
    pub cost: f64,
}

impl Tour {
    /// Validates a closed city sequence against `n` cities.
    pub fn from_closed(cities: Vec<usize>, n: usize) -> Result<Self> {
        if n == 0 || cities.len() != n + 1 {
            return Err(Error::invalid_input(format!(
                "a closed tour over {n} cities needs {} entries, got {}",
                n + 1,
                cities.len()
            )));
        }
        if cities[0] != 0 || cities[n] != 0 {
            return Err(Error::invalid_input("a tour must start and end at city 0"));
        }

        let mut seen = vec![false; n];
        for &city in &cities[..n] {
            if city >= n || seen[city] {
                return Err(Error::invalid_input(format!(
                    "city {city} is out of range or visited twice"
                )));
            }
            seen[city] = true;
        }

        Ok(Self { cities })
    }

    /// Closes an open visiting order that already starts at city 0.
    pub fn from_open(mut order: Vec<usize>) -> Result<Self> {
        let n = order.len();
        order.push(0);
        Self::from_closed(order, n)
    }

    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Number of distinct cities in the cycle.
    pub fn len(&self) -> usize {
        self.cities.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cities.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn cost(&self, matrix: &DistanceMatrix) -> f64 {
        matrix.path_cost(&self.cities)
    }

    pub fn breakdown(&self, matrix: &DistanceMatrix) -> Vec<EdgeCost> {
        self.edges()
            .map(|(from, to)| EdgeCost { from, to, cost: matrix.get(from, to) })
            .collect()
    }
}

impl TryFrom<Vec<usize>> for Tour {
    type Error = Error;

    fn try_from(cities: Vec<usize>) -> Result<Self> {
        let n = cities.len().saturating_sub(1);
        Self::from_closed(cities, n)
    }
}

impl From<Tour> for Vec<usize> {
    fn from(tour: Tour) -> Self {
        tour.cities
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.cities.iter().map(usize::to_string).collect();
        write!(f, "{}", parts.join(" -> "))
    }
}

impl EdgeCost {
    /// `"<from> -> <to>: cost=<cost>"` with three decimals, using `labels`.
    pub fn describe(&self, labels: &CityLabels) -> String {
        format!("{} -> {}: cost={:.3}", labels.get(self.from), labels.get(self.to), self.cost)
    }
}
