use serde::{Deserialize, Serialize};
use tsp_core::{Error, Result};

/// Colony parameters. `ants` and `iterations` scale with the instance size
/// when left unset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcoConfig {
    pub ants: Option<usize>,
    pub iterations: Option<usize>,
    /// Pheromone influence exponent.
    pub alpha: f64,
    /// Heuristic (inverse distance) influence exponent.
    pub beta: f64,
    /// Fraction of pheromone removed every iteration, in (0, 1).
    pub evaporation: f64,
    /// Pheromone deposited per tour, divided by the tour cost.
    pub deposit: f64,
    pub initial_pheromone: f64,
    pub seed: u64,
    /// Worker threads used to build ant tours.
    pub threads: usize,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            ants: None,
            iterations: None,
            alpha: 1.0,
            beta: 5.0,
            evaporation: 0.6,
            deposit: 200.0,
            initial_pheromone: 0.1,
            seed: 0,
            threads: 1,
        }
    }
}

impl AcoConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_ants(mut self, ants: usize) -> Self {
        self.ants = Some(ants);
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn ants_for(&self, n: usize) -> usize {
        self.ants.unwrap_or_else(|| (5 * n).max(80))
    }

    pub fn iterations_for(&self, n: usize) -> usize {
        self.iterations.unwrap_or_else(|| (30 * n).max(800))
    }

    pub fn validate(&self) -> Result<()> {
        if self.ants == Some(0) {
            return Err(Error::invalid_configuration("number of ants must be positive"));
        }
        if self.iterations == Some(0) {
            return Err(Error::invalid_configuration("number of iterations must be positive"));
        }
        if self.threads == 0 {
            return Err(Error::invalid_configuration("number of threads must be positive"));
        }

        for (name, value) in [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("deposit", self.deposit),
            ("initial_pheromone", self.initial_pheromone),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::invalid_configuration(format!("{name} must be positive, got {value}")));
            }
        }

        if !(self.evaporation > 0.0 && self.evaporation < 1.0) {
            return Err(Error::invalid_configuration(format!(
                "evaporation must lie in (0, 1), got {}",
                self.evaporation
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_scaled_defaults() {
        let config = AcoConfig::default();
        assert_eq!(config.ants_for(10), 80);
        assert_eq!(config.ants_for(40), 200);
        assert_eq!(config.iterations_for(10), 800);
        assert_eq!(config.iterations_for(50), 1500);
        assert_eq!(config.clone().with_ants(7).ants_for(50), 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        let bad = [
            AcoConfig::default().with_ants(0),
            AcoConfig::default().with_iterations(0),
            AcoConfig::default().with_threads(0),
            AcoConfig { evaporation: 1.0, ..AcoConfig::default() },
            AcoConfig { evaporation: 0.0, ..AcoConfig::default() },
            AcoConfig { alpha: -1.0, ..AcoConfig::default() },
            AcoConfig { deposit: 0.0, ..AcoConfig::default() },
            AcoConfig { beta: f64::NAN, ..AcoConfig::default() },
        ];

        for config in bad {
            assert!(matches!(config.validate(), Err(Error::InvalidConfiguration(_))), "{config:?}");
        }
    }

    #[test]
    fn loads_partial_json() {
        let config: AcoConfig = serde_json::from_str(r#"{"ants": 50, "seed": 9, "evaporation": 0.5}"#).unwrap();
        assert_eq!(config.ants, Some(50));
        assert_eq!(config.iterations, None);
        assert_eq!(config.seed, 9);
        assert_eq!(config.beta, 5.0);
    }
}
