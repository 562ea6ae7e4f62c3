use std::time::{Duration, Instant};

use crossbeam_channel::unbounded;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tsp_core::{CancellationToken, DistanceMatrix, EdgeCost, Result, Tour};

use crate::ant::{construct_tour, heuristic_matrix, AntScratch};
use crate::config::AcoConfig;
use crate::pheromone::PheromoneMatrix;

/// Best-so-far snapshot taken at the end of one iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IterationSample {
    pub iteration: usize,
    pub best_cost: f64,
    /// Wall-clock time since the run started.
    pub elapsed: Duration,
}

#[derive(Clone, Debug)]
pub struct AcoSolution {
    pub tour: Tour,
    pub cost: f64,
    /// One sample per completed iteration; costs never increase and times
    /// strictly increase.
    pub history: Vec<IterationSample>,
    pub elapsed: Duration,
    /// Edge-by-edge costs of `tour`.
    pub trace: Vec<EdgeCost>,
    pub cancelled: bool,
}

impl AcoSolution {
    pub fn cost_history(&self) -> Vec<(usize, f64)> {
        self.history.iter().map(|s| (s.iteration, s.best_cost)).collect()
    }

    pub fn time_history(&self) -> Vec<Duration> {
        self.history.iter().map(|s| s.elapsed).collect()
    }
}

type AntTour = (Vec<usize>, f64);

pub struct AntColony<'a> {
    matrix: &'a DistanceMatrix,
    config: AcoConfig,
    cancellation: Option<CancellationToken>,
}

impl<'a> AntColony<'a> {
    pub fn new(matrix: &'a DistanceMatrix, config: AcoConfig) -> Self {
        Self { matrix, config, cancellation: None }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Runs the configured number of iterations (at least one, even when
    /// cancelled) and returns the best tour seen by any ant.
    pub fn run(&self) -> Result<AcoSolution> {
        self.config.validate()?;
        self.matrix.validate_for_tour()?;

        let n = self.matrix.size();
        let ants = self.config.ants_for(n);
        let iterations = self.config.iterations_for(n);
        let threads = self.config.threads.min(ants);

        let start = Instant::now();
        let mut master = Xoshiro256PlusPlus::seed_from_u64(self.config.seed);
        let heuristic = heuristic_matrix(self.matrix, self.config.beta);
        let mut pheromone = PheromoneMatrix::new(n, self.config.initial_pheromone);
        let mut attraction = Vec::with_capacity(n * n);
        let mut seeds = Vec::with_capacity(ants);

        let mut best: Option<AntTour> = None;
        let mut history: Vec<IterationSample> = Vec::with_capacity(iterations);
        let mut cancelled = false;

        for iteration in 0..iterations {
            pheromone.attraction(self.config.alpha, &heuristic, &mut attraction);
            seeds.clear();
            seeds.extend((0..ants).map(|_| master.gen::<u64>()));

            let batch = if threads > 1 {
                self.build_parallel(&attraction, &seeds, threads)
            } else {
                self.build_sequential(&attraction, &seeds)
            };

            for (tour, cost) in &batch {
                let improved = match &best {
                    Some((_, best_cost)) => cost < best_cost,
                    None => true,
                };
                if improved {
                    debug!("iteration {iteration}: improved best cost to {cost:.3}");
                    best = Some((tour.clone(), *cost));
                }
            }

            pheromone.evaporate(self.config.evaporation);
            pheromone.reinforce(batch.iter().map(|(tour, cost)| (tour.as_slice(), *cost)), self.config.deposit);

            let best_cost = best.as_ref().map_or(f64::INFINITY, |(_, cost)| *cost);
            let mut elapsed = start.elapsed();
            if let Some(last) = history.last() {
                if elapsed <= last.elapsed {
                    elapsed = last.elapsed + Duration::from_nanos(1);
                }
            }
            history.push(IterationSample { iteration, best_cost, elapsed });

            if self.cancellation.as_ref().is_some_and(CancellationToken::is_cancelled) {
                cancelled = true;
                break;
            }
        }

        let (cities, cost) = best.unwrap_or_default();
        let tour = Tour::from_closed(cities, n)?;
        let trace = tour.breakdown(self.matrix);
        let elapsed = history.last().map_or_else(|| start.elapsed(), |s| s.elapsed);

        info!(
            "aco: n={n} ants={ants} iterations={} cost={cost:.3} cancelled={cancelled} time={:.3}s",
            history.len(),
            elapsed.as_secs_f64()
        );

        Ok(AcoSolution { tour, cost, history, elapsed, trace, cancelled })
    }

    fn build_sequential(&self, attraction: &[f64], seeds: &[u64]) -> Vec<AntTour> {
        let mut scratch = AntScratch::default();
        seeds
            .iter()
            .map(|&seed| {
                let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                construct_tour(self.matrix, attraction, &mut rng, &mut scratch)
            })
            .collect()
    }

    /// Splits the ants over scoped workers that only read `attraction`;
    /// tours come back over a channel and are reordered by ant index so the
    /// batch matches the sequential one exactly.
    fn build_parallel(&self, attraction: &[f64], seeds: &[u64], threads: usize) -> Vec<AntTour> {
        let (sender, receiver) = unbounded::<(usize, AntTour)>();
        let chunk = seeds.len().div_ceil(threads);
        let matrix = self.matrix;

        std::thread::scope(|scope| {
            for (worker, chunk_seeds) in seeds.chunks(chunk).enumerate() {
                let sender = sender.clone();
                scope.spawn(move || {
                    let mut scratch = AntScratch::default();
                    for (offset, &seed) in chunk_seeds.iter().enumerate() {
                        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                        let ant = construct_tour(matrix, attraction, &mut rng, &mut scratch);
                        if sender.send((worker * chunk + offset, ant)).is_err() {
                            break;
                        }
                    }
                });
            }
        });
        drop(sender);

        let mut slots: Vec<Option<AntTour>> = vec![None; seeds.len()];
        for (index, ant) in receiver.iter() {
            slots[index] = Some(ant);
        }
        slots.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsp_core::{Error, Point};

    fn pentagon() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(5.0, 3.0),
            Point::new(2.0, 5.0),
            Point::new(-1.0, 3.0),
        ])
    }

    fn small() -> AcoConfig {
        AcoConfig::default().with_ants(10).with_iterations(30).with_seed(7)
    }

    #[test]
    fn returns_valid_tour_and_history() {
        let matrix = pentagon();
        let solution = AntColony::new(&matrix, small()).run().unwrap();

        assert_eq!(solution.history.len(), 30);
        assert!((solution.tour.cost(&matrix) - solution.cost).abs() < 1e-9);
        assert_eq!(solution.trace.len(), 5);
        assert!(!solution.cancelled);
        assert_eq!(solution.cost_history().last().map(|&(_, c)| c), Some(solution.cost));
    }

    #[test]
    fn parallel_construction_matches_sequential() {
        let matrix = pentagon();
        let sequential = AntColony::new(&matrix, small()).run().unwrap();
        let parallel = AntColony::new(&matrix, small().with_threads(3)).run().unwrap();

        assert_eq!(sequential.tour, parallel.tour);
        assert_eq!(sequential.cost_history(), parallel.cost_history());
    }

    #[test]
    fn cancellation_stops_after_first_iteration() {
        let matrix = pentagon();
        let token = CancellationToken::new();
        token.cancel();

        let solution = AntColony::new(&matrix, small()).with_cancellation(token).run().unwrap();
        assert!(solution.cancelled);
        assert_eq!(solution.history.len(), 1);
        assert!(Tour::from_closed(solution.tour.cities().to_vec(), 5).is_ok());
    }

    #[test]
    fn invalid_configuration_is_reported_before_work() {
        let matrix = pentagon();
        let config = AcoConfig { evaporation: 1.5, ..small() };
        assert!(matches!(AntColony::new(&matrix, config).run(), Err(Error::InvalidConfiguration(_))));
    }
}
