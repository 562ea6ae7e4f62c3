use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tsp_core::{Instance, Point};

const SIDE: f64 = 100.0;

/// `n` cities drawn uniformly from the `[0, 100)²` square, named `C0..`.
pub fn random_instance(n: usize, seed: u64) -> Instance {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let points = (0..n).map(|_| Point::new(rng.gen::<f64>() * SIDE, rng.gen::<f64>() * SIDE)).collect();

    Instance {
        points,
        names: Some((0..n).map(|i| format!("C{i}")).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_instances_are_reproducible() {
        let a = random_instance(12, 99);
        let b = random_instance(12, 99);
        let c = random_instance(12, 100);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.points.iter().all(|p| (0.0..SIDE).contains(&p.x) && (0.0..SIDE).contains(&p.y)));
    }
}
