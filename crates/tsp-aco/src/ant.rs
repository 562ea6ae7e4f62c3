use rand::Rng;
use tsp_core::DistanceMatrix;

/// Keeps zero distances (coincident cities) from dividing by zero.
pub(crate) const DISTANCE_EPSILON: f64 = 1e-10;

/// `(1 / (d + eps))^beta` for every entry of `matrix`.
pub(crate) fn heuristic_matrix(matrix: &DistanceMatrix, beta: f64) -> Vec<f64> {
    let n = matrix.size();
    (0..n)
        .flat_map(|i| matrix.row(i).iter().map(|d| (1.0 / (d + DISTANCE_EPSILON)).powf(beta)))
        .collect()
}

/// Per-ant buffers, reused across the ants a worker builds.
#[derive(Default)]
pub(crate) struct AntScratch {
    remaining: Vec<usize>,
    weights: Vec<f64>,
}

/// Builds one closed tour from city 0, drawing each next city with
/// probability proportional to its attraction. Falls back to a uniform draw
/// when the attractions of all remaining cities sum to zero (underflow) or
/// overflow.
pub(crate) fn construct_tour<R: Rng>(
    matrix: &DistanceMatrix,
    attraction: &[f64],
    rng: &mut R,
    scratch: &mut AntScratch,
) -> (Vec<usize>, f64) {
    let n = matrix.size();
    let mut tour = Vec::with_capacity(n + 1);
    tour.push(0);

    scratch.remaining.clear();
    scratch.remaining.extend(1..n);

    let mut current = 0;
    let mut cost = 0.0;

    while !scratch.remaining.is_empty() {
        let row = &attraction[current * n..(current + 1) * n];

        scratch.weights.clear();
        scratch.weights.extend(scratch.remaining.iter().map(|&city| row[city]));
        let total: f64 = scratch.weights.iter().sum();

        let pick = if total > 0.0 && total.is_finite() {
            let target = rng.gen::<f64>() * total;
            let mut acc = 0.0;
            // rounding can leave `target` at `total`; land on the last positive weight
            let mut chosen = scratch.weights.iter().rposition(|&w| w > 0.0).unwrap_or(0);
            for (idx, weight) in scratch.weights.iter().enumerate() {
                acc += weight;
                if target < acc {
                    chosen = idx;
                    break;
                }
            }
            chosen
        } else {
            rng.gen_range(0..scratch.remaining.len())
        };

        let next = scratch.remaining.remove(pick);
        cost += matrix.get(current, next);
        tour.push(next);
        current = next;
    }

    cost += matrix.get(current, 0);
    tour.push(0);

    (tour, cost)
}
