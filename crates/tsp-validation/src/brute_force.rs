use tsp_core::{DistanceMatrix, Error, Result, Tour};

pub const MAX_BRUTE_FORCE_CITIES: usize = 10;

/// Optimal tour by enumerating every visiting order of cities `1..n` behind
/// city 0. Ties keep the first order found in lexicographic order.
pub fn brute_force(matrix: &DistanceMatrix) -> Result<(Tour, f64)> {
    matrix.validate_for_tour()?;
    let n = matrix.size();
    if n > MAX_BRUTE_FORCE_CITIES {
        return Err(Error::invalid_input(format!(
            "brute force is limited to {MAX_BRUTE_FORCE_CITIES} cities, got {n}"
        )));
    }

    let mut order: Vec<usize> = (0..n).collect();
    let mut best_order = order.clone();
    let mut best_cost = f64::INFINITY;

    loop {
        let cost = matrix.path_cost(&order) + matrix.get(order[n - 1], 0);
        if cost < best_cost {
            best_cost = cost;
            best_order.copy_from_slice(&order);
        }
        if !next_permutation(&mut order[1..]) {
            break;
        }
    }

    Ok((Tour::from_open(best_order)?, best_cost))
}

fn next_permutation(items: &mut [usize]) -> bool {
    if items.len() < 2 {
        return false;
    }

    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    let mut j = items.len() - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}
