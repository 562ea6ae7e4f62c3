use tsp_core::{DistanceMatrix, Error, Result, Tour};

/// Greedy nearest-neighbour tour from `start`, rotated so it begins at city 0.
/// Ties go to the lower city index.
pub fn nearest_neighbor(matrix: &DistanceMatrix, start: usize) -> Result<(Tour, f64)> {
    let n = matrix.size();
    if start >= n {
        return Err(Error::invalid_input(format!(
            "start city {start} is out of range for {n} cities"
        )));
    }

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);

    let mut current = start;
    visited[current] = true;
    order.push(current);

    for _ in 1..n {
        let row = matrix.row(current);
        let mut next = usize::MAX;
        for city in 0..n {
            if !visited[city] && (next == usize::MAX || row[city] < row[next]) {
                next = city;
            }
        }

        visited[next] = true;
        order.push(next);
        current = next;
    }

    if let Some(zero) = order.iter().position(|&c| c == 0) {
        order.rotate_left(zero);
    }

    let tour = Tour::from_open(order)?;
    let cost = tour.cost(matrix);
    Ok((tour, cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsp_core::Point;

    #[test]
    fn follows_nearest_unvisited_city() {
        let matrix = DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ]);

        let (tour, cost) = nearest_neighbor(&matrix, 0).unwrap();
        assert_eq!(tour.cities(), &[0, 2, 3, 1, 0]);
        assert_eq!(cost, 10.0);
    }

    #[test]
    fn equal_distances_prefer_lower_index() {
        let matrix = DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, -1.0),
        ]);

        let (tour, _) = nearest_neighbor(&matrix, 0).unwrap();
        assert_eq!(tour.cities(), &[0, 1, 2, 0]);
    }

    #[test]
    fn empty_matrix_and_out_of_range_start_are_invalid_input() {
        let empty = DistanceMatrix::from_points(&[]);
        assert!(matches!(nearest_neighbor(&empty, 0), Err(Error::InvalidInput(_))));

        let matrix = DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ]);
        assert!(matches!(nearest_neighbor(&matrix, 3), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn rotates_to_start_at_city_zero() {
        let matrix = DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ]);

        let (tour, cost) = nearest_neighbor(&matrix, 2).unwrap();
        assert_eq!(tour.cities(), &[0, 2, 1, 0]);
        assert_eq!(cost, 4.0);
    }
}
