use crate::error::{Error, Result};
use crate::geometry::{euclidean, Point};

const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// Square matrix of pairwise city distances.
///
/// Stored flattened row-major for cache locality. Immutable once built; the
/// solvers only ever borrow it.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Euclidean distances between every pair of `points`.
    pub fn from_points(points: &[Point]) -> Self {
        Self::from_points_with(points, euclidean)
    }

    pub fn from_points_with<F>(points: &[Point], metric: F) -> Self
    where
        F: Fn(&Point, &Point) -> f64,
    {
        let size = points.len();
        let mut data = vec![0.0; size * size];

        for i in 0..size {
            for j in (i + 1)..size {
                let d = metric(&points[i], &points[j]);
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }

        Self { size, data }
    }

    /// Wraps a caller-supplied matrix. Rejects empty, ragged, negative and
    /// non-finite input; symmetry is checked later by [`Self::validate_for_tour`].
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(Error::invalid_input("distance matrix is empty"));
        }

        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::invalid_input(format!(
                    "distance matrix is not square: row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            if let Some((j, value)) = row.iter().enumerate().find(|(_, v)| !v.is_finite() || **v < 0.0) {
                return Err(Error::invalid_input(format!(
                    "distance matrix entry ({i}, {j}) must be a finite non-negative number, got {value}"
                )));
            }
            data.extend(row);
        }

        Ok(Self { size, data })
    }

    /// Checks the preconditions shared by both solvers: at least three
    /// cities, finite non-negative entries, zero diagonal and symmetry.
    pub fn validate_for_tour(&self) -> Result<()> {
        if self.size < 3 {
            return Err(Error::invalid_input(format!(
                "a tour needs at least 3 cities, got {}",
                self.size
            )));
        }

        if let Some(idx) = self.data.iter().position(|v| !v.is_finite() || *v < 0.0) {
            let (i, j) = (idx / self.size, idx % self.size);
            return Err(Error::invalid_input(format!(
                "distance matrix entry ({i}, {j}) must be a finite non-negative number, got {}",
                self.data[idx]
            )));
        }

        for i in 0..self.size {
            let diagonal = self.get(i, i);
            if diagonal != 0.0 {
                return Err(Error::invalid_input(format!(
                    "diagonal entry ({i}, {i}) must be zero, got {diagonal}"
                )));
            }
            for j in (i + 1)..self.size {
                let (ij, ji) = (self.get(i, j), self.get(j, i));
                if (ij - ji).abs() > SYMMETRY_TOLERANCE * ij.abs().max(1.0) {
                    return Err(Error::invalid_input(format!(
                        "distance matrix is asymmetric at ({i}, {j}): {ij} != {ji}"
                    )));
                }
            }
        }

        Ok(())
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    #[inline(always)]
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Sum of consecutive edge costs along `path` (not closed automatically).
    pub fn path_cost(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.size.max(1)).map(<[f64]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
        ]
    }

    #[test]
    fn builds_symmetric_euclidean_matrix() {
        let matrix = DistanceMatrix::from_points(&square());

        assert_eq!(matrix.size(), 4);
        assert_eq!(matrix.get(0, 1), 10.0);
        assert!((matrix.get(0, 2) - 200f64.sqrt()).abs() < 1e-12);
        assert_eq!(matrix.get(2, 0), matrix.get(0, 2));
        assert_eq!(matrix.row(3)[0], 10.0);
        assert_eq!(matrix.row(3)[2], 10.0);
        assert_eq!(matrix.row(3)[3], 0.0);
        assert!(matrix.validate_for_tour().is_ok());
    }

    #[test]
    fn path_cost_sums_consecutive_edges() {
        let matrix = DistanceMatrix::from_points(&square());
        assert_eq!(matrix.path_cost(&[0, 1, 2, 3, 0]), 40.0);
        assert_eq!(matrix.path_cost(&[2]), 0.0);
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn rejects_negative_and_nan_entries() {
        assert!(DistanceMatrix::from_rows(vec![vec![0.0, -1.0], vec![-1.0, 0.0]]).is_err());
        assert!(DistanceMatrix::from_rows(vec![vec![0.0, f64::NAN], vec![f64::NAN, 0.0]]).is_err());
        assert!(DistanceMatrix::from_rows(Vec::new()).is_err());
    }

    #[test]
    fn tour_validation_rejects_small_asymmetric_and_non_zero_diagonal() {
        let two = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        assert!(two.validate_for_tour().is_err());

        let asymmetric = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![2.0, 4.0, 0.0],
        ])
        .unwrap();
        assert!(asymmetric.validate_for_tour().is_err());

        let diagonal = DistanceMatrix::from_rows(vec![
            vec![1.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![2.0, 3.0, 0.0],
        ])
        .unwrap();
        assert!(diagonal.validate_for_tour().is_err());
    }

    #[test]
    fn tour_validation_rejects_non_finite_coordinates() {
        let mut points: Vec<Point> = (0..9).map(|i| Point::new(i as f64, (i * i) as f64)).collect();
        points[3] = Point::new(f64::NAN, 0.0);
        let nan = DistanceMatrix::from_points(&points);
        assert!(matches!(nan.validate_for_tour(), Err(Error::InvalidInput(_))));

        points[3] = Point::new(f64::INFINITY, 0.0);
        let infinite = DistanceMatrix::from_points(&points);
        assert!(matches!(infinite.validate_for_tour(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn rows_round_trip_through_flat_storage() {
        let matrix = DistanceMatrix::from_points(&square());
        let rebuilt = DistanceMatrix::from_rows(matrix.to_rows()).unwrap();
        assert_eq!(rebuilt, matrix);
    }
}
