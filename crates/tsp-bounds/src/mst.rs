use tsp_core::DistanceMatrix;

/// Reusable buffers for [`mst_cost_masked`] so repeated calls inside a search
/// do not allocate.
#[derive(Clone, Debug, Default)]
pub struct MstScratch {
    nodes: Vec<usize>,
    key: Vec<f64>,
    in_tree: Vec<bool>,
}

impl MstScratch {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(n),
            key: Vec::with_capacity(n),
            in_tree: Vec::with_capacity(n),
        }
    }
}

/// Weight of a minimum spanning tree over `subset`, using only edges between
/// cities of the subset. Duplicates are ignored; fewer than two distinct
/// cities cost nothing.
pub fn mst_cost(matrix: &DistanceMatrix, subset: &[usize]) -> f64 {
    let mut scratch = MstScratch::with_capacity(subset.len());
    for &city in subset {
        if !scratch.nodes.contains(&city) {
            scratch.nodes.push(city);
        }
    }

    prim(matrix, &mut scratch)
}

/// [`mst_cost`] over the cities whose bits are set in `mask`.
pub fn mst_cost_masked(matrix: &DistanceMatrix, mask: u64, scratch: &mut MstScratch) -> f64 {
    scratch.nodes.clear();
    let mut rest = mask;
    while rest != 0 {
        let city = rest.trailing_zeros() as usize;
        scratch.nodes.push(city);
        rest &= rest - 1;
    }

    prim(matrix, scratch)
}

/// Dense Prim, O(k²) over `scratch.nodes`.
fn prim(matrix: &DistanceMatrix, scratch: &mut MstScratch) -> f64 {
    let k = scratch.nodes.len();
    if k < 2 {
        return 0.0;
    }

    scratch.key.clear();
    scratch.key.resize(k, f64::INFINITY);
    scratch.in_tree.clear();
    scratch.in_tree.resize(k, false);
    scratch.key[0] = 0.0;

    let mut total = 0.0;
    for _ in 0..k {
        let mut u = usize::MAX;
        let mut best = f64::INFINITY;
        for i in 0..k {
            if !scratch.in_tree[i] && (u == usize::MAX || scratch.key[i] < best) {
                u = i;
                best = scratch.key[i];
            }
        }

        scratch.in_tree[u] = true;
        total += best;

        let row = matrix.row(scratch.nodes[u]);
        for v in 0..k {
            if !scratch.in_tree[v] {
                let d = row[scratch.nodes[v]];
                if d < scratch.key[v] {
                    scratch.key[v] = d;
                }
            }
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsp_core::Point;

    fn line() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(6.0, 0.0),
        ])
    }

    #[test]
    fn trivial_subsets_cost_nothing() {
        let matrix = line();
        assert_eq!(mst_cost(&matrix, &[]), 0.0);
        assert_eq!(mst_cost(&matrix, &[2]), 0.0);
        assert_eq!(mst_cost(&matrix, &[2, 2, 2]), 0.0);
    }

    #[test]
    fn collinear_points_span_their_extent() {
        let matrix = line();
        assert_eq!(mst_cost(&matrix, &[0, 1, 2, 3]), 6.0);
        assert_eq!(mst_cost(&matrix, &[3, 0, 3, 1]), 6.0);
        assert_eq!(mst_cost(&matrix, &[1, 2]), 2.0);
    }

    #[test]
    fn masked_variant_agrees_with_list_variant() {
        let matrix = line();
        let mut scratch = MstScratch::default();
        assert_eq!(mst_cost_masked(&matrix, 0b1111, &mut scratch), 6.0);
        assert_eq!(mst_cost_masked(&matrix, 0b1010, &mut scratch), mst_cost(&matrix, &[1, 3]));
        assert_eq!(mst_cost_masked(&matrix, 0b0100, &mut scratch), 0.0);
    }
}
