use tsp_bounds::MstScratch;
use tsp_core::DistanceMatrix;

/// Counters collected during one solve. Diagnostic only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_expanded: u64,
    pub pruned_by_edge: u64,
    pub pruned_by_mst: u64,
    pub pruned_by_symmetry: u64,
    pub improvements: u64,
}

/// Mutable state of one in-flight search.
///
/// `path`, `visited` and `cost` always describe the same partial tour: bit
/// `i` of `visited` is set iff `i` is on `path`, and `cost` is the sum of the
/// edges along `path`. The incumbent (`best_path`, `best_cost`) only ever
/// changes as a pair.
pub struct SearchContext<'a> {
    pub matrix: &'a DistanceMatrix,
    pub n: usize,
    pub full_mask: u64,

    pub path: Vec<usize>,
    pub visited: u64,
    pub cost: f64,

    pub best_path: Vec<usize>,
    pub best_cost: f64,

    pub stats: SearchStats,
    pub mst_scratch: MstScratch,
    // One candidate buffer per depth, reused across siblings
    pub candidates: Vec<Vec<(f64, usize)>>,
}

impl<'a> SearchContext<'a> {
    pub fn new(matrix: &'a DistanceMatrix, incumbent: Vec<usize>, incumbent_cost: f64) -> Self {
        let n = matrix.size();
        let full_mask = if n >= 64 { u64::MAX } else { (1u64 << n) - 1 };

        let mut path = Vec::with_capacity(n + 1);
        path.push(0);

        SearchContext {
            matrix,
            n,
            full_mask,
            path,
            visited: 1,
            cost: 0.0,
            best_path: incumbent,
            best_cost: incumbent_cost,
            stats: SearchStats::default(),
            mst_scratch: MstScratch::with_capacity(n),
            candidates: (0..=n).map(|_| Vec::with_capacity(n)).collect(),
        }
    }

    #[inline(always)]
    pub fn current(&self) -> usize {
        self.path[self.path.len() - 1]
    }

    #[inline(always)]
    pub fn is_visited(&self, city: usize) -> bool {
        self.visited & (1u64 << city) != 0
    }

    /// Extends the partial tour by `city`, returning the cost to restore on undo.
    #[inline(always)]
    pub fn push(&mut self, city: usize, edge_cost: f64) -> f64 {
        let saved = self.cost;
        self.path.push(city);
        self.visited |= 1u64 << city;
        self.cost = saved + edge_cost;
        saved
    }

    #[inline(always)]
    pub fn pop(&mut self, saved_cost: f64) {
        if let Some(city) = self.path.pop() {
            self.visited &= !(1u64 << city);
        }
        self.cost = saved_cost;
    }

    /// Replaces the incumbent with the current path closed at city 0.
    pub fn record_incumbent(&mut self, total: f64) {
        self.best_path.clear();
        self.best_path.extend_from_slice(&self.path);
        self.best_path.push(0);
        self.best_cost = total;
        self.stats.improvements += 1;
    }
}
