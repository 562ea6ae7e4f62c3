/// Per-edge pheromone levels, flattened row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct PheromoneMatrix {
    size: usize,
    levels: Vec<f64>,
}

impl PheromoneMatrix {
    /// Every entry, the unused diagonal included, starts at `initial`.
    pub fn new(size: usize, initial: f64) -> Self {
        Self { size, levels: vec![initial; size * size] }
    }

    #[inline(always)]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.levels[from * self.size + to]
    }

    pub fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate;
        for level in &mut self.levels {
            *level *= keep;
        }
    }

    /// Adds `deposit / cost` to both directions of every edge of each closed
    /// tour. Zero-cost tours (all cities coincident) deposit nothing.
    pub fn reinforce<'t, I>(&mut self, batch: I, deposit: f64)
    where
        I: IntoIterator<Item = (&'t [usize], f64)>,
    {
        for (tour, cost) in batch {
            if cost <= 0.0 {
                continue;
            }
            let amount = deposit / cost;
            for edge in tour.windows(2) {
                let (a, b) = (edge[0], edge[1]);
                self.levels[a * self.size + b] += amount;
                self.levels[b * self.size + a] += amount;
            }
        }
    }

    /// `tau^alpha * heuristic` for every entry, where `heuristic` already
    /// holds the inverse-distance term raised to beta.
    pub fn attraction(&self, alpha: f64, heuristic: &[f64], out: &mut Vec<f64>) {
        out.clear();
        out.extend(self.levels.iter().zip(heuristic).map(|(tau, eta)| tau.powf(alpha) * eta));
    }
}
