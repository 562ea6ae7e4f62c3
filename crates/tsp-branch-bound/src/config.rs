use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchBoundConfig {
    /// Only explore one traversal direction of each cycle by requiring the
    /// second city's index to be below the last city's index.
    pub break_symmetry: bool,
    /// Stop after expanding this many search nodes; the incumbent is then
    /// returned without an optimality guarantee.
    pub node_limit: Option<u64>,
}

impl BranchBoundConfig {
    pub fn with_symmetry_breaking(mut self, enabled: bool) -> Self {
        self.break_symmetry = enabled;
        self
    }

    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }
}
