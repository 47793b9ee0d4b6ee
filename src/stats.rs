//! Per-literal unit-propagation statistics (§3 "UP counter", §4.5 the `Up`
//! heuristic). Monotonically non-decreasing: never reset on backtrack,
//! which deliberately biases the `Up` heuristic towards variables forced
//! most often over the whole search, not just the current branch.
use crate::data::{Var, VarVec};

#[derive(Debug, Clone)]
pub struct UpCounters {
    counts: VarVec<u64>,
}

impl UpCounters {
    pub fn new(num_vars: usize) -> Self {
        Self {
            counts: VarVec::with_len(num_vars, 0),
        }
    }

    pub fn record_forced(&mut self, v: Var) {
        self.counts[v] += 1;
    }

    pub fn get(&self, v: Var) -> u64 {
        self.counts[v]
    }
}
