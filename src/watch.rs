//! The watch index (§4.3): for every signed literal, the clauses that
//! contain it. Built once after preprocessing and never updated — this is
//! deliberately not the two-watched-literals scheme of modern CDCL
//! solvers, just a static occurrence index used to localize the conflict
//! scan in [`crate::dpll`] to the clauses that could plausibly have just
//! become empty.
use crate::clause::{ClauseDb, ClauseIdx};
use crate::data::{Lit, LitVec};

pub struct WatchIndex {
    by_literal: LitVec<Vec<ClauseIdx>>,
}

impl WatchIndex {
    pub fn build(num_vars: usize, clauses: &ClauseDb) -> Self {
        let mut by_literal = LitVec::with_vars(num_vars, Vec::new());
        for (idx, cls) in clauses.iter() {
            for &lit in cls {
                by_literal[lit].push(idx);
            }
        }
        WatchIndex { by_literal }
    }

    /// Clauses containing the exact signed literal `lit`.
    pub fn clauses_with(&self, lit: Lit) -> &[ClauseIdx] {
        &self.by_literal[lit]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Lit;

    #[test]
    fn indexes_by_exact_signed_literal() {
        let clauses = vec![vec![Lit::new(1), Lit::new(-2)], vec![Lit::new(-1)]];
        let db = ClauseDb::build(&clauses);
        let watch = WatchIndex::build(2, &db);

        assert_eq!(watch.clauses_with(Lit::new(1)).len(), 1);
        assert_eq!(watch.clauses_with(Lit::new(-1)).len(), 1);
        assert_eq!(watch.clauses_with(Lit::new(2)).len(), 0);
        assert_eq!(watch.clauses_with(Lit::new(-2)).len(), 1);
    }
}
