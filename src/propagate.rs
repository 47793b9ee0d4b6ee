//! The unit propagator (§4.4): a single-step scan over all clauses in
//! ascending index order, forcing at most one literal per call so the
//! engine's conflict probe (§4.6 step 2) always sees the trail's top.
use tracing::trace;

use crate::data::Lit;
use crate::stats::UpCounters;
use crate::store::CnfStore;

/// Scan for a unit clause and force its remaining literal.
///
/// Returns the forced literal if a clause was unit, or `None` if no clause
/// is currently unit (propagation is at a fixed point).
pub fn propagate_one_step(store: &mut CnfStore, stats: &mut UpCounters) -> Option<Lit> {
    for idx in store.clause_indices() {
        if store.is_unit(idx) {
            let lit = store.unit_literal(idx);
            store.assign(lit.var(), lit.is_pos());
            stats.record_forced(lit.var());
            trace!(literal = %lit, clause = ?idx, "unit propagation forced literal");
            return Some(lit);
        }
    }
    None
}
