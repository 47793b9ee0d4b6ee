//! The DPLL engine (§4.6): unit propagation interleaved with decisions,
//! chronological backtracking on conflict, branch-flip before giving up on
//! a decision.
use tracing::debug;

use crate::data::{Lit, Var, VarVec};
use crate::heuristics::HeuristicSelector;
use crate::propagate::propagate_one_step;
use crate::stats::UpCounters;
use crate::store::CnfStore;
use crate::watch::WatchIndex;

/// A satisfying assignment, dense over every variable in the formula.
#[derive(Debug, Clone)]
pub struct Model(VarVec<bool>);

impl Model {
    pub fn value(&self, v: Var) -> bool {
        self.0[v]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Var, bool)> + '_ {
        self.0.iter_with_var().map(|(v, &val)| (v, val))
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v")?;
        for (v, val) in self.iter() {
            let signed = if val { v.get() as i64 } else { -(v.get() as i64) };
            write!(f, " {signed}")?;
        }
        write!(f, " 0")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Sat,
    Unsat,
}

struct Decision {
    var: Var,
    tried_negation: bool,
}

/// Run DPLL to completion and report SAT/UNSAT, extracting a [`Model`] on
/// the SAT branch.
pub fn solve(
    store: &mut CnfStore,
    watch: &WatchIndex,
    selector: &mut HeuristicSelector,
    stats: &mut UpCounters,
) -> (Verdict, Option<Model>) {
    let mut trail: Vec<Lit> = Vec::new();
    let mut decisions: Vec<Decision> = Vec::new();

    loop {
        let forced_or_decided = if let Some(lit) = propagate_one_step(store, stats) {
            trail.push(lit);
            lit
        } else if store.iter_unassigned().next().is_none() {
            debug!(decisions = decisions.len(), "all variables assigned, SAT");
            return (Verdict::Sat, Some(Model(store.extract_model())));
        } else {
            let var = selector.select(store, stats);
            let lit = Lit::from_var(var, true);
            store.assign(var, true);
            trail.push(lit);
            decisions.push(Decision {
                var,
                tried_negation: false,
            });
            debug!(variable = %var, "new decision variable");
            lit
        };

        if has_conflict(store, watch, forced_or_decided) {
            debug!(literal = %forced_or_decided, "conflict");
            if !roll_back(store, &mut trail, &mut decisions) {
                debug!("decision stack exhausted, UNSAT");
                return (Verdict::Unsat, None);
            }
        }
    }
}

/// `lit` just became true; a clause has gone empty if it contained `-lit`
/// and every other literal in it is already False (§4.6 step 2).
fn has_conflict(store: &CnfStore, watch: &WatchIndex, lit: Lit) -> bool {
    watch.clauses_with(-lit).iter().any(|&idx| store.is_empty(idx))
}

/// Unwind the trail to the most recent decision that still has an untried
/// branch, flip it, or pop further up the stack if both branches of the
/// top decision are exhausted. Returns `false` once the decision stack is
/// empty — the formula is UNSAT.
fn roll_back(store: &mut CnfStore, trail: &mut Vec<Lit>, decisions: &mut Vec<Decision>) -> bool {
    loop {
        let Some(decision) = decisions.last_mut() else {
            while let Some(lit) = trail.pop() {
                store.unassign(lit.var());
            }
            return false;
        };

        while let Some(&lit) = trail.last() {
            if lit.var() == decision.var {
                break;
            }
            trail.pop();
            store.unassign(lit.var());
        }
        let decided_lit = trail.pop().expect("decision literal must be on the trail");
        store.unassign(decision.var);

        if !decision.tried_negation {
            decision.tried_negation = true;
            let flipped = -decided_lit;
            store.assign(decision.var, flipped.is_pos());
            trail.push(flipped);
            return true;
        }
        decisions.pop();
    }
}
