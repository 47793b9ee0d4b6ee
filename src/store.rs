//! The CNF store (§4.1): owns the clause database and the current partial
//! assignment, and answers the derived predicates the rest of the solver
//! needs (`literal_value`, `open_size`, `is_unit`, `is_satisfied`, `is_empty`).
use crate::assignment::{Assignment, Value};
use crate::clause::{Clause, ClauseDb, ClauseIdx};
use crate::data::{Lit, Var};

pub struct CnfStore {
    num_vars: usize,
    clauses: ClauseDb,
    assignment: Assignment,
}

impl CnfStore {
    pub fn new(num_vars: usize, clauses: ClauseDb) -> Self {
        Self {
            num_vars,
            clauses,
            assignment: Assignment::new(num_vars),
        }
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn clause(&self, idx: ClauseIdx) -> Clause<'_> {
        self.clauses.get(idx)
    }

    pub fn clause_indices(&self) -> impl Iterator<Item = ClauseIdx> {
        self.clauses.indices()
    }

    pub fn literal_value(&self, lit: Lit) -> Value {
        self.assignment.literal_value(lit)
    }

    pub fn is_unassigned(&self, v: Var) -> bool {
        self.assignment.is_unassigned(v)
    }

    pub fn iter_unassigned(&self) -> impl Iterator<Item = Var> + '_ {
        self.assignment.iter_unassigned()
    }

    /// Count of literals in clause `idx` whose variable is still Undefined
    /// (§3: `open-size(K)`).
    pub fn open_size(&self, idx: ClauseIdx) -> usize {
        self.clause(idx)
            .iter()
            .filter(|&&lit| self.literal_value(lit) == Value::Undefined)
            .count()
    }

    /// `satisfied(K)`: some literal in the clause is True.
    pub fn is_satisfied(&self, idx: ClauseIdx) -> bool {
        self.clause(idx)
            .iter()
            .any(|&lit| self.literal_value(lit) == Value::True)
    }

    /// `empty(K)`: every literal in the clause is False.
    pub fn is_empty(&self, idx: ClauseIdx) -> bool {
        self.clause(idx)
            .iter()
            .all(|&lit| self.literal_value(lit) == Value::False)
    }

    /// `unit(K)`: exactly one undefined literal and no satisfied literal.
    /// Satisfaction takes precedence over unit-by-count (§4.4).
    pub fn is_unit(&self, idx: ClauseIdx) -> bool {
        if self.is_satisfied(idx) {
            return false;
        }
        self.open_size(idx) == 1
    }

    /// The sole undefined literal of a unit clause.
    ///
    /// # Panics
    /// Panics if `idx` is not unit — this is a `LogicError` per §7: asking
    /// for the unit literal of a non-unit clause indicates a caller bug,
    /// not a bad input.
    pub fn unit_literal(&self, idx: ClauseIdx) -> Lit {
        self.clause(idx)
            .iter()
            .copied()
            .find(|&lit| self.literal_value(lit) == Value::Undefined)
            .unwrap_or_else(|| unreachable!("unit_literal called on non-unit clause {idx:?}"))
    }

    pub fn assign(&mut self, v: Var, value: bool) {
        self.assignment.assign(v, value);
    }

    pub fn unassign(&mut self, v: Var) {
        self.assignment.unassign(v);
    }

    pub fn is_clause_satisfied(&self, cls: Clause) -> bool {
        self.assignment.is_clause_satisfied(cls)
    }

    /// Every input clause has at least one True literal — the postcondition
    /// checked after a SAT verdict (§8 soundness property).
    pub fn all_clauses_satisfied(&self) -> bool {
        self.clause_indices().all(|idx| self.is_satisfied(idx))
    }

    /// Read out a full assignment.
    ///
    /// # Panics
    /// Panics if any variable is still Undefined — callers only reach for a
    /// model after a SAT verdict, where every variable is decided.
    pub fn extract_model(&self) -> crate::data::VarVec<bool> {
        let mut model = crate::data::VarVec::with_len(self.num_vars, false);
        for i in 1..=self.num_vars as u32 {
            let v = Var::new(i);
            model[v] = match self.assignment.var_value(v) {
                Value::True => true,
                Value::False => false,
                Value::Undefined => unreachable!("extract_model called with variable {v} undefined"),
            };
        }
        model
    }
}
