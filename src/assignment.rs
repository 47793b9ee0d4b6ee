use crate::clause::Clause;
use crate::data::{Lit, Var, VarVec};

/// The value of a term (variable or literal) under the current assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Undefined,
    True,
    False,
}

impl Value {
    fn from_polarity(polarity: bool) -> Value {
        if polarity {
            Value::True
        } else {
            Value::False
        }
    }

    fn negate(self) -> Value {
        match self {
            Value::Undefined => Value::Undefined,
            Value::True => Value::False,
            Value::False => Value::True,
        }
    }
}

/// Maps every variable to its current truth value.
///
/// One mutable map backs every derived predicate the store exposes; clauses
/// themselves hold no per-literal bookkeeping (§4.1's tradeoff: linear work
/// per predicate for zero bookkeeping on assign/unassign).
#[derive(Debug, Clone)]
pub(crate) struct Assignment {
    values: VarVec<Option<bool>>,
}

impl Assignment {
    pub fn new(num_vars: usize) -> Self {
        Self {
            values: VarVec::with_len(num_vars, None),
        }
    }

    pub fn var_value(&self, v: Var) -> Value {
        match self.values[v] {
            None => Value::Undefined,
            Some(polarity) => Value::from_polarity(polarity),
        }
    }

    /// Value of `lit` under the current assignment (§3: `value(ℓ)`).
    pub fn literal_value(&self, lit: Lit) -> Value {
        let v = self.var_value(lit.var());
        if lit.is_pos() {
            v
        } else {
            v.negate()
        }
    }

    pub fn is_unassigned(&self, v: Var) -> bool {
        self.values[v].is_none()
    }

    pub fn is_clause_satisfied(&self, cls: Clause) -> bool {
        cls.iter()
            .any(|&lit| self.literal_value(lit) == Value::True)
    }

    pub fn assign(&mut self, v: Var, value: bool) {
        debug_assert!(self.is_unassigned(v), "variable {v} assigned twice");
        self.values[v] = Some(value);
    }

    pub fn unassign(&mut self, v: Var) {
        debug_assert!(!self.is_unassigned(v), "unassigning an already-undefined variable {v}");
        self.values[v] = None;
    }

    pub fn iter_unassigned(&self) -> impl Iterator<Item = Var> + '_ {
        self.values
            .iter_with_var()
            .filter(|(_, val)| val.is_none())
            .map(|(v, _)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_variable_yields_undefined_literal_value() {
        let a = Assignment::new(2);
        assert_eq!(a.literal_value(Lit::new(1)), Value::Undefined);
        assert_eq!(a.literal_value(Lit::new(-1)), Value::Undefined);
    }

    #[test]
    fn negative_literal_value_is_flipped() {
        let mut a = Assignment::new(1);
        a.assign(Var::new(1), true);
        assert_eq!(a.literal_value(Lit::new(1)), Value::True);
        assert_eq!(a.literal_value(Lit::new(-1)), Value::False);
    }

    #[test]
    fn unassign_restores_undefined() {
        let mut a = Assignment::new(1);
        a.assign(Var::new(1), false);
        a.unassign(Var::new(1));
        assert_eq!(a.literal_value(Lit::new(1)), Value::Undefined);
    }
}
