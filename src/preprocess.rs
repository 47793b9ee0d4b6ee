//! Preprocessing (§4.2): optional duplicate-clause removal at ingest time,
//! optional subsumption elimination afterwards. Both are verdict-neutral
//! (§8): running either, both, or neither never changes SAT/UNSAT.
use crate::data::Lit;

fn sorted(cls: &[Lit]) -> Vec<Lit> {
    let mut v = cls.to_vec();
    v.sort_unstable();
    v
}

/// Drop every clause equal, modulo literal order, to an earlier clause.
/// Order of the surviving clauses is preserved.
pub fn remove_duplicates(clauses: Vec<Vec<Lit>>) -> Vec<Vec<Lit>> {
    let mut seen: Vec<Vec<Lit>> = Vec::with_capacity(clauses.len());
    let mut kept = Vec::with_capacity(clauses.len());

    for cls in clauses {
        let key = sorted(&cls);
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        kept.push(cls);
    }
    kept
}

/// `A ⊆ B` as literal sets, with `A != B` — A subsumes B.
///
/// Per §9's open question, this always sorts a private copy of each
/// clause, regardless of whether `remove_duplicates` already ran.
fn subsumes(a_sorted: &[Lit], b_sorted: &[Lit]) -> bool {
    if a_sorted.len() >= b_sorted.len() {
        return false;
    }
    a_sorted.iter().all(|lit| b_sorted.binary_search(lit).is_ok())
}

/// Remove every clause that is subsumed by some other clause.
pub fn subsume(clauses: Vec<Vec<Lit>>) -> Vec<Vec<Lit>> {
    let sorted_clauses: Vec<Vec<Lit>> = clauses.iter().map(|c| sorted(c)).collect();

    let keep: Vec<bool> = (0..clauses.len())
        .map(|i| {
            !sorted_clauses
                .iter()
                .enumerate()
                .any(|(j, other)| i != j && subsumes(other, &sorted_clauses[i]))
        })
        .collect();

    clauses
        .into_iter()
        .zip(keep)
        .filter_map(|(cls, keep)| keep.then_some(cls))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lits(v: &[i32]) -> Vec<Lit> {
        v.iter().map(|&i| Lit::new(i)).collect()
    }

    #[test]
    fn duplicate_removal_keeps_first_occurrence_only() {
        let clauses = vec![lits(&[1, 2]), lits(&[2, 1]), lits(&[3])];
        let result = remove_duplicates(clauses);
        assert_eq!(result, vec![lits(&[1, 2]), lits(&[3])]);
    }

    #[test]
    fn subsumption_removes_superset_clauses() {
        // {1} subsumes {1, 2}
        let clauses = vec![lits(&[1]), lits(&[1, 2]), lits(&[3, 4])];
        let result = subsume(clauses);
        assert_eq!(result, vec![lits(&[1]), lits(&[3, 4])]);
    }

    #[test]
    fn equal_clauses_are_not_mutually_subsuming() {
        // Subsumption alone (no dedup) must not delete exact duplicates.
        let clauses = vec![lits(&[1, 2]), lits(&[1, 2])];
        let result = subsume(clauses);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn unrelated_clauses_all_survive() {
        let clauses = vec![lits(&[1, 2]), lits(&[3, 4])];
        let result = subsume(clauses);
        assert_eq!(result.len(), 2);
    }
}
