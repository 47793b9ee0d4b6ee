//! Clauses are stored contiguously in one arena.
//!
//! Unlike the teacher crate's `ClauseDB`, clauses here are never mutated or
//! garbage-collected after insertion: the store is built once by ingest and
//! preprocessing, then only read for the rest of the solver's life (§3 of
//! the spec: "No clauses are added or removed after preprocessing").
use std::ops::Range;

use crate::data::Lit;

pub type Clause<'db> = &'db [Lit];

/// Index of a clause in a [`ClauseDb`]. Cheap to copy, stable for the
/// lifetime of the database (there is no compaction).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct ClauseIdx(u32);

#[derive(Clone, Debug, Default)]
pub struct ClauseDb {
    literals: Vec<Lit>,
    ranges: Vec<Range<u32>>,
}

impl ClauseDb {
    pub fn new() -> Self {
        Default::default()
    }

    /// Build a database from finalized clauses, in the order given. The
    /// resulting `ClauseIdx`es are `0..clauses.len()` in that order.
    pub fn build(clauses: &[Vec<Lit>]) -> Self {
        let mut db = ClauseDb::new();
        for cls in clauses {
            db.insert_clause(cls);
        }
        db
    }

    fn insert_clause(&mut self, cls: &[Lit]) -> ClauseIdx {
        let start = self.literals.len() as u32;
        self.literals.extend_from_slice(cls);
        let end = self.literals.len() as u32;
        let idx = ClauseIdx(self.ranges.len() as u32);
        self.ranges.push(start..end);
        idx
    }

    pub fn get(&self, idx: ClauseIdx) -> Clause<'_> {
        let range = self.ranges[idx.0 as usize].clone();
        &self.literals[range.start as usize..range.end as usize]
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClauseIdx, Clause<'_>)> + '_ {
        self.ranges.iter().enumerate().map(|(i, range)| {
            (
                ClauseIdx(i as u32),
                &self.literals[range.start as usize..range.end as usize],
            )
        })
    }

    pub fn indices(&self) -> impl Iterator<Item = ClauseIdx> {
        (0..self.ranges.len() as u32).map(ClauseIdx)
    }
}
