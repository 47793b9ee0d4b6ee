//! The branching heuristic selector (§4.5): seven strategies for choosing
//! the next decision variable, all restricted to currently-Undefined
//! variables and all deterministic except [`Heuristic::Random`].
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::Var;
use crate::error::StrategyError;
use crate::store::CnfStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    First,
    Random,
    Max,
    Moms,
    Weighted,
    Up,
    Aupc,
}

impl FromStr for Heuristic {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(Heuristic::First),
            "random" => Ok(Heuristic::Random),
            "max" => Ok(Heuristic::Max),
            "moms" => Ok(Heuristic::Moms),
            "weighted" => Ok(Heuristic::Weighted),
            "up" => Ok(Heuristic::Up),
            "aupc" => Ok(Heuristic::Aupc),
            other => Err(StrategyError::UnknownHeuristic(other.to_string())),
        }
    }
}

impl Heuristic {
    pub fn name(self) -> &'static str {
        match self {
            Heuristic::First => "first",
            Heuristic::Random => "random",
            Heuristic::Max => "max",
            Heuristic::Moms => "moms",
            Heuristic::Weighted => "weighted",
            Heuristic::Up => "up",
            Heuristic::Aupc => "aupc",
        }
    }
}

/// Lets the CLI accept `--heuristic` as a `clap` value enum directly,
/// reusing the same names [`Heuristic::name`] and [`FromStr`] already use.
impl clap::ValueEnum for Heuristic {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Heuristic::First,
            Heuristic::Random,
            Heuristic::Max,
            Heuristic::Moms,
            Heuristic::Weighted,
            Heuristic::Up,
            Heuristic::Aupc,
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.name()))
    }
}

/// Selects the next decision variable under a configured heuristic.
///
/// `Random` needs an explicit seed (§4.5, §9: the source's unseeded RNG is
/// an open question this implementation resolves by refusing to guess a
/// default).
pub struct HeuristicSelector {
    heuristic: Heuristic,
    rng: Option<StdRng>,
}

impl HeuristicSelector {
    pub fn new(heuristic: Heuristic, seed: Option<u64>) -> Result<Self, StrategyError> {
        let rng = match (heuristic, seed) {
            (Heuristic::Random, None) => return Err(StrategyError::MissingSeed),
            (Heuristic::Random, Some(seed)) => Some(StdRng::seed_from_u64(seed)),
            (_, _) => None,
        };
        Ok(Self { heuristic, rng })
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Pick the next decision variable. `store` must have at least one
    /// Undefined variable (the engine never calls this from an
    /// all-assigned state, per §4.5).
    pub fn select(&mut self, store: &CnfStore, up: &crate::stats::UpCounters) -> Var {
        match self.heuristic {
            Heuristic::First => Self::pick_first(store),
            Heuristic::Random => self.pick_random(store),
            Heuristic::Max => Self::pick_by_score(store, |s, v| Self::max_score(s, v)),
            Heuristic::Moms => Self::pick_by_score(store, |s, v| Self::moms_score(s, v)),
            Heuristic::Weighted => Self::pick_by_score(store, |s, v| Self::weighted_score(s, v)),
            Heuristic::Up => Self::pick_by_score(store, |s, v| Self::up_score(s, v, up)),
            Heuristic::Aupc => Self::pick_by_score(store, |s, v| Self::aupc_score(s, v)),
        }
    }

    fn pick_first(store: &CnfStore) -> Var {
        store
            .iter_unassigned()
            .next()
            .expect("select() called with no unassigned variables")
    }

    fn pick_random(&mut self, store: &CnfStore) -> Var {
        let candidates: Vec<Var> = store.iter_unassigned().collect();
        assert!(
            !candidates.is_empty(),
            "select() called with no unassigned variables"
        );
        let rng = self.rng.as_mut().expect("random heuristic without rng");
        let i = rng.gen_range(0..candidates.len());
        candidates[i]
    }

    /// Ascending-id iteration plus a strict `>` comparison gives the lowest
    /// id its tie-break (§4.5, §9: deterministic ordering, not a hash map).
    fn pick_by_score(store: &CnfStore, score: impl Fn(&CnfStore, Var) -> f64) -> Var {
        let mut best: Option<(Var, f64)> = None;
        for v in store.iter_unassigned() {
            let s = score(store, v);
            if best.map_or(true, |(_, best_s)| s > best_s) {
                best = Some((v, s));
            }
        }
        best.expect("select() called with no unassigned variables").0
    }

    fn non_satisfied_clauses(store: &CnfStore) -> impl Iterator<Item = crate::clause::ClauseIdx> + '_ {
        store
            .clause_indices()
            .filter(move |&idx| !store.is_satisfied(idx))
    }

    fn max_score(store: &CnfStore, v: Var) -> f64 {
        Self::non_satisfied_clauses(store)
            .filter(|&idx| store.clause(idx).iter().any(|l| l.var() == v))
            .count() as f64
    }

    fn min_open_size(store: &CnfStore) -> usize {
        Self::non_satisfied_clauses(store)
            .map(|idx| store.open_size(idx))
            .min()
            .unwrap_or(0)
    }

    fn moms_score(store: &CnfStore, v: Var) -> f64 {
        let min_len = Self::min_open_size(store);
        Self::non_satisfied_clauses(store)
            .filter(|&idx| store.open_size(idx) == min_len)
            .filter(|&idx| store.clause(idx).iter().any(|l| l.var() == v))
            .count() as f64
    }

    fn weighted_score(store: &CnfStore, v: Var) -> f64 {
        Self::non_satisfied_clauses(store)
            .filter(|&idx| store.clause(idx).iter().any(|l| l.var() == v))
            .map(|idx| 2f64.powi(-(store.open_size(idx) as i32)))
            .sum()
    }

    fn up_score(_store: &CnfStore, v: Var, up: &crate::stats::UpCounters) -> f64 {
        up.get(v) as f64
    }

    fn aupc_score(store: &CnfStore, v: Var) -> f64 {
        Self::non_satisfied_clauses(store)
            .filter(|&idx| store.open_size(idx) == 2)
            .filter(|&idx| store.clause(idx).iter().any(|l| l.var() == v))
            .count() as f64
    }
}
