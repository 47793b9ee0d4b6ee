mod assignment;
mod clause;
mod data;
mod dimacs;
mod dpll;
mod error;
mod heuristics;
mod preprocess;
mod propagate;
mod stats;
mod store;
mod watch;

pub use data::{Lit, Var};
pub use dimacs::{parse as parse_dimacs, Formula};
pub use dpll::{Model, Verdict};
pub use error::{IngestError, StrategyError};
pub use heuristics::Heuristic;

use clause::ClauseDb;
use heuristics::HeuristicSelector;
use stats::UpCounters;
use store::CnfStore;
use watch::WatchIndex;

/// Wires a [`Formula`] and a chosen [`Heuristic`] into a runnable solver.
///
/// This is the facade the CLI (and anyone embedding the crate) is expected
/// to use; the individual modules it wires together are public only for
/// testing and benchmarking.
pub struct Solver {
    store: CnfStore,
    watch: WatchIndex,
    selector: HeuristicSelector,
    stats: UpCounters,
}

impl Solver {
    pub fn new(formula: &Formula, heuristic: Heuristic, seed: Option<u64>) -> Result<Self, StrategyError> {
        let clauses = ClauseDb::build(&formula.clauses);
        let watch = WatchIndex::build(formula.num_vars, &clauses);
        let store = CnfStore::new(formula.num_vars, clauses);
        let selector = HeuristicSelector::new(heuristic, seed)?;
        let stats = UpCounters::new(formula.num_vars);
        Ok(Self {
            store,
            watch,
            selector,
            stats,
        })
    }

    pub fn num_vars(&self) -> usize {
        self.store.num_vars()
    }

    pub fn num_clauses(&self) -> usize {
        self.store.num_clauses()
    }

    /// Run DPLL to completion (§4.6). Consumes no input beyond what
    /// [`Solver::new`] already ingested — there is nothing incremental here.
    pub fn solve(&mut self) -> (Verdict, Option<Model>) {
        dpll::solve(&mut self.store, &self.watch, &mut self.selector, &mut self.stats)
    }
}
