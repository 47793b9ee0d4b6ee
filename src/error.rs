use thiserror::Error;

/// Errors raised while turning raw DIMACS text into a validated [`crate::Formula`].
///
/// Ingest errors are synchronous and abort construction; the solver never
/// sees a partially-built formula.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    #[error("line {line}: no 'p cnf' problem line found before the first clause")]
    MissingProblemLine { line: usize },

    #[error("line {line}: malformed problem line {text:?}, expected 'p cnf <vars> <clauses>'")]
    MalformedProblemLine { line: usize, text: String },

    #[error("line {line}: more than one 'p cnf' problem line")]
    DuplicateProblemLine { line: usize },

    #[error("variable count must be positive, got {count}")]
    NonPositiveVariableCount { count: i64 },

    #[error("clause count must be positive, got {count}")]
    NonPositiveClauseCount { count: i64 },

    #[error("line {line}: {text:?} is not a valid literal")]
    InvalidLiteral { line: usize, text: String },

    #[error("line {line}: literal {lit} has magnitude greater than the declared variable count {max}")]
    LiteralOutOfRange { line: usize, lit: i32, max: u32 },

    #[error("declared clause count was {declared}, but {actual} clauses remained after ingest")]
    ClauseCountMismatch { declared: u32, actual: u32 },
}

/// Errors raised by the heuristic selector's configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrategyError {
    #[error("unknown heuristic name {0:?}")]
    UnknownHeuristic(String),

    #[error("the random heuristic requires an explicit seed; none was given")]
    MissingSeed,
}
