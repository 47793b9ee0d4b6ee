//! The DIMACS reader (§6): an external collaborator, not part of the core,
//! but implemented here so the CLI and tests have something real to call.
use crate::data::Lit;
use crate::error::IngestError;
use crate::preprocess;

/// A validated CNF formula: `(N, M, C)` in §3's terms, after whatever
/// preprocessing flags were requested.
#[derive(Debug, Clone)]
pub struct Formula {
    pub num_vars: usize,
    pub clauses: Vec<Vec<Lit>>,
}

/// Parse DIMACS CNF text into a [`Formula`].
///
/// `dedup` drops clauses equal (modulo literal order) to an earlier clause
/// as they are read; `subsume` removes subsumed clauses afterwards. See
/// §4.2 for the exact semantics, and §6 for the grammar this accepts.
pub fn parse(input: &str, dedup: bool, subsume: bool) -> Result<Formula, IngestError> {
    let mut num_vars: Option<i64> = None;
    let mut declared_clauses: Option<i64> = None;
    let mut clauses: Vec<Vec<Lit>> = Vec::new();
    let mut saw_problem_line = false;

    for (line_no, raw_line) in input.lines().enumerate() {
        let line_no = line_no + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('c') || line.starts_with('%') {
            continue;
        }

        if line == "0" {
            break;
        }

        if line.starts_with('p') {
            if saw_problem_line {
                return Err(IngestError::DuplicateProblemLine { line: line_no });
            }
            let (n, m) = parse_problem_line(line, line_no)?;
            if n <= 0 {
                return Err(IngestError::NonPositiveVariableCount { count: n });
            }
            if m <= 0 {
                return Err(IngestError::NonPositiveClauseCount { count: m });
            }
            num_vars = Some(n);
            declared_clauses = Some(m);
            saw_problem_line = true;
            continue;
        }

        let Some(n) = num_vars else {
            return Err(IngestError::MissingProblemLine { line: line_no });
        };

        let clause = parse_clause_line(line, line_no, n as u32)?;
        clauses.push(clause);
    }

    let Some(n) = num_vars else {
        return Err(IngestError::MissingProblemLine {
            line: input.lines().count() + 1,
        });
    };
    let declared = declared_clauses.expect("declared_clauses set alongside num_vars");

    if dedup {
        clauses = preprocess::remove_duplicates(clauses);
    }

    if clauses.len() as i64 != declared {
        return Err(IngestError::ClauseCountMismatch {
            declared: declared as u32,
            actual: clauses.len() as u32,
        });
    }

    if subsume {
        clauses = preprocess::subsume(clauses);
    }

    Ok(Formula {
        num_vars: n as usize,
        clauses,
    })
}

fn parse_problem_line(line: &str, line_no: usize) -> Result<(i64, i64), IngestError> {
    let mut parts = line.split_whitespace();
    let bad = || IngestError::MalformedProblemLine {
        line: line_no,
        text: line.to_string(),
    };

    let p = parts.next().ok_or_else(bad)?;
    if p != "p" {
        return Err(bad());
    }
    let cnf = parts.next().ok_or_else(bad)?;
    if cnf != "cnf" {
        return Err(bad());
    }
    let n: i64 = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    let m: i64 = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    Ok((n, m))
}

fn parse_clause_line(line: &str, line_no: usize, num_vars: u32) -> Result<Vec<Lit>, IngestError> {
    let mut clause = Vec::new();
    for token in line.split_whitespace() {
        let lit: i32 = token.parse().map_err(|_| IngestError::InvalidLiteral {
            line: line_no,
            text: token.to_string(),
        })?;
        if lit == 0 {
            break;
        }
        if lit.unsigned_abs() > num_vars {
            return Err(IngestError::LiteralOutOfRange {
                line: line_no,
                lit,
                max: num_vars,
            });
        }
        clause.push(Lit::new(lit));
    }
    Ok(clause)
}
