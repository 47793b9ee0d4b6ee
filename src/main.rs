use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use cnfsolve::{parse_dimacs, Heuristic, Solver, Verdict};
use tracing::info;

/// A DPLL SAT solver with configurable branching heuristics.
#[derive(Parser, Debug)]
#[command(name = "cnfsolve", version, about)]
struct Cli {
    /// Path to a DIMACS CNF input file.
    input: PathBuf,

    /// Branching heuristic: first, random, max, moms, weighted, up, aupc.
    /// Defaults to first, mirroring `./dpll <path> [strategy] [-d] [-s]`.
    #[arg(value_enum)]
    heuristic: Option<Heuristic>,

    /// Seed for the random heuristic; required when heuristic is "random".
    #[arg(long)]
    seed: Option<u64>,

    /// Remove duplicate clauses while reading the input.
    #[arg(short = 'd', long)]
    dedup: bool,

    /// Remove subsumed clauses after reading the input.
    #[arg(short = 's', long)]
    subsumption: bool,

    /// Enable trace-level logging.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("CNFSOLVE_LOG").unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let heuristic = cli.heuristic.unwrap_or(Heuristic::First);

    println!("Run parameters:");
    println!("  Heuristic: {}", heuristic.name());
    println!("  Remove duplicates: {}", if cli.dedup { "yes" } else { "no" });
    println!("  Use subsumption: {}", if cli.subsumption { "yes" } else { "no" });

    let t0 = Instant::now();
    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let formula = parse_dimacs(&text, cli.dedup, cli.subsumption)
        .with_context(|| format!("parsing {}", cli.input.display()))?;
    let mut solver = Solver::new(&formula, heuristic, cli.seed)
        .context("configuring the branching heuristic")?;
    let t1 = Instant::now();

    info!(
        num_vars = formula.num_vars,
        num_clauses = formula.clauses.len(),
        heuristic = heuristic.name(),
        "starting solve"
    );

    let (verdict, model) = solver.solve();
    let t2 = Instant::now();

    print!("  DPLL verdict: ");
    match verdict {
        Verdict::Sat => println!("SAT"),
        Verdict::Unsat => println!("UNSAT"),
    }
    if let Some(model) = model {
        println!("{model}");
    }

    println!();
    println!("  Reading/preprocessing time: {} ms", (t1 - t0).as_millis());
    println!("  DPLL time: {} ms", (t2 - t1).as_millis());

    Ok(())
}
