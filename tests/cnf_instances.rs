use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cnfsolve::{parse_dimacs, Formula, Heuristic, Lit, Solver, Verdict};

const ALL_HEURISTICS: [Heuristic; 6] = [
    Heuristic::First,
    Heuristic::Max,
    Heuristic::Moms,
    Heuristic::Weighted,
    Heuristic::Up,
    Heuristic::Aupc,
];

fn solve_with(formula: &Formula, heuristic: Heuristic) -> Verdict {
    let mut solver = Solver::new(formula, heuristic, None).unwrap();
    solver.solve().0
}

#[test]
fn trivially_sat() {
    let formula = parse_dimacs("p cnf 1 1\n1 0\n", false, false).unwrap();
    assert_eq!(solve_with(&formula, Heuristic::First), Verdict::Sat);
}

#[test]
fn trivially_unsat() {
    let formula = parse_dimacs("p cnf 1 2\n1 0\n-1 0\n", false, false).unwrap();
    assert_eq!(solve_with(&formula, Heuristic::First), Verdict::Unsat);
}

#[test]
fn unit_chain_propagates_to_sat_with_no_decisions() {
    let formula = parse_dimacs("p cnf 3 3\n1 0\n-1 2 0\n-2 3 0\n", false, false).unwrap();
    let mut solver = Solver::new(&formula, Heuristic::First, None).unwrap();
    let (verdict, model) = solver.solve();
    assert_eq!(verdict, Verdict::Sat);
    let model = model.unwrap();
    for v in 1..=3 {
        assert!(model.value(cnfsolve::Var::new(v)), "x{v} should be true");
    }
}

#[test]
fn one_backtrack_resolves_to_sat() {
    // (1∨2) ∧ (-1∨2) ∧ (-1∨-2) has exactly one model: x1=False, x2=True.
    // Deciding x1:=True first forces a conflict and a flip before the
    // engine finds it (§8 scenario 4).
    let formula = parse_dimacs("p cnf 2 3\n1 2 0\n-1 2 0\n-1 -2 0\n", false, false).unwrap();
    let mut solver = Solver::new(&formula, Heuristic::First, None).unwrap();
    let (verdict, model) = solver.solve();
    assert_eq!(verdict, Verdict::Sat);
    let model = model.unwrap();
    assert!(!model.value(cnfsolve::Var::new(1)));
    assert!(model.value(cnfsolve::Var::new(2)));
}

fn pigeonhole(pigeons: usize, holes: usize) -> Formula {
    let var = |p: usize, h: usize| -> i32 { (p * holes + h + 1) as i32 };
    let mut clauses = Vec::new();

    for p in 0..pigeons {
        clauses.push((0..holes).map(|h| Lit::new(var(p, h))).collect());
    }
    for h in 0..holes {
        for p1 in 0..pigeons {
            for p2 in (p1 + 1)..pigeons {
                clauses.push(vec![Lit::new(-var(p1, h)), Lit::new(-var(p2, h))]);
            }
        }
    }

    Formula {
        num_vars: pigeons * holes,
        clauses,
    }
}

#[test]
fn pigeonhole_seven_into_six_is_unsat_under_every_heuristic() {
    let formula = pigeonhole(7, 6);
    for heuristic in ALL_HEURISTICS {
        assert_eq!(
            solve_with(&formula, heuristic),
            Verdict::Unsat,
            "{} disagreed on hole6",
            heuristic.name()
        );
    }
}

#[test]
fn pigeonhole_six_into_six_is_sat_under_every_heuristic() {
    // One pigeon per hole is a valid packing once pigeons == holes.
    let formula = pigeonhole(6, 6);
    for heuristic in ALL_HEURISTICS {
        assert_eq!(
            solve_with(&formula, heuristic),
            Verdict::Sat,
            "{} disagreed",
            heuristic.name()
        );
    }
}

/// Tower of Hanoi, 4 disks, 3 pegs, encoded as planning-as-SAT over the
/// minimal 15-move solution (2^4 - 1 states beyond the start).
///
/// `peg(d, t, p)` means disk `d` (0 = smallest) sits on peg `p` at step `t`.
/// A transition from `t` to `t+1` is legal for disk `d` moving `p -> q` only
/// if no smaller disk already sits on `p` or `q` at `t`, and every other disk
/// stays put (standard frame axioms for a single-action-per-step planner).
fn hanoi4() -> Formula {
    const DISKS: usize = 4;
    const PEGS: usize = 3;
    const MOVES: usize = 15; // 2^4 - 1, the minimal solution length
    const STEPS: usize = MOVES + 1;

    let var = |d: usize, t: usize, p: usize| -> i32 { ((d * STEPS + t) * PEGS + p + 1) as i32 };

    let mut clauses: Vec<Vec<Lit>> = Vec::new();

    // Every disk occupies exactly one peg at every step.
    for d in 0..DISKS {
        for t in 0..STEPS {
            clauses.push((0..PEGS).map(|p| Lit::new(var(d, t, p))).collect());
            for p1 in 0..PEGS {
                for p2 in (p1 + 1)..PEGS {
                    clauses.push(vec![Lit::new(-var(d, t, p1)), Lit::new(-var(d, t, p2))]);
                }
            }
        }
    }

    for t in 0..MOVES {
        for d in 0..DISKS {
            for p in 0..PEGS {
                for q in 0..PEGS {
                    if p == q {
                        continue;
                    }
                    let moved = [Lit::new(-var(d, t, p)), Lit::new(-var(d, t + 1, q))];

                    // d can only move if it was topmost on p and lands topmost on q.
                    for smaller in 0..d {
                        clauses.push(vec![moved[0], moved[1], Lit::new(-var(smaller, t, p))]);
                        clauses.push(vec![moved[0], moved[1], Lit::new(-var(smaller, t, q))]);
                    }

                    // every other disk stays on whatever peg it already occupies.
                    for other in 0..DISKS {
                        if other == d {
                            continue;
                        }
                        for x in 0..PEGS {
                            clauses.push(vec![
                                moved[0],
                                moved[1],
                                Lit::new(-var(other, t, x)),
                                Lit::new(var(other, t + 1, x)),
                            ]);
                        }
                    }
                }
            }
        }
    }

    // Start: all disks on peg 0. Goal: all disks on peg 2.
    for d in 0..DISKS {
        clauses.push(vec![Lit::new(var(d, 0, 0))]);
        clauses.push(vec![Lit::new(var(d, MOVES, 2))]);
    }

    Formula {
        num_vars: DISKS * STEPS * PEGS,
        clauses,
    }
}

#[test]
fn hanoi4_is_sat_under_every_heuristic() {
    let formula = hanoi4();
    for heuristic in ALL_HEURISTICS {
        assert_eq!(
            solve_with(&formula, heuristic),
            Verdict::Sat,
            "{} disagreed on hanoi4",
            heuristic.name()
        );
    }
}

fn brute_force_sat(formula: &Formula) -> bool {
    let n = formula.num_vars;
    for assignment in 0..(1u32 << n) {
        let sat = formula.clauses.iter().all(|cls| {
            cls.iter().any(|&lit| {
                let bit_is_true = (assignment >> (lit.var().get() - 1)) & 1 == 1;
                bit_is_true == lit.is_pos()
            })
        });
        if sat {
            return true;
        }
    }
    false
}

fn random_formula(rng: &mut StdRng, num_vars: usize, num_clauses: usize) -> Formula {
    let clauses = (0..num_clauses)
        .map(|_| {
            (0..3)
                .map(|_| {
                    let v = rng.gen_range(1..=num_vars as i32);
                    let v = if rng.gen_bool(0.5) { v } else { -v };
                    Lit::new(v)
                })
                .collect()
        })
        .collect();
    Formula { num_vars, clauses }
}

#[test]
fn soundness_and_completeness_against_brute_force() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..30 {
        let formula = random_formula(&mut rng, 10, 25);
        let expected_sat = brute_force_sat(&formula);

        let mut solver = Solver::new(&formula, Heuristic::First, None).unwrap();
        let (verdict, model) = solver.solve();

        match (verdict, expected_sat) {
            (Verdict::Sat, true) => {
                let model = model.unwrap();
                for cls in &formula.clauses {
                    assert!(cls
                        .iter()
                        .any(|&lit| lit.is_pos() == model.value(lit.var())));
                }
            }
            (Verdict::Unsat, false) => {}
            (verdict, expected_sat) => panic!(
                "verdict {verdict:?} disagrees with brute force (expected_sat={expected_sat})"
            ),
        }
    }
}

#[test]
fn determinism_across_repeated_runs() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..10 {
        let formula = random_formula(&mut rng, 12, 30);
        for heuristic in ALL_HEURISTICS {
            let a = solve_with(&formula, heuristic);
            let b = solve_with(&formula, heuristic);
            assert_eq!(a, b, "{} was not deterministic", heuristic.name());
        }
    }
}

#[test]
fn all_heuristics_agree_on_verdict() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..15 {
        let formula = random_formula(&mut rng, 10, 25);
        let verdicts: Vec<Verdict> = ALL_HEURISTICS.iter().map(|&h| solve_with(&formula, h)).collect();
        assert!(
            verdicts.iter().all(|&v| v == verdicts[0]),
            "heuristics disagreed: {verdicts:?}"
        );
    }
}

#[test]
fn preprocessing_never_changes_the_verdict() {
    let dimacs = "p cnf 4 5\n1 2 0\n1 0\n-1 3 4 0\n-2 -3 0\n2 4 0\n";
    let plain = parse_dimacs(dimacs, false, false).unwrap();
    let subsumed = parse_dimacs(dimacs, false, true).unwrap();

    let verdict_plain = solve_with(&plain, Heuristic::First);
    let verdict_subsumed = solve_with(&subsumed, Heuristic::First);
    assert_eq!(verdict_plain, verdict_subsumed);
}
