use dpll_sat::sat::cnf::Cnf;
use dpll_sat::sat::dimacs::parse_dimacs;
use dpll_sat::sat::dpll::Dpll;
use dpll_sat::sat::solver::{SolveOptions, Solver, Verdict};
use std::io::Cursor;

fn run(input: &str) -> Verdict {
    run_with(input, SolveOptions::default())
}

fn run_with(input: &str, options: SolveOptions) -> Verdict {
    let cnf = parse_dimacs(Cursor::new(input)).unwrap();
    Dpll::new(cnf, options).solve()
}

/// Exhaustively checks satisfiability for formulas small enough to enumerate.
fn brute_force_sat(cnf: &Cnf) -> bool {
    assert!(cnf.num_vars <= 16, "formula too large to enumerate");
    (0u32..(1 << cnf.num_vars)).any(|bits| {
        cnf.iter().all(|clause| {
            clause.iter().any(|lit| {
                let value = bits >> (lit.variable() - 1) & 1 == 1;
                if lit.is_negated() { !value } else { value }
            })
        })
    })
}

fn all_option_combinations() -> Vec<SolveOptions> {
    [true, false]
        .into_iter()
        .flat_map(|unit| {
            [true, false].map(|pure| SolveOptions {
                unit_propagation: unit,
                pure_literals: pure,
                trace: false,
            })
        })
        .collect()
}

#[test]
fn test_empty_formula() {
    assert!(run("").is_sat());
}

#[test]
fn test_contradiction() {
    assert_eq!(run("-1 0\n1 0"), Verdict::Unsatisfiable);
}

#[test]
fn test_double_positive() {
    assert!(run("1 0\n1 0").is_sat());
}

#[test]
fn test_one_clause_duplicate_literals() {
    // -1 -1 1 1 is a tautology and drops out at construction.
    assert!(run("-1 -1 1 1 0").is_sat());
}

#[test]
fn test_bcp_chain_unsat() {
    assert_eq!(run("1 0\n-1 -2 0\n2 0"), Verdict::Unsatisfiable);
    assert_eq!(run("-1 0\n1 2 0\n-2 0"), Verdict::Unsatisfiable);
    assert_eq!(run("-1 2 0\n-2 0\n1 2 0"), Verdict::Unsatisfiable);
}

#[test]
fn test_bcp_chain_sat() {
    assert!(run("-1 2 3 0\n-2 0\n1 2 0").is_sat());
}

#[test]
fn test_tiny_sat_instances() {
    assert!(run("1 2 -3 0\n-1 -2 0").is_sat());
    assert!(run("1 2 -3 0\n-1 -2 0\n-1 2 -3 0").is_sat());
    assert!(run("1 2 3 0\n-2 -3 4 0\n5 -3 -1 0\n-4 -5 0").is_sat());
}

#[test]
fn test_witness_satisfies_original_formula() {
    let input = "1 2 3 0\n-2 -3 4 0\n5 -3 -1 0\n-4 -5 0";
    let cnf = parse_dimacs(Cursor::new(input)).unwrap();

    for options in all_option_combinations() {
        let mut solver = Dpll::new(cnf.clone(), options);
        let Verdict::Satisfiable(model) = solver.solve() else {
            panic!("expected satisfiable with {options:?}");
        };
        assert!(cnf.verify(&model), "unsound model with {options:?}");
        assert_eq!(model.len(), cnf.num_vars, "model must be total");
    }
}

#[test]
fn test_verdicts_match_brute_force() {
    let instances = [
        "1 0",
        "1 0\n-1 0",
        "1 2 0\n-1 2 0\n-2 0",
        "1 2 0",
        "1 2 3 0\n-1 2 0\n-2 3 0\n-3 0",
        "1 2 0\n1 -2 0\n-1 2 0\n-1 -2 0",
        "-1 2 0\n-2 3 0\n-3 4 0\n1 -4 0",
        "1 2 3 4 0\n-1 -2 0\n-3 -4 0\n-1 -3 0\n-2 -4 0",
    ];

    for input in instances {
        let cnf = parse_dimacs(Cursor::new(input)).unwrap();
        let expected = brute_force_sat(&cnf);

        for options in all_option_combinations() {
            let mut solver = Dpll::new(cnf.clone(), options);
            assert_eq!(
                solver.solve().is_sat(),
                expected,
                "verdict diverged on {input:?} with {options:?}"
            );
        }
    }
}

/// Pigeonhole principle: n+1 pigeons do not fit in n holes. Unsatisfiable,
/// and hard for plain resolution-style search, so a good stress of the
/// backtracking machinery.
fn pigeonhole(holes: i32) -> String {
    let pigeons = holes + 1;
    let var = |pigeon: i32, hole: i32| (pigeon - 1) * holes + hole;
    let mut lines = Vec::new();

    for pigeon in 1..=pigeons {
        let clause: Vec<String> = (1..=holes).map(|h| var(pigeon, h).to_string()).collect();
        lines.push(format!("{} 0", clause.join(" ")));
    }
    for hole in 1..=holes {
        for p1 in 1..=pigeons {
            for p2 in (p1 + 1)..=pigeons {
                lines.push(format!("-{} -{} 0", var(p1, hole), var(p2, hole)));
            }
        }
    }

    lines.join("\n")
}

#[test]
fn test_pigeonhole_unsat() {
    for holes in 2..=4 {
        let input = pigeonhole(holes);
        assert_eq!(run(&input), Verdict::Unsatisfiable, "php with {holes} holes");
    }
}

#[test]
fn test_pigeonhole_unsat_without_heuristics() {
    let input = pigeonhole(3);
    let options = SolveOptions {
        unit_propagation: false,
        pure_literals: false,
        trace: false,
    };
    assert_eq!(run_with(&input, options), Verdict::Unsatisfiable);
}

#[test]
fn test_graph_coloring_instance() {
    // Triangle, 2 colors: each vertex v has vars (2v-1, 2v) for the colors.
    let input = "\
        1 2 0\n-1 -2 0\n\
        3 4 0\n-3 -4 0\n\
        5 6 0\n-5 -6 0\n\
        -1 -3 0\n-2 -4 0\n\
        -3 -5 0\n-4 -6 0\n\
        -1 -5 0\n-2 -6 0";
    assert_eq!(run(input), Verdict::Unsatisfiable);

    // Two colors suffice for a path of three vertices.
    let path = "\
        1 2 0\n-1 -2 0\n\
        3 4 0\n-3 -4 0\n\
        5 6 0\n-5 -6 0\n\
        -1 -3 0\n-2 -4 0\n\
        -3 -5 0\n-4 -6 0";
    assert!(run(path).is_sat());
}
