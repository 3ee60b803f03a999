//! Command-line surface: argument parsing, dispatch, and reporting.

use crate::sat::cnf::Cnf;
use crate::sat::dimacs::{parse_dimacs, parse_file};
use crate::sat::dpll::Dpll;
use crate::sat::solver::{SolutionStats, SolveOptions, Verdict};
use crate::sat::trace::{LogTrace, NoTrace, Tracer};
use clap::{Args, Parser, Subcommand};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Exit code reported for a satisfiable formula (SAT solver convention).
pub(crate) const EXIT_SAT: i32 = 10;
/// Exit code reported for an unsatisfiable formula.
pub(crate) const EXIT_UNSAT: i32 = 20;

/// Defines the command-line interface for the DPLL solver.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "dpll-sat", version, about = "A classical DPLL SAT solver")]
pub(crate) struct Cli {
    /// An optional global path argument. If provided without a subcommand,
    /// it's treated as the path to a DIMACS .cnf file (or a directory of
    /// them) to solve.
    #[arg(global = true)]
    pub path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `file`, `text`, `dir`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve a CNF file in DIMACS format.
    File {
        /// Path to the DIMACS .cnf file.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve a CNF formula provided as plain text.
    Text {
        /// Literal CNF input as a string (e.g. "1 -2 0\n2 3 0").
        /// Each line is a clause of space-separated literals terminated by 0.
        #[arg(short, long)]
        input: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve every .cnf file under a directory, recursively.
    Dir {
        /// Path to the directory to scan.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Common command-line options shared across subcommands.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CommonOptions {
    /// Disable unit propagation; branching handles all assignment.
    #[arg(long = "no-unit", default_value_t = false)]
    pub(crate) no_unit: bool,

    /// Disable pure-literal elimination.
    #[arg(long = "no-pure", default_value_t = false)]
    pub(crate) no_pure: bool,

    /// Trace every decision, propagation, and backtrack to the log.
    #[arg(short, long, default_value_t = false)]
    pub(crate) trace: bool,

    /// Verify the found model against the original formula.
    #[arg(long, default_value_t = true)]
    pub(crate) verify: bool,

    /// Print search statistics after solving.
    #[arg(long, default_value_t = true)]
    pub(crate) stats: bool,

    /// Print the satisfying assignment if the formula is satisfiable.
    #[arg(short, long, default_value_t = false)]
    pub(crate) print_solution: bool,
}

impl CommonOptions {
    pub(crate) const fn solve_options(&self) -> SolveOptions {
        SolveOptions {
            unit_propagation: !self.no_unit,
            pure_literals: !self.no_pure,
            trace: self.trace,
        }
    }
}

/// Solves a parsed formula and reports the outcome.
///
/// Returns the conventional exit code: 10 for SAT, 20 for UNSAT.
pub(crate) fn solve_and_report(
    cnf: &Cnf,
    common: &CommonOptions,
    label: Option<&Path>,
    parse_time: Duration,
) -> i32 {
    if let Some(name) = label {
        println!("Solving: {}", name.display());
    }

    let options = common.solve_options();
    let (verdict, elapsed, stats) = if common.trace {
        run_solver(cnf, options, LogTrace)
    } else {
        run_solver(cnf, options, NoTrace)
    };

    if common.verify {
        verify_solution(cnf, &verdict);
    }

    if common.stats {
        print_stats(parse_time, elapsed, cnf, &stats);
    }

    match verdict {
        Verdict::Satisfiable(model) => {
            println!("\nSATISFIABLE");
            if common.print_solution {
                println!("v {model}");
            }
            EXIT_SAT
        }
        Verdict::Unsatisfiable => {
            println!("\nUNSATISFIABLE");
            EXIT_UNSAT
        }
    }
}

fn run_solver<T: Tracer>(
    cnf: &Cnf,
    options: SolveOptions,
    tracer: T,
) -> (Verdict, Duration, SolutionStats) {
    let time = Instant::now();

    let mut solver = Dpll::with_tracer(cnf.clone(), options, tracer);
    let verdict = solver.solve();

    (verdict, time.elapsed(), solver.stats())
}

/// Checks a found model against the original formula.
///
/// # Panics
///
/// If the model fails verification, which would indicate a solver defect.
pub(crate) fn verify_solution(cnf: &Cnf, verdict: &Verdict) {
    if let Verdict::Satisfiable(model) = verdict {
        let ok = cnf.verify(model);
        println!("Verified: {ok}");
        assert!(ok, "solution failed verification");
    }
}

/// Solves plain-text CNF input (DIMACS clause lines).
pub(crate) fn solve_text(input: &str, common: &CommonOptions) -> Result<i32, String> {
    let time = Instant::now();
    let cnf = parse_dimacs(Cursor::new(input)).map_err(|e| e.to_string())?;
    let parse_time = time.elapsed();

    Ok(solve_and_report(&cnf, common, None, parse_time))
}

/// Solves a single DIMACS file.
pub(crate) fn solve_path(path: &Path, common: &CommonOptions) -> Result<i32, String> {
    let time = Instant::now();
    let cnf = parse_file(path).map_err(|e| format!("{}: {e}", path.display()))?;
    let parse_time = time.elapsed();

    Ok(solve_and_report(&cnf, common, Some(path), parse_time))
}

/// Solves every `.cnf` file under a directory.
///
/// Individual verdicts go to stdout; the return value is only an error if the
/// directory walk or a parse fails.
pub(crate) fn solve_dir(path: &Path, common: &CommonOptions) -> Result<i32, String> {
    if !path.is_dir() {
        return Err(format!("not a directory: {}", path.display()));
    }

    for entry in walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path();

        if !file_path.is_file() || file_path.extension().is_none_or(|ext| ext != "cnf") {
            continue;
        }

        solve_path(file_path, common)?;
    }

    Ok(0)
}

/// Helper to print a single statistic line in a formatted table row.
fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Prints a summary of problem and search statistics.
fn print_stats(parse_time: Duration, elapsed: Duration, cnf: &Cnf, s: &SolutionStats) {
    println!("\n=======================[ Problem Statistics ]=======================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line("Variables", cnf.num_vars);
    stat_line("Clauses", cnf.clauses.len());

    println!("========================[ Search Statistics ]=======================");
    stat_line("Decisions", s.decisions);
    stat_line("Propagations", s.propagations);
    stat_line("Pure literals", s.pure_literals);
    stat_line("Backtracks", s.backtracks);
    stat_line("CPU time (s)", format!("{:.3}", elapsed.as_secs_f64()));
    println!("====================================================================");
}
