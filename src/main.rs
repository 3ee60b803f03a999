//! # dpll-sat
//!
//! A command-line SAT solver implementing the classical DPLL procedure.
//! It parses problems in DIMACS CNF format (from a file, a directory of
//! files, or plain text) and reports `SATISFIABLE` with a witness assignment
//! or `UNSATISFIABLE`.
//!
//! ## Usage
//!
//! ```sh
//! # Solve a DIMACS file
//! dpll-sat problem.cnf
//!
//! # Solve with plain backtracking only and trace the search
//! dpll-sat file --path problem.cnf --no-unit --no-pure --trace
//!
//! # Solve a CNF formula from text input
//! dpll-sat text --input "1 2 0
//! -1 0"
//!
//! # Solve every .cnf file under a directory
//! dpll-sat dir --path ./benchmarks
//! ```
//!
//! Exit code is 10 for SAT and 20 for UNSAT, following solver competition
//! convention.

mod command_line;
mod sat;

use crate::command_line::cli::{Cli, Commands, solve_dir, solve_path, solve_text};
use clap::{CommandFactory, Parser};

/// Global allocator using `tikv-jemallocator`.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Routes `log` records (the solver's trace stream) to stderr.
fn setup_logger(trace: bool) -> Result<(), fern::InitError> {
    let level = if trace {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message));
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let trace = match &cli.command {
        Some(
            Commands::File { common, .. }
            | Commands::Text { common, .. }
            | Commands::Dir { common, .. },
        ) => common.trace,
        _ => cli.common.trace,
    };

    if let Err(e) = setup_logger(trace) {
        eprintln!("Failed to initialise logging: {e}");
        std::process::exit(1);
    }

    let outcome = match cli.command {
        Some(Commands::File { path, common }) => solve_path(&path, &common),
        Some(Commands::Text { input, common }) => solve_text(&input, &common),
        Some(Commands::Dir { path, common }) => solve_dir(&path, &common),
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "dpll-sat",
                &mut std::io::stdout(),
            );
            Ok(0)
        }
        None => match cli.path {
            // A bare path defaults to solving it as a DIMACS file, or as a
            // directory of them.
            Some(path) if path.is_dir() => solve_dir(&path, &cli.common),
            Some(path) => solve_path(&path, &cli.common),
            None => {
                Cli::command().print_help().ok();
                Ok(1)
            }
        },
    };

    match outcome {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
