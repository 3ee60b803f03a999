#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A parser for the DIMACS CNF file format.
//!
//! The format:
//! - comment lines starting with `c`;
//! - a problem line `p cnf <num_variables> <num_clauses>` (the counts are
//!   ignored; they are derived from the clauses actually found);
//! - clause lines of whitespace-separated integer literals terminated by `0`;
//! - an optional `%` end-of-data marker, common in competition files.
//!
//! A line consisting of a bare `0` is an explicit empty clause and makes the
//! formula immediately unsatisfiable; it is preserved, not dropped.

use crate::sat::cnf::Cnf;
use itertools::Itertools;
use std::io::{self, BufRead};
use std::path::Path;
use thiserror::Error;

/// Failures while reading DIMACS input. Input-validity concerns live here, at
/// the parsing boundary; the solver itself assumes a well-formed formula.
#[derive(Debug, Error)]
pub enum DimacsError {
    #[error("i/o error reading DIMACS input: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: cannot parse literal '{token}'")]
    MalformedLiteral { line: usize, token: String },
}

/// Parses DIMACS formatted data from a `BufRead` source into a [`Cnf`].
///
/// # Errors
///
/// [`DimacsError::Io`] if a line cannot be read, or
/// [`DimacsError::MalformedLiteral`] if a clause line holds a token that is
/// not an integer.
pub fn parse_dimacs<R: BufRead>(reader: R) -> Result<Cnf, DimacsError> {
    let mut clauses: Vec<Vec<i32>> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let mut parts = line.split_whitespace().peekable();

        match parts.peek() {
            Some(&"%") => break,
            None | Some(&"c" | &"p") => {}
            Some(_) => {
                let literals: Vec<i32> = parts
                    .map(|token| {
                        token.parse::<i32>().map_err(|_| DimacsError::MalformedLiteral {
                            line: idx + 1,
                            token: token.to_string(),
                        })
                    })
                    // The terminating '0' is clause punctuation, not a literal.
                    .filter_ok(|&value| value != 0)
                    .collect::<Result<_, _>>()?;

                clauses.push(literals);
            }
        }
    }

    Ok(Cnf::new(clauses))
}

/// Parses a DIMACS CNF file at `path`.
///
/// # Errors
///
/// As [`parse_dimacs`], plus [`DimacsError::Io`] if the file cannot be
/// opened.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Cnf, DimacsError> {
    let file = std::fs::File::open(path)?;
    parse_dimacs(io::BufReader::new(file))
}
