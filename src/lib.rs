//! A classical DPLL SAT solver.
//!
//! Decides satisfiability of CNF formulas via recursive backtracking search
//! with unit propagation and pure-literal elimination, both of which can be
//! disabled independently. An optional trace sink observes every decision,
//! propagation, and backtrack.

pub mod sat;
