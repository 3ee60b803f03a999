#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! CNF formulas and their simplification under a literal assignment.
//!
//! A [`Cnf`] is the conjunction of its clauses. The search never mutates a
//! formula in place: [`Cnf::assign`] produces the derivative formula that
//! results from fixing one literal true, so every recursion frame owns its own
//! snapshot and backtracking needs no repair of shared state.

use crate::sat::assignment::Solutions;
use crate::sat::clause::Clause;
use crate::sat::literal::{Literal, Variable};
use itertools::Itertools;
use rustc_hash::FxHashSet;
use std::fmt;

/// A formula in conjunctive normal form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cnf {
    /// The clauses, in input order. Order is stable across simplification so
    /// the branching policy (first literal of the first clause) is
    /// deterministic.
    pub clauses: Vec<Clause>,
    /// Highest variable index occurring in the input formula. Stable for the
    /// lifetime of a solve, regardless of how far a derivative has shrunk.
    pub num_vars: usize,
}

impl Cnf {
    /// Builds a formula from raw signed-integer clauses.
    ///
    /// Tautological clauses are dropped: they hold under every assignment and
    /// only slow the search down. Empty input clauses are kept, making the
    /// formula immediately unsatisfiable.
    #[must_use]
    pub fn new<I>(clauses: I) -> Self
    where
        I: IntoIterator<Item = Vec<i32>>,
    {
        let clauses: Vec<Clause> = clauses
            .into_iter()
            .map(Clause::new)
            .filter(|clause| !clause.is_tautology())
            .collect();

        let num_vars = clauses
            .iter()
            .flat_map(Clause::iter)
            .map(|lit| lit.variable() as usize)
            .max()
            .unwrap_or(0);

        Self { clauses, num_vars }
    }

    /// No clauses left: the formula is satisfied by the assignment made so
    /// far, whatever the remaining variables are set to.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// An empty clause marks a contradiction under the current assignment.
    /// Distinct from [`Cnf::is_empty`], which signals satisfaction.
    #[must_use]
    pub fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(Clause::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    /// The derivative formula obtained by fixing `lit` true.
    ///
    /// Every clause containing `lit` is satisfied and removed; the negated
    /// literal is stripped from the remaining clauses. The receiver is left
    /// untouched. A clause shrinking to empty is preserved so the caller can
    /// observe the contradiction via [`Cnf::has_empty_clause`].
    #[must_use]
    pub fn assign(&self, lit: Literal) -> Self {
        let clauses = self
            .clauses
            .iter()
            .filter(|clause| !clause.contains(lit))
            .map(|clause| clause.without(lit.negated()))
            .collect();

        Self {
            clauses,
            num_vars: self.num_vars,
        }
    }

    /// The forced literal of the first unit clause, if any remain.
    #[must_use]
    pub fn unit_clause(&self) -> Option<Literal> {
        self.clauses.iter().find_map(Clause::unit_literal)
    }

    /// The first literal whose variable occurs in only one polarity across the
    /// remaining clauses.
    ///
    /// Scan order follows clause order, so the result is deterministic for a
    /// given derivative.
    #[must_use]
    pub fn pure_literal(&self) -> Option<Literal> {
        let mut pures: Vec<Literal> = Vec::new();
        let mut seen: FxHashSet<Literal> = FxHashSet::default();
        let mut impure: FxHashSet<Variable> = FxHashSet::default();

        for clause in &self.clauses {
            for &lit in clause.iter() {
                if impure.contains(&lit.variable()) || seen.contains(&lit) {
                    continue;
                }

                if seen.contains(&lit.negated()) {
                    impure.insert(lit.variable());
                    continue;
                }

                seen.insert(lit);
                pures.push(lit);
            }
        }

        pures.into_iter().find(|lit| !impure.contains(&lit.variable()))
    }

    /// Checks a model against this formula: every clause must contain at
    /// least one literal the model makes true.
    #[must_use]
    pub fn verify(&self, solutions: &Solutions) -> bool {
        self.clauses.iter().all(|clause| {
            clause
                .iter()
                .any(|lit| solutions.holds(*lit))
        })
    }
}

impl fmt::Display for Cnf {
    /// DIMACS form, including the problem line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "p cnf {} {}", self.num_vars, self.clauses.len())?;
        write!(f, "{}", self.clauses.iter().join("\n"))
    }
}
