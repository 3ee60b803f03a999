//! Solver-facing types: options, verdicts, statistics, and the solver trait.

use crate::sat::assignment::Solutions;
use crate::sat::cnf::Cnf;

/// Immutable configuration for one solve call.
///
/// The heuristics are plain flags read at each simplification step; disabling
/// both degrades the engine to plain backtracking over total assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOptions {
    /// Repeatedly force literals of single-literal clauses.
    pub unit_propagation: bool,
    /// Assign variables that occur in only one polarity.
    pub pure_literals: bool,
    /// Notify the trace sink at each search event.
    pub trace: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            unit_propagation: true,
            pure_literals: true,
            trace: false,
        }
    }
}

/// The terminal result of a solve. The procedure is complete for finite CNF
/// input, so there is no unknown state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The formula is satisfiable; the witness is a total model over
    /// variables `1..=num_vars`.
    Satisfiable(Solutions),
    Unsatisfiable,
}

impl Verdict {
    #[must_use]
    pub const fn is_sat(&self) -> bool {
        matches!(self, Self::Satisfiable(_))
    }

    #[must_use]
    pub const fn model(&self) -> Option<&Solutions> {
        match self {
            Self::Satisfiable(model) => Some(model),
            Self::Unsatisfiable => None,
        }
    }
}

/// Counters collected during the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolutionStats {
    /// Branching guesses made.
    pub decisions: usize,
    /// Literals forced by unit clauses.
    pub propagations: usize,
    /// Pure literals assigned.
    pub pure_literals: usize,
    /// Failed decisions undone.
    pub backtracks: usize,
}

/// Common surface of a SAT solver over a CNF formula.
pub trait Solver {
    fn new(cnf: Cnf, options: SolveOptions) -> Self;
    fn solve(&mut self) -> Verdict;
    fn stats(&self) -> SolutionStats;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = SolveOptions::default();
        assert!(options.unit_propagation);
        assert!(options.pure_literals);
        assert!(!options.trace);
    }

    #[test]
    fn test_verdict_accessors() {
        let sat = Verdict::Satisfiable(Solutions::new(vec![1]));
        assert!(sat.is_sat());
        assert!(sat.model().is_some());
        assert!(!Verdict::Unsatisfiable.is_sat());
        assert!(Verdict::Unsatisfiable.model().is_none());
    }
}
