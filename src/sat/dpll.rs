//! The DPLL (Davis-Putnam-Logemann-Loveland) solving engine.
//!
//! The engine runs a recursive backtracking search over derivative formulas:
//! each frame simplifies its formula to a fixpoint (unit propagation, then
//! pure-literal elimination, each only when enabled), then either terminates
//! or branches on the first literal of the first remaining clause, trying it
//! true and then false.
//!
//! State is split in two:
//! - the formula travels by value, so a frame's derivative is never visible
//!   to its parent;
//! - the assignment is shared and mutable, paired with a [`Trail`] of
//!   reversible assignments. Each frame marks the trail on entry and rolls
//!   back to the mark on failure, so the post-backtrack assignment is
//!   observably identical to the pre-branch one.
//!
//! A conflict (an empty clause in a derivative) is an expected outcome of a
//! branch, handled entirely by backtracking; it never surfaces as an error.
//!
//! Recursion depth is bounded by the variable count: every recursive call
//! eliminates at least the branch variable from its derivative. Formulas with
//! very many variables may need a larger stack than the platform default.

use crate::sat::assignment::Assignment;
use crate::sat::cnf::Cnf;
use crate::sat::literal::Literal;
use crate::sat::solver::{SolutionStats, SolveOptions, Solver, Verdict};
use crate::sat::trace::{NoTrace, TraceEvent, Tracer};
use crate::sat::trail::Trail;

/// A classical DPLL solver over one CNF formula.
///
/// Generic over the trace sink; the default [`NoTrace`] monomorphizes every
/// trace call away.
#[derive(Debug, Clone)]
pub struct Dpll<T: Tracer = NoTrace> {
    /// The input formula. Read-only for the lifetime of the solve; the search
    /// operates on derivatives.
    pub cnf: Cnf,
    /// The partial assignment along the active search path.
    pub assignment: Assignment,
    /// Reversal record for the assignment.
    trail: Trail,
    /// Heuristic toggles and trace switch for this solve.
    pub options: SolveOptions,
    tracer: T,
    stats: SolutionStats,
}

impl Solver for Dpll {
    fn new(cnf: Cnf, options: SolveOptions) -> Self {
        Self::with_tracer(cnf, options, NoTrace)
    }

    fn solve(&mut self) -> Verdict {
        Self::solve(self)
    }

    fn stats(&self) -> SolutionStats {
        self.stats
    }
}

impl<T: Tracer> Dpll<T> {
    /// Creates a solver with an explicit trace sink. Events are only
    /// delivered when `options.trace` is set.
    pub fn with_tracer(cnf: Cnf, options: SolveOptions, tracer: T) -> Self {
        let assignment = Assignment::new(cnf.num_vars);
        let trail = Trail::new(cnf.num_vars);

        Self {
            cnf,
            assignment,
            trail,
            options,
            tracer,
            stats: SolutionStats::default(),
        }
    }

    /// Consumes the solver and hands back its trace sink.
    pub fn into_tracer(self) -> T {
        self.tracer
    }

    /// Counters collected so far.
    #[must_use]
    pub const fn stats(&self) -> SolutionStats {
        self.stats
    }

    /// Runs the search and, on success, completes the partial assignment into
    /// a total model (unconstrained variables default to true).
    pub fn solve(&mut self) -> Verdict {
        let cnf = self.cnf.clone();

        if self.search(cnf) {
            Verdict::Satisfiable(self.assignment.model_with_default(true))
        } else {
            Verdict::Unsatisfiable
        }
    }

    /// One frame of the recursive search. Returns whether the formula is
    /// satisfiable under the current assignment; on `false`, the assignment
    /// and trail are restored to their state at entry.
    fn search(&mut self, cnf: Cnf) -> bool {
        let mark = self.trail.mark();

        let Some(cnf) = self.simplify(cnf) else {
            self.emit(TraceEvent::Conflict);
            self.trail.backtrack_to(mark, &mut self.assignment);
            return false;
        };

        if cnf.is_empty() {
            return true;
        }

        // Simplification reached a fixpoint with clauses left, so every
        // literal in the derivative ranges over an unassigned variable.
        // First literal of the first clause keeps branching deterministic.
        let lit = cnf.clauses[0][0];

        for candidate in [lit, lit.negated()] {
            self.stats.decisions += 1;
            self.emit(TraceEvent::Decision(candidate));

            let decision = self.trail.mark();
            self.assign(candidate);

            if self.search(cnf.assign(candidate)) {
                return true;
            }

            self.stats.backtracks += 1;
            self.trail.backtrack_to(decision, &mut self.assignment);
            self.emit(TraceEvent::Backtrack(candidate));
        }

        // Both polarities failed; undo this frame's propagation assignments
        // as well before reporting failure upward.
        self.trail.backtrack_to(mark, &mut self.assignment);
        false
    }

    /// Simplifies to a fixpoint of the enabled heuristics, or `None` on
    /// contradiction. Assignments made here stay on the trail; the caller
    /// unwinds them when the frame fails.
    fn simplify(&mut self, mut cnf: Cnf) -> Option<Cnf> {
        loop {
            if cnf.has_empty_clause() {
                return None;
            }

            if self.options.unit_propagation
                && let Some(lit) = cnf.unit_clause()
            {
                self.stats.propagations += 1;
                self.emit(TraceEvent::UnitPropagation(lit));
                self.assign(lit);
                cnf = cnf.assign(lit);
                continue;
            }

            // Pure-literal assignment only removes clauses or is vacuous for
            // the rest, so it cannot itself produce an empty clause; the loop
            // re-checks anyway to catch new unit clauses it may expose.
            if self.options.pure_literals
                && let Some(lit) = cnf.pure_literal()
            {
                self.stats.pure_literals += 1;
                self.emit(TraceEvent::PureLiteral(lit));
                self.assign(lit);
                cnf = cnf.assign(lit);
                continue;
            }

            return Some(cnf);
        }
    }

    fn assign(&mut self, lit: Literal) {
        self.assignment.assign(lit);
        self.trail.push(lit.variable());
    }

    fn emit(&mut self, event: TraceEvent) {
        if self.options.trace {
            self.tracer.trace(event);
        }
    }
}
