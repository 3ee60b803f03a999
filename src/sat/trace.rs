//! Trace sinks for observing the search.
//!
//! The engine notifies its [`Tracer`] at every decision, propagation,
//! pure-literal assignment, conflict, and backtrack. Tracing is injected as a
//! type parameter, so the default [`NoTrace`] sink compiles down to nothing.

use crate::sat::literal::Literal;
use std::fmt;

/// One observable step of the search, in the order it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// A branching guess on a literal.
    Decision(Literal),
    /// A literal forced by a unit clause.
    UnitPropagation(Literal),
    /// A pure literal assigned to satisfy all its occurrences.
    PureLiteral(Literal),
    /// An empty clause appeared; the current branch is abandoned.
    Conflict,
    /// A failed decision was undone.
    Backtrack(Literal),
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decision(lit) => write!(f, "decide {lit}"),
            Self::UnitPropagation(lit) => write!(f, "unit {lit}"),
            Self::PureLiteral(lit) => write!(f, "pure {lit}"),
            Self::Conflict => write!(f, "conflict"),
            Self::Backtrack(lit) => write!(f, "backtrack {lit}"),
        }
    }
}

/// Observer of search events. Purely observational: implementations must not
/// influence the solving outcome.
pub trait Tracer {
    fn trace(&mut self, event: TraceEvent);
}

/// The disabled sink. Every call is an empty inline body the optimizer drops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoTrace;

impl Tracer for NoTrace {
    #[inline]
    fn trace(&mut self, _: TraceEvent) {}
}

/// Emits each event through the `log` facade at debug level. Routing and
/// formatting are the binary's concern (`fern` in the CLI).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogTrace;

impl Tracer for LogTrace {
    fn trace(&mut self, event: TraceEvent) {
        log::debug!("{event}");
    }
}

/// Buffers events in order. Useful in tests and for callers that want the
/// diagnostic stream as a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingTrace {
    pub events: Vec<TraceEvent>,
}

impl RecordingTrace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tracer for RecordingTrace {
    fn trace(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}
