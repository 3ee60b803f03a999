//! The assignment trail.
//!
//! Every assignment the engine makes is pushed here in order. A recursion
//! frame takes a mark on entry; failing the frame rolls the trail back to the
//! mark, unassigning in reverse order, which restores the assignment to
//! exactly its pre-branch state.

use crate::sat::assignment::Assignment;
use crate::sat::literal::Variable;

/// An ordered record of assigned variables along the active search path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trail(Vec<Variable>);

impl Trail {
    #[must_use]
    pub fn new(num_vars: usize) -> Self {
        Self(Vec::with_capacity(num_vars))
    }

    pub fn push(&mut self, var: Variable) {
        self.0.push(var);
    }

    /// A restore point for the current trail position.
    #[must_use]
    pub fn mark(&self) -> usize {
        self.0.len()
    }

    /// Unassigns everything recorded after `mark`, newest first.
    pub fn backtrack_to(&mut self, mark: usize, assignment: &mut Assignment) {
        while self.0.len() > mark {
            let var = self.0.pop().expect("trail shorter than its own mark");
            assignment.unassign(var);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
