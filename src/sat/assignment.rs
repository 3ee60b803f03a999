//! Partial variable assignments and complete models.

use crate::sat::literal::{Literal, Variable};
use core::ops::Index;
use itertools::Itertools;
use std::fmt;

/// The state of a single variable along the current search path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum VarState {
    #[default]
    Unassigned,
    Assigned(bool),
}

impl VarState {
    #[must_use]
    pub const fn is_assigned(self) -> bool {
        matches!(self, Self::Assigned(_))
    }

    #[must_use]
    pub const fn is_unassigned(self) -> bool {
        !self.is_assigned()
    }
}

/// A partial mapping from variable index to truth value, owned by the active
/// search path. Slot 0 is unused so literals index directly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assignment(Vec<VarState>);

impl Assignment {
    #[must_use]
    pub fn new(num_vars: usize) -> Self {
        Self(vec![VarState::Unassigned; num_vars + 1])
    }

    /// Records `lit` as true: its variable takes the literal's polarity.
    pub fn assign(&mut self, lit: Literal) {
        debug_assert!(
            self.var_value(lit.variable()).is_none_or(|b| b == lit.polarity()),
            "conflicting reassignment of variable {}",
            lit.variable()
        );
        self.0[lit.variable() as usize] = VarState::Assigned(lit.polarity());
    }

    /// Reverts a variable to unassigned. Used only by backtracking.
    pub fn unassign(&mut self, var: Variable) {
        self.0[var as usize] = VarState::Unassigned;
    }

    #[must_use]
    pub fn var_value(&self, var: Variable) -> Option<bool> {
        match self.0.get(var as usize) {
            Some(VarState::Assigned(b)) => Some(*b),
            _ => None,
        }
    }

    /// The literal's truth value under this assignment, or `None` if its
    /// variable is unassigned.
    #[must_use]
    pub fn literal_value(&self, lit: Literal) -> Option<bool> {
        self.var_value(lit.variable())
            .map(|b| if lit.is_negated() { !b } else { b })
    }

    /// Completes the partial assignment into a total model over variables
    /// `1..=num_vars`. Unassigned variables are unconstrained and take
    /// `default`.
    #[must_use]
    pub fn model_with_default(&self, default: bool) -> Solutions {
        let values = self
            .0
            .iter()
            .enumerate()
            .skip(1)
            .map(|(var, state)| {
                let polarity = match state {
                    VarState::Assigned(b) => *b,
                    VarState::Unassigned => default,
                };
                let var = i32::try_from(var).expect("variable index overflowed i32");
                if polarity { var } else { -var }
            })
            .collect();

        Solutions::new(values)
    }
}

impl Index<Variable> for Assignment {
    type Output = VarState;

    fn index(&self, index: Variable) -> &Self::Output {
        &self.0[index as usize]
    }
}

/// A total model: one signed entry per variable, in index order, sign encoding
/// the truth value (the DIMACS `v`-line convention).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solutions(Vec<i32>);

impl Solutions {
    #[must_use]
    pub fn new(values: Vec<i32>) -> Self {
        Self(values)
    }

    /// Whether the model makes `lit` true.
    #[must_use]
    pub fn holds(&self, lit: Literal) -> bool {
        self.0.contains(&lit.to_i32())
    }

    #[must_use]
    pub fn var_value(&self, var: Variable) -> Option<bool> {
        self.0
            .iter()
            .find(|v| v.unsigned_abs() == var)
            .map(|v| v.is_positive())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &i32> {
        self.0.iter()
    }
}

impl fmt::Display for Solutions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} 0", self.0.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_and_lookup() {
        let mut assignment = Assignment::new(3);
        assignment.assign(Literal::from(-2));

        assert_eq!(assignment.var_value(2), Some(false));
        assert_eq!(assignment.literal_value(Literal::from(-2)), Some(true));
        assert_eq!(assignment.literal_value(Literal::from(2)), Some(false));
        assert_eq!(assignment.var_value(1), None);
    }

    #[test]
    fn test_unassign() {
        let mut assignment = Assignment::new(2);
        assignment.assign(Literal::from(1));
        assignment.unassign(1);
        assert!(assignment[1].is_unassigned());
    }

    #[test]
    fn test_model_with_default() {
        let mut assignment = Assignment::new(3);
        assignment.assign(Literal::from(-2));

        let model = assignment.model_with_default(true);
        assert_eq!(model, Solutions::new(vec![1, -2, 3]));
        assert_eq!(model.var_value(2), Some(false));
        assert_eq!(model.len(), 3);
    }

    #[test]
    fn test_solutions_holds() {
        let model = Solutions::new(vec![1, -2, 3]);
        assert!(model.holds(Literal::from(-2)));
        assert!(!model.holds(Literal::from(2)));
    }

    #[test]
    fn test_solutions_display() {
        assert_eq!(Solutions::new(vec![1, -2, 3]).to_string(), "1 -2 3 0");
    }
}
