//! Clauses: disjunctions of literals.

use crate::sat::literal::Literal;
use core::ops::Index;
use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt;

/// Inline storage for the common case of short clauses; longer ones spill to
/// the heap.
pub type LiteralStorage = SmallVec<[Literal; 8]>;

/// A disjunction of literals.
///
/// An empty clause is unsatisfiable under any assignment; a unit clause forces
/// its sole literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Clause {
    pub literals: LiteralStorage,
}

impl Clause {
    #[must_use]
    pub fn new(literals: Vec<i32>) -> Self {
        Self {
            literals: literals.into_iter().map(Literal::from).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.len() == 1
    }

    /// The forced literal of a unit clause, if this is one.
    #[must_use]
    pub fn unit_literal(&self) -> Option<Literal> {
        if self.is_unit() {
            Some(self.literals[0])
        } else {
            None
        }
    }

    #[must_use]
    pub fn contains(&self, lit: Literal) -> bool {
        self.literals.contains(&lit)
    }

    /// A clause holding both a literal and its negation is true under every
    /// assignment and can be dropped from the formula.
    #[must_use]
    pub fn is_tautology(&self) -> bool {
        self.literals
            .iter()
            .any(|&lit| self.literals.contains(&lit.negated()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// A copy of this clause with every occurrence of `lit` removed.
    #[must_use]
    pub fn without(&self, lit: Literal) -> Self {
        Self {
            literals: self.literals.iter().copied().filter(|&l| l != lit).collect(),
        }
    }
}

impl Index<usize> for Clause {
    type Output = Literal;

    fn index(&self, index: usize) -> &Self::Output {
        &self.literals[index]
    }
}

impl From<Vec<i32>> for Clause {
    fn from(literals: Vec<i32>) -> Self {
        Self::new(literals)
    }
}

impl From<Vec<Literal>> for Clause {
    fn from(literals: Vec<Literal>) -> Self {
        Self {
            literals: literals.into_iter().collect(),
        }
    }
}

impl fmt::Display for Clause {
    /// DIMACS body form: space-separated literals, `0`-terminated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} 0", self.literals.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let clause = Clause::new(vec![1, 2, 3]);
        assert_eq!(clause.len(), 3);
        assert!(!clause.is_empty());
        assert!(!clause.is_unit());
    }

    #[test]
    fn test_unit_literal() {
        let clause = Clause::new(vec![-2]);
        assert!(clause.is_unit());
        assert_eq!(clause.unit_literal(), Some(Literal::from(-2)));
        assert_eq!(Clause::new(vec![1, 2]).unit_literal(), None);
    }

    #[test]
    fn test_tautology() {
        assert!(Clause::new(vec![1, -1]).is_tautology());
        assert!(Clause::new(vec![2, 1, -2]).is_tautology());
        assert!(!Clause::new(vec![1, 2]).is_tautology());
        assert!(!Clause::default().is_tautology());
    }

    #[test]
    fn test_without() {
        let clause = Clause::new(vec![1, -2, 3]);
        let shrunk = clause.without(Literal::from(-2));
        assert_eq!(shrunk, Clause::new(vec![1, 3]));
        // Input clause is untouched.
        assert_eq!(clause.len(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(Clause::new(vec![1, -2, 3]).to_string(), "1 -2 3 0");
    }
}
