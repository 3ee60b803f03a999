#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Signed-integer literals.
//!
//! A literal wraps a non-zero `i32`: the magnitude identifies the variable,
//! the sign the polarity (positive = asserted true). This mirrors the DIMACS
//! convention, so conversion at the parsing boundary is the identity.

use core::ops::{Neg, Not};
use std::fmt;

/// A variable index. Always greater than zero for a valid literal.
pub type Variable = u32;

/// A signed literal over a numbered variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal(i32);

impl Literal {
    /// Creates a literal from a variable index and polarity.
    ///
    /// # Panics
    ///
    /// If the variable index does not fit in an `i32`.
    #[must_use]
    pub fn new(var: Variable, polarity: bool) -> Self {
        let var = i32::try_from(var).expect("variable index overflowed i32");
        debug_assert!(var > 0, "variable index must be positive");

        if polarity { Self(var) } else { Self(-var) }
    }

    /// The variable this literal ranges over.
    #[must_use]
    pub const fn variable(self) -> Variable {
        self.0.unsigned_abs()
    }

    /// `true` for a positive literal, `false` for a negated one.
    #[must_use]
    pub const fn polarity(self) -> bool {
        self.0.is_positive()
    }

    #[must_use]
    pub const fn is_negated(self) -> bool {
        !self.polarity()
    }

    /// The same variable with the opposite polarity.
    #[must_use]
    pub const fn negated(self) -> Self {
        Self(-self.0)
    }

    /// # Panics
    ///
    /// If `value` is zero, which encodes no literal in the DIMACS convention.
    #[must_use]
    pub fn from_i32(value: i32) -> Self {
        assert_ne!(value, 0, "literal value must be non-zero");
        Self(value)
    }

    #[must_use]
    pub const fn to_i32(self) -> i32 {
        self.0
    }
}

impl Neg for Literal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Not for Literal {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.negated()
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_new() {
        let lit = Literal::new(3, true);
        assert_eq!(lit.variable(), 3);
        assert!(lit.polarity());

        let lit = Literal::new(3, false);
        assert_eq!(lit.variable(), 3);
        assert!(lit.is_negated());
    }

    #[test]
    fn test_literal_neg() {
        assert_eq!(Literal::new(1, false).negated(), Literal::new(1, true));
        assert_eq!(Literal::new(1, true).negated(), Literal::new(1, false));
        assert_eq!(-Literal::from(5), Literal::from(-5));
        assert_eq!(!Literal::from(-2), Literal::from(2));
    }

    #[test]
    fn test_literal_i32_round_trip() {
        assert_eq!(Literal::from_i32(-7).to_i32(), -7);
        assert_eq!(Literal::from_i32(7).variable(), 7);
        assert_eq!(Literal::from_i32(-7).variable(), 7);
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_literal_zero_rejected() {
        let _ = Literal::from_i32(0);
    }
}
