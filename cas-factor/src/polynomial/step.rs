use crate::algebra::{Expression, Monomial};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A step taken while factoring an expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// Repeated factors within each term were merged.
    ///
    /// `2aa+3bab` -> `2a^2+3b^2a`
    SimplifyFactors {
        before: Expression,
        after: Expression,
    },

    /// The terms share the given common factor.
    CommonFactor(Monomial),

    /// The terms share no common factor other than 1.
    NoCommonFactor,

    /// The common factor was factored out, giving the final result.
    ///
    /// `2a+2b` -> `2(a+b)`
    FactorOut(Monomial),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SimplifyFactors { before, after } => {
                write!(f, "merge repeated factors: {} = {}", before, after)
            },
            Self::CommonFactor(common) => write!(f, "find the common factor: {}", common),
            Self::NoCommonFactor => write!(f, "the terms have no common factor"),
            Self::FactorOut(factored) => write!(f, "factor out the common factor: {}", factored),
        }
    }
}
