use rug::Integer;
use std::fmt;
use super::{expression::Expression, monomial::Monomial};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The thing being raised to a power in a [`Factor`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Base {
    /// A single letter, such as `a` or `x`.
    Symbol(char),

    /// A parenthesized sum of terms, such as `(a+b)`.
    Expression(Expression),
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(symbol) => write!(f, "{}", symbol),
            Self::Expression(expr) => write!(f, "({})", expr),
        }
    }
}

/// A [`Base`] raised to an exponent, such as `a`, `b^2`, `(x+1)^3` or `a^(5x+1)`.
///
/// The exponent is itself a [`Monomial`], so exponents can carry symbolic structure of their
/// own. Each factor exclusively owns its base and exponent.
///
/// # Equality
///
/// - [`Factor::base_eq`] compares only the bases, ignoring exponents. Algorithms use it to decide
/// whether two factors are "the same factor, possibly to a different power".
/// - [`Factor::full_eq`] (also used by [`PartialEq`]) compares both bases and exponents.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Factor {
    /// The base of the factor.
    pub base: Base,

    /// The exponent of the factor.
    pub exponent: Monomial,
}

impl Factor {
    /// Creates the factor `symbol^1`.
    pub fn symbol(symbol: char) -> Self {
        Self { base: Base::Symbol(symbol), exponent: Monomial::integer(1) }
    }

    /// Creates the factor `(terms)^1`.
    pub fn expression(expr: impl Into<Expression>) -> Self {
        Self { base: Base::Expression(expr.into()), exponent: Monomial::integer(1) }
    }

    /// Replaces the exponent of the factor.
    pub fn with_exponent(mut self, exponent: Monomial) -> Self {
        self.exponent = exponent;
        self
    }

    /// Replaces the exponent of the factor with the integer `n`.
    pub fn pow(self, n: impl Into<Integer>) -> Self {
        self.with_exponent(Monomial::integer(n))
    }

    /// Returns true if both factors have equal bases, regardless of their exponents.
    ///
    /// Symbols are equal if they are the same letter. Sub-expressions are equal if their terms
    /// are [fully equal](Monomial::eq), in order.
    pub fn base_eq(&self, other: &Self) -> bool {
        self.base == other.base
    }

    /// Returns true if both factors have equal bases and equal exponents.
    pub fn full_eq(&self, other: &Self) -> bool {
        self.base_eq(other) && self.exponent == other.exponent
    }

    /// Returns the exponent as an [`Integer`], if it is a constant integer.
    pub fn integer_exponent(&self) -> Option<&Integer> {
        self.exponent.as_integer()
    }
}

impl PartialEq for Factor {
    fn eq(&self, other: &Self) -> bool {
        self.full_eq(other)
    }
}

/// Renders the factor:
///
/// - `a` if the exponent is exactly 1,
/// - `a^2` if the exponent is a constant,
/// - `a^(5x)` if the exponent has factors of its own. An exponent that is already a bare
/// parenthesized sum is not wrapped again, so `a^(5x+1)` is rendered instead of `a^((5x+1))`.
impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        if self.exponent.is_one() {
            Ok(())
        } else if self.exponent.is_constant() || self.exponent.as_sum().is_some() {
            write!(f, "^{}", self.exponent)
        } else {
            write!(f, "^({})", self.exponent)
        }
    }
}
