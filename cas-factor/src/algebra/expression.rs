use std::fmt;
use super::monomial::Monomial;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A sum of terms, such as `2a+4b` or `8x^2yz+12xy^3`.
///
/// An expression can be factored by the functions in [`crate::polynomial`], and can also be
/// used as the base of a [`Factor`](super::Factor).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expression {
    /// The terms of the sum, in order.
    pub terms: Vec<Monomial>,
}

impl Expression {
    /// Creates an expression with the given terms.
    pub fn new(terms: Vec<Monomial>) -> Self {
        Self { terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl From<Vec<Monomial>> for Expression {
    fn from(terms: Vec<Monomial>) -> Self {
        Self::new(terms)
    }
}

impl FromIterator<Monomial> for Expression {
    fn from_iter<I: IntoIterator<Item = Monomial>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Renders the terms joined with `+`, without surrounding parentheses.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.terms.iter();
        if let Some(term) = iter.next() {
            write!(f, "{}", term)?;
            for term in iter {
                write!(f, "+{}", term)?;
            }
        }
        Ok(())
    }
}
