use crate::{
    error::{Error, MismatchedTerms, Unsupported, UnsupportedOperation},
    polynomial::simplify_factors,
    primitive::int,
    value::{ExactValue, RationalValue},
};
use log::debug;
use rug::Integer;
use std::{cmp::max, fmt, ops::Range};
use super::{expression::Expression, factor::{Base, Factor}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A coefficient multiplied by an ordered product of factors, such as `3a^2b`.
///
/// A monomial with no factors is a constant, such as `2`, `-6`, `1/2` or `1+√2`.
///
/// Monomials own their coefficient and factors outright. Every operation that produces a new
/// monomial clones what it needs from its operands, so mutating the result (as the algorithms in
/// [`crate::polynomial`] do with exponents) is never observable through the operands.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Monomial {
    /// The numeric part of the monomial.
    pub coefficient: ExactValue,

    /// The literal part of the monomial, as well as any other factors.
    pub factors: Vec<Factor>,
}

impl Monomial {
    /// Creates a monomial with the given coefficient and factors.
    pub fn new(coefficient: ExactValue, factors: Vec<Factor>) -> Self {
        Self { coefficient, factors }
    }

    /// Creates the constant monomial `value`.
    pub fn constant(value: ExactValue) -> Self {
        Self::new(value, Vec::new())
    }

    /// Creates the constant monomial `n`.
    pub fn integer(n: impl Into<Integer>) -> Self {
        Self::constant(ExactValue::integer(n))
    }

    /// Creates a monomial with coefficient 1 and the given factors.
    pub fn from_factors(factors: Vec<Factor>) -> Self {
        Self::new(ExactValue::integer(1), factors)
    }

    /// Returns true if the monomial has no factors.
    pub fn is_constant(&self) -> bool {
        self.factors.is_empty()
    }

    /// Returns true if the monomial is the constant 1.
    pub fn is_one(&self) -> bool {
        self.is_constant() && self.coefficient.is_one()
    }

    /// Returns true if the monomial is the constant 0.
    pub fn is_zero(&self) -> bool {
        self.is_constant() && self.coefficient.is_zero()
    }

    /// Returns the value of the monomial if it is a rational constant.
    pub fn as_rational(&self) -> Option<&RationalValue> {
        if self.is_constant() {
            self.coefficient.as_rational()
        } else {
            None
        }
    }

    /// Returns the value of the monomial if it is an integer constant.
    pub fn as_integer(&self) -> Option<&Integer> {
        self.as_rational().and_then(RationalValue::as_integer)
    }

    /// Returns the terms of the monomial if it is a bare sum, i.e. `1 * (terms)^1`.
    ///
    /// Bare sums appear as exponents that could not be combined into a single term, such as the
    /// `(x+2)` in `a^(x+2)`.
    pub fn as_sum(&self) -> Option<&Expression> {
        match self.factors.as_slice() {
            [Factor { base: Base::Expression(expr), exponent }]
                if self.coefficient.is_one() && exponent.is_one() => Some(expr),
            _ => None,
        }
    }

    /// Returns true if both monomials have exactly equal coefficients, and factors with equal
    /// *bases*, in order. Exponents are not compared.
    ///
    /// This is a looser comparison than [`PartialEq`], and reports `3a` and `3a^2` as equal. It
    /// exists for callers that only care about the shape of a term.
    pub fn loose_eq(&self, other: &Self) -> bool {
        self.coefficient.exact_eq(&other.coefficient)
            && self.factors.len() == other.factors.len()
            && self.factors.iter().zip(&other.factors).all(|(lhs, rhs)| lhs.base_eq(rhs))
    }

    /// Returns `self + rhs`. Both monomials must have fully equal factors.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, Error> {
        if self.factors != rhs.factors {
            return Err(Error::binary(self, "+", rhs, MismatchedTerms { operation: "add" }));
        }
        Ok(Self::new(self.coefficient.checked_add(&rhs.coefficient)?, self.factors.clone()))
    }

    /// Returns `self - rhs`. Both monomials must have fully equal factors.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, Error> {
        if self.factors != rhs.factors {
            return Err(Error::binary(self, "-", rhs, MismatchedTerms { operation: "subtract" }));
        }
        Ok(Self::new(self.coefficient.checked_sub(&rhs.coefficient)?, self.factors.clone()))
    }

    /// Returns `-self`, negating only the coefficient.
    pub fn checked_neg(&self) -> Result<Self, Error> {
        Ok(Self::new(self.coefficient.checked_neg()?, self.factors.clone()))
    }

    /// Returns `self * rhs`.
    ///
    /// The coefficients are multiplied, and the factors of both operands are concatenated and
    /// merged with [`simplify_factors`], so `2a * 3ab` is `6a^2b`.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, Error> {
        let coefficient = self.coefficient.checked_mul(&rhs.coefficient)?;
        let mut factors = self.factors.iter().chain(&rhs.factors).cloned().collect();
        simplify_factors(&mut factors)?;
        Ok(Self::new(coefficient, factors))
    }

    /// Returns the terms that make up this monomial when viewed as a sum.
    fn sum_terms(&self) -> Vec<Self> {
        match self.as_sum() {
            Some(expr) => expr.terms.clone(),
            None => vec![self.clone()],
        }
    }

    /// Returns `self + rhs`, even if the monomials are not like terms.
    ///
    /// Like terms are added with [`Monomial::checked_add`]. Otherwise, the result is the bare sum
    /// `(self+rhs)`; bare sums on either side are merged term by term, so adding `x` to `(x+2)`
    /// gives `(2x+2)` rather than a nested sum. Terms that cancel out are dropped.
    pub fn sum_with(&self, rhs: &Self) -> Result<Self, Error> {
        let mut terms = self.sum_terms();
        for term in rhs.sum_terms() {
            match terms.iter_mut().find(|existing| existing.factors == term.factors) {
                Some(existing) => *existing = existing.checked_add(&term)?,
                None => terms.push(term),
            }
        }

        terms.retain(|term| !term.coefficient.is_zero());

        Ok(match terms.len() {
            0 => Self::integer(0),
            1 => terms.remove(0),
            _ => Self::from_factors(vec![Factor::expression(terms)]),
        })
    }

    /// Returns the exponent of the factor at the given index, or an [`UnsupportedOperation`]
    /// error naming the given operation if it is not a constant integer.
    fn integer_exponent_at(&self, idx: usize, operation: &'static str) -> Result<&Integer, Error> {
        let factor = &self.factors[idx];
        let reason = match factor.integer_exponent() {
            Some(exponent) => return Ok(exponent),
            None if !factor.exponent.is_constant() => Unsupported::SymbolicExponent,
            None => Unsupported::NonIntegerExponent,
        };

        Err(Error::new(
            self.to_string(),
            vec![self.factor_span(idx)],
            UnsupportedOperation { operation, reason },
        ))
    }

    /// Returns `self / rhs`.
    ///
    /// Every exponent of `self` must be a constant integer, otherwise an [`UnsupportedOperation`]
    /// error is returned. The same holds for each factor of `rhs` that cancels against a factor of
    /// `self`.
    ///
    /// The coefficients are divided directly. Then, for each factor of `self`, the factors of a
    /// working copy of `rhs` with an equal base are consumed, subtracting their exponents:
    ///
    /// - the factor of `self` keeps `max(0, difference)`,
    /// - the divisor factor keeps `max(0, -difference)`, so a partially consumed divisor factor
    /// can still cancel later factors of `self` with the same base,
    /// - divisor factors whose exponent reaches zero are removed from the working copy.
    ///
    /// Factors of `self` with a remaining exponent of zero are dropped from the result. Divisor
    /// factors that match nothing in `self` are ignored, whatever their exponent.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, Error> {
        let exponents = (0..self.factors.len())
            .map(|idx| self.integer_exponent_at(idx, "divide").cloned())
            .collect::<Result<Vec<_>, _>>()?;

        let coefficient = self.coefficient.checked_div(&rhs.coefficient)?;

        // remaining exponent of each divisor factor, keyed by its index in `rhs`; `None` until the
        // factor first cancels against something
        let mut divisor = (0..rhs.factors.len())
            .map(|idx| (idx, None))
            .collect::<Vec<(usize, Option<Integer>)>>();

        let mut factors = Vec::with_capacity(self.factors.len());
        for (factor, mut exponent) in self.factors.iter().zip(exponents) {
            let mut pos = 0;
            while pos < divisor.len() {
                let (idx, remaining) = &mut divisor[pos];
                if rhs.factors[*idx].base_eq(factor) {
                    let divisor_exponent = match remaining.take() {
                        Some(remaining) => remaining,
                        None => rhs.integer_exponent_at(*idx, "divide")?.clone(),
                    };
                    let difference = exponent - divisor_exponent;
                    *remaining = Some(max(int(0), Integer::from(-&difference)));
                    exponent = max(int(0), difference);
                }

                if matches!(remaining, Some(remaining) if *remaining == 0) {
                    divisor.remove(pos);
                } else {
                    pos += 1;
                }
            }

            if exponent != 0 {
                factors.push(factor.clone().pow(exponent));
            }
        }

        if !divisor.is_empty() {
            debug!(
                "{} factor(s) of `{}` did not cancel against `{}`",
                divisor.len(),
                rhs,
                self,
            );
        }

        Ok(Self::new(coefficient, factors))
    }

    /// Returns true if the coefficient is omitted when rendering the monomial.
    fn hides_coefficient(&self) -> bool {
        self.coefficient.is_one() && !self.factors.is_empty()
    }

    /// Returns the byte range of the factor at the given index, within the rendered monomial.
    pub(crate) fn factor_span(&self, idx: usize) -> Range<usize> {
        let mut start = if self.hides_coefficient() {
            0
        } else {
            self.coefficient.to_string().len()
        };
        for factor in &self.factors[..idx] {
            start += factor.to_string().len();
        }
        start..start + self.factors[idx].to_string().len()
    }
}

/// Full structural equality: exactly equal coefficients, and [fully
/// equal](Factor::full_eq) factors, in order. See [`Monomial::loose_eq`] for a comparison that
/// ignores exponents.
impl PartialEq for Monomial {
    fn eq(&self, other: &Self) -> bool {
        self.coefficient.exact_eq(&other.coefficient) && self.factors == other.factors
    }
}

/// Renders the coefficient, unless it is 1 and there is at least one factor, followed by each
/// factor with no separator, such as `3a^2b`.
impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.hides_coefficient() {
            write!(f, "{}", self.coefficient)?;
        }
        for factor in &self.factors {
            write!(f, "{}", factor)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{MismatchedTerms, Unsupported, UnsupportedOperation};
    use pretty_assertions::assert_eq;
    use super::*;

    fn term(coefficient: i64, factors: Vec<Factor>) -> Monomial {
        Monomial::new(ExactValue::integer(coefficient), factors)
    }

    fn sym(symbol: char) -> Factor {
        Factor::symbol(symbol)
    }

    #[test]
    fn add_constants() {
        let sum = Monomial::integer(2).checked_add(&Monomial::integer(2)).unwrap();
        assert_eq!(sum, Monomial::integer(4));
    }

    #[test]
    fn add_like_terms() {
        let sum = term(3, vec![sym('a')]).checked_add(&term(2, vec![sym('a')])).unwrap();
        assert_eq!(sum, term(5, vec![sym('a')]));
    }

    #[test]
    fn subtract_like_terms() {
        let difference = term(3, vec![sym('a').pow(2)])
            .checked_sub(&term(5, vec![sym('a').pow(2)]))
            .unwrap();
        assert_eq!(difference, term(-2, vec![sym('a').pow(2)]));
    }

    #[test]
    fn add_mismatched_terms() {
        let err = term(3, vec![sym('a')]).checked_add(&term(2, vec![sym('b')])).unwrap_err();
        assert_eq!(err.downcast_ref::<MismatchedTerms>(), Some(&MismatchedTerms { operation: "add" }));
        assert_eq!(err.source, "3a + 2b");

        // same bases, different exponents
        let err = term(3, vec![sym('a')]).checked_sub(&term(2, vec![sym('a').pow(2)])).unwrap_err();
        assert!(err.is::<MismatchedTerms>());
    }

    #[test]
    fn negate() {
        let negated = term(3, vec![sym('a'), sym('b')]).checked_neg().unwrap();
        assert_eq!(negated, term(-3, vec![sym('a'), sym('b')]));
    }

    #[test]
    fn multiply() {
        let product = term(2, vec![sym('a')])
            .checked_mul(&term(3, vec![sym('a'), sym('b')]))
            .unwrap();
        assert_eq!(product, term(6, vec![sym('a').pow(2), sym('b')]));
        assert_eq!(product.to_string(), "6a^2b");
    }

    #[test]
    fn operands_are_not_mutated() {
        let dividend = term(6, vec![sym('a').pow(3), sym('b')]);
        let divisor = term(2, vec![sym('a').pow(2)]);
        let (dividend_before, divisor_before) = (dividend.clone(), divisor.clone());

        let mut quotient = dividend.checked_div(&divisor).unwrap();
        quotient.factors[0].exponent = Monomial::integer(10);

        assert_eq!(dividend, dividend_before);
        assert_eq!(divisor, divisor_before);
    }

    #[test]
    fn divide_constants() {
        let quotient = Monomial::integer(6).checked_div(&Monomial::integer(4)).unwrap();
        assert_eq!(quotient, Monomial::constant(ExactValue::rational(3, 2).unwrap()));
    }

    #[test]
    fn divide_removes_factors() {
        // 8x^2yz / 4xy = 2xz
        let quotient = term(8, vec![sym('x').pow(2), sym('y'), sym('z')])
            .checked_div(&term(4, vec![sym('x'), sym('y')]))
            .unwrap();
        assert_eq!(quotient, term(2, vec![sym('x'), sym('z')]));
    }

    #[test]
    fn divide_clamps_at_zero() {
        // a / a^3 = 1, the rest of the divisor is discarded
        let quotient = term(1, vec![sym('a')]).checked_div(&term(1, vec![sym('a').pow(3)])).unwrap();
        assert_eq!(quotient, Monomial::integer(1));
    }

    #[test]
    fn divide_residual_cancels_later_factors() {
        // unsimplified a*a*a / a^2 = a
        let quotient = term(1, vec![sym('a'), sym('a'), sym('a')])
            .checked_div(&term(1, vec![sym('a').pow(2)]))
            .unwrap();
        assert_eq!(quotient, term(1, vec![sym('a')]));
    }

    #[test]
    fn divide_by_missing_factor() {
        let quotient = term(4, vec![sym('a')]).checked_div(&term(2, vec![sym('b')])).unwrap();
        assert_eq!(quotient, term(2, vec![sym('a')]));
    }

    #[test]
    fn divide_sub_expression_factor() {
        let sum = || Factor::expression(vec![term(1, vec![sym('x')]), Monomial::integer(1)]);
        let quotient = term(3, vec![sum().pow(2), sym('y')])
            .checked_div(&term(3, vec![sum()]))
            .unwrap();
        assert_eq!(quotient, term(1, vec![sum(), sym('y')]));
        assert_eq!(quotient.to_string(), "(x+1)y");
    }

    #[test]
    fn divide_symbolic_exponent() {
        let dividend = term(3, vec![sym('b'), sym('a').with_exponent(term(1, vec![sym('x')]))]);
        let err = dividend.checked_div(&term(1, vec![sym('a')])).unwrap_err();
        let kind = err.downcast_ref::<UnsupportedOperation>().unwrap();
        assert_eq!(kind.reason, Unsupported::SymbolicExponent);
        assert_eq!(err.source, "3ba^(x)");
        assert_eq!(&err.source[err.spans[0].clone()], "a^(x)");
    }

    #[test]
    fn divide_fractional_exponent() {
        let half = Monomial::constant(ExactValue::rational(1, 2).unwrap());
        let dividend = term(1, vec![sym('a').with_exponent(half)]);
        let err = dividend.checked_div(&term(1, vec![sym('a')])).unwrap_err();
        let kind = err.downcast_ref::<UnsupportedOperation>().unwrap();
        assert_eq!(kind.reason, Unsupported::NonIntegerExponent);
        assert_eq!(&err.source[err.spans[0].clone()], "a^(1/2)");
    }

    #[test]
    fn divide_symbolic_divisor() {
        let divisor = term(2, vec![sym('b'), sym('a').with_exponent(term(1, vec![sym('x')]))]);
        let err = term(4, vec![sym('a')]).checked_div(&divisor).unwrap_err();
        let kind = err.downcast_ref::<UnsupportedOperation>().unwrap();
        assert_eq!(kind.reason, Unsupported::SymbolicExponent);
        assert_eq!(err.source, "2ba^(x)");
        assert_eq!(&err.source[err.spans[0].clone()], "a^(x)");
    }

    #[test]
    fn divide_ignores_unmatched_symbolic_divisor() {
        // 3a / b^(x) = 3a
        let divisor = term(1, vec![sym('b').with_exponent(term(1, vec![sym('x')]))]);
        let quotient = term(3, vec![sym('a')]).checked_div(&divisor).unwrap();
        assert_eq!(quotient, term(3, vec![sym('a')]));

        let half = Monomial::constant(ExactValue::rational(1, 2).unwrap());
        let divisor = term(3, vec![sym('a'), sym('c').with_exponent(half)]);
        let quotient = term(6, vec![sym('a').pow(2)]).checked_div(&divisor).unwrap();
        assert_eq!(quotient, term(2, vec![sym('a')]));
    }

    #[test]
    fn sum_like_terms() {
        let sum = Monomial::integer(2).sum_with(&Monomial::integer(3)).unwrap();
        assert_eq!(sum, Monomial::integer(5));
    }

    #[test]
    fn sum_unlike_terms() {
        let x = term(1, vec![sym('x')]);
        let sum = x.sum_with(&Monomial::integer(2)).unwrap();
        assert_eq!(sum.to_string(), "(x+2)");
        assert_eq!(sum.as_sum().map(Expression::len), Some(2));

        // merging into an existing sum
        let sum = sum.sum_with(&x).unwrap();
        assert_eq!(sum.to_string(), "(2x+2)");

        let sum = sum.sum_with(&Monomial::integer(-2)).unwrap();
        assert_eq!(sum, term(2, vec![sym('x')]));
    }

    #[test]
    fn loose_equality_ignores_exponents() {
        let a = term(3, vec![sym('a')]);
        let a_squared = term(3, vec![sym('a').pow(2)]);
        assert!(a.loose_eq(&a_squared));
        assert_ne!(a, a_squared);
        assert!(!a.loose_eq(&term(2, vec![sym('a')])));
    }

    #[test]
    fn display() {
        assert_eq!(term(2, vec![sym('a')]).to_string(), "2a");
        assert_eq!(term(2, vec![sym('a').pow(2)]).to_string(), "2a^2");
        assert_eq!(term(1, vec![sym('a'), sym('b')]).to_string(), "ab");
        assert_eq!(term(-1, vec![sym('a')]).to_string(), "-1a");
        assert_eq!(Monomial::integer(1).to_string(), "1");

        let exponent = Monomial::from_factors(vec![Factor::expression(vec![
            term(5, vec![sym('x')]),
            Monomial::integer(1),
        ])]);
        let number = term(3, vec![sym('a').with_exponent(exponent)]);
        assert_eq!(number.to_string(), "3a^(5x+1)");
    }

    #[test]
    fn factor_spans() {
        let number = term(12, vec![sym('x'), sym('y').pow(3)]);
        let rendered = number.to_string();
        assert_eq!(rendered, "12xy^3");
        assert_eq!(&rendered[number.factor_span(0)], "x");
        assert_eq!(&rendered[number.factor_span(1)], "y^3");

        let number = term(1, vec![sym('x'), sym('y')]);
        assert_eq!(number.factor_span(1), 1..2);
    }
}
