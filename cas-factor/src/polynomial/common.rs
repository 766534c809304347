//! Finding and extracting the common factor of the terms of an expression.

use crate::{
    algebra::{Expression, Factor, Monomial},
    error::{EmptyExpression, Error, Unsupported, UnsupportedOperation},
    value::{gcf, ExactValue, RationalValue},
};
use log::debug;
use std::cmp::min;

/// Returns the exponent of the factor as a [`RationalValue`], or an [`UnsupportedOperation`]
/// error if the exponent is symbolic or irrational.
fn rational_exponent(factor: &Factor) -> Result<&RationalValue, Error> {
    factor.exponent.as_rational().ok_or_else(|| {
        let reason = if factor.exponent.is_constant() {
            Unsupported::IrrationalArithmetic
        } else {
            Unsupported::SymbolicExponent
        };
        Error::whole(
            factor.to_string(),
            UnsupportedOperation { operation: "find the common factor of", reason },
        )
    })
}

/// Returns the factors shared by both lists, each raised to the smaller of its two exponents.
///
/// Both lists should already be [simplified](super::simplify_factors). The result follows the
/// order of `left`; factors of `left` with no [base-equal](Factor::base_eq) counterpart in
/// `right`, or whose smaller exponent is zero, are dropped.
///
/// - `[a^2]`, `[a, b]` -> `[a]`
/// - `[a^3, b^2]`, `[a, b, c^2]` -> `[a, b]`
///
/// The exponents of matching factors must be rational constants, since symbolic exponents cannot
/// be compared. Otherwise, an [`UnsupportedOperation`] error is returned.
pub fn common_factors(left: &[Factor], right: &[Factor]) -> Result<Vec<Factor>, Error> {
    let mut common = Vec::new();
    for factor in left {
        let Some(other) = right.iter().find(|other| other.base_eq(factor)) else {
            continue;
        };

        let exponent = min(rational_exponent(factor)?, rational_exponent(other)?);
        if !exponent.is_zero() {
            common.push(factor.clone().with_exponent(Monomial::constant(exponent.clone().into())));
        }
    }

    Ok(common)
}

/// Finds the common factor of every term in the expression.
///
/// The common factor starts as the first term. Each following term narrows it down: the
/// coefficient becomes the [greatest common factor](gcf) of the two coefficients, and the factors
/// become the [`common_factors`] of the two factor lists.
///
/// The common factor is returned even if it is `1`; see [`has_common_factor`] for a version that
/// only returns meaningful common factors. An expression with no terms is an
/// [`EmptyExpression`] error.
pub fn common_factor(expr: &Expression) -> Result<Monomial, Error> {
    let (first, rest) = expr.terms
        .split_first()
        .ok_or_else(|| Error::whole(expr.to_string(), EmptyExpression))?;

    let mut common = first.clone();
    for term in rest {
        common.coefficient = gcf(&common.coefficient, &term.coefficient)?;
        common.factors = common_factors(&common.factors, &term.factors)?;
    }

    Ok(common)
}

/// Finds the common factor of every term in the expression, returning it only if it is not
/// exactly `1`.
///
/// - `2+4` -> `Some(2)`
/// - `2x+4` -> `Some(2)`
/// - `8x^2yz+12xy^3` -> `Some(4xy)`
/// - `a+b` -> `None`
pub fn has_common_factor(expr: &Expression) -> Result<Option<Monomial>, Error> {
    let common = common_factor(expr)?;
    if !common.factors.is_empty() || !common.coefficient.exact_eq(&ExactValue::integer(1)) {
        debug!("found common factor `{}` in `{}`", common, expr);
        Ok(Some(common))
    } else {
        debug!("no common factor in `{}`", expr);
        Ok(None)
    }
}

/// Factors the given common factor out of the expression.
///
/// The result is `common` with one extra factor appended: the parenthesized sum of each term
/// [divided](Monomial::checked_div) by `common`. For example, factoring `2` out of `2a+2b` gives
/// `2(a+b)`.
pub fn factor_out(expr: &Expression, common: &Monomial) -> Result<Monomial, Error> {
    let quotients = expr.terms
        .iter()
        .map(|term| term.checked_div(common))
        .collect::<Result<Expression, _>>()?;

    let mut factored = common.clone();
    factored.factors.push(Factor::expression(quotients));
    Ok(factored)
}

#[cfg(test)]
mod tests {
    use crate::error::{EmptyExpression, Unsupported, UnsupportedOperation};
    use pretty_assertions::assert_eq;
    use super::*;

    fn sym(symbol: char) -> Factor {
        Factor::symbol(symbol)
    }

    fn term(coefficient: i64, factors: Vec<Factor>) -> Monomial {
        Monomial::new(ExactValue::integer(coefficient), factors)
    }

    #[test]
    fn common_factors_single() {
        let common = common_factors(&[sym('a').pow(2)], &[sym('a'), sym('b')]).unwrap();
        assert_eq!(common, vec![sym('a')]);
    }

    #[test]
    fn common_factors_many() {
        let common = common_factors(
            &[sym('a').pow(3), sym('b').pow(2)],
            &[sym('a'), sym('b'), sym('c').pow(2)],
        ).unwrap();
        assert_eq!(common, vec![sym('a'), sym('b')]);
    }

    #[test]
    fn common_factors_follow_left_order() {
        let common = common_factors(
            &[sym('b').pow(2), sym('a').pow(4)],
            &[sym('a').pow(3), sym('b').pow(5)],
        ).unwrap();
        assert_eq!(common, vec![sym('b').pow(2), sym('a').pow(3)]);
    }

    #[test]
    fn common_factors_symmetric() {
        let left = [sym('x').pow(2), sym('y'), sym('z')];
        let right = [sym('y').pow(3), sym('x')];
        assert_eq!(common_factors(&left, &right).unwrap(), vec![sym('x'), sym('y')]);
        assert_eq!(common_factors(&right, &left).unwrap(), vec![sym('y'), sym('x')]);
    }

    #[test]
    fn common_factors_none() {
        assert_eq!(common_factors(&[sym('a')], &[sym('b')]).unwrap(), Vec::new());
        assert_eq!(common_factors(&[], &[sym('b')]).unwrap(), Vec::new());
    }

    #[test]
    fn common_factors_zero_exponent_dropped() {
        let common = common_factors(&[sym('a').pow(0), sym('b')], &[sym('a'), sym('b')]).unwrap();
        assert_eq!(common, vec![sym('b')]);
    }

    #[test]
    fn common_factors_symbolic_exponent() {
        let x = Monomial::from_factors(vec![sym('x')]);
        let err = common_factors(&[sym('a').with_exponent(x)], &[sym('a')]).unwrap_err();
        let kind = err.downcast_ref::<UnsupportedOperation>().unwrap();
        assert_eq!(kind.reason, Unsupported::SymbolicExponent);
        assert_eq!(err.source, "a^(x)");

        // unmatched symbolic exponents are never compared
        let x = Monomial::from_factors(vec![sym('x')]);
        let common = common_factors(&[sym('a').with_exponent(x), sym('b')], &[sym('b')]).unwrap();
        assert_eq!(common, vec![sym('b')]);
    }

    #[test]
    fn common_factor_constants() {
        let expr = Expression::new(vec![Monomial::integer(2), Monomial::integer(4)]);
        assert_eq!(has_common_factor(&expr).unwrap(), Some(Monomial::integer(2)));
    }

    #[test]
    fn common_factor_coefficient_only() {
        let expr = Expression::new(vec![term(2, vec![sym('x')]), Monomial::integer(4)]);
        assert_eq!(has_common_factor(&expr).unwrap(), Some(Monomial::integer(2)));
    }

    #[test]
    fn common_factor_coefficient_and_factors() {
        let expr = Expression::new(vec![
            term(8, vec![sym('x').pow(2), sym('y'), sym('z')]),
            term(12, vec![sym('x'), sym('y').pow(3)]),
        ]);
        let common = has_common_factor(&expr).unwrap().unwrap();
        assert_eq!(common, term(4, vec![sym('x'), sym('y')]));
        assert_eq!(common.to_string(), "4xy");
    }

    #[test]
    fn common_factor_of_three_terms() {
        let expr = Expression::new(vec![
            term(6, vec![sym('a').pow(2), sym('b')]),
            term(9, vec![sym('a').pow(3)]),
            term(15, vec![sym('a'), sym('b'), sym('c')]),
        ]);
        assert_eq!(has_common_factor(&expr).unwrap(), Some(term(3, vec![sym('a')])));
    }

    #[test]
    fn no_common_factor() {
        let expr = Expression::new(vec![term(1, vec![sym('a')]), term(1, vec![sym('b')])]);
        assert_eq!(has_common_factor(&expr).unwrap(), None);

        // the common factor itself is still available
        assert_eq!(common_factor(&expr).unwrap(), Monomial::integer(1));
    }

    #[test]
    fn single_term_is_its_own_common_factor() {
        let expr = Expression::new(vec![term(3, vec![sym('a')])]);
        assert_eq!(has_common_factor(&expr).unwrap(), Some(term(3, vec![sym('a')])));
    }

    #[test]
    fn common_factor_almost_one() {
        // approximately 1, but not exactly
        let almost_one = ExactValue::rational(10_000_000_000_001_i64, 10_000_000_000_000_i64).unwrap();
        assert!(almost_one.is_one());

        let expr = Expression::new(vec![Monomial::constant(almost_one.clone())]);
        assert_eq!(has_common_factor(&expr).unwrap(), Some(Monomial::constant(almost_one)));
    }

    #[test]
    fn common_factor_empty_expression() {
        let err = common_factor(&Expression::default()).unwrap_err();
        assert!(err.is::<EmptyExpression>());
    }

    #[test]
    fn common_factor_fractional_coefficient() {
        let expr = Expression::new(vec![
            Monomial::constant(ExactValue::rational(1, 2).unwrap()),
            Monomial::integer(4),
        ]);
        let err = has_common_factor(&expr).unwrap_err();
        let kind = err.downcast_ref::<UnsupportedOperation>().unwrap();
        assert_eq!(kind.reason, Unsupported::NonIntegerOperand);
    }

    #[test]
    fn factor_out_coefficient() {
        let expr = Expression::new(vec![term(2, vec![sym('a')]), term(2, vec![sym('b')])]);
        let factored = factor_out(&expr, &Monomial::integer(2)).unwrap();
        assert_eq!(factored, term(2, vec![Factor::expression(vec![
            term(1, vec![sym('a')]),
            term(1, vec![sym('b')]),
        ])]));
        assert_eq!(factored.to_string(), "2(a+b)");
    }

    #[test]
    fn factor_out_factors() {
        let expr = Expression::new(vec![
            term(8, vec![sym('x').pow(2), sym('y'), sym('z')]),
            term(12, vec![sym('x'), sym('y').pow(3)]),
        ]);
        let factored = factor_out(&expr, &term(4, vec![sym('x'), sym('y')])).unwrap();
        assert_eq!(factored.to_string(), "4xy(2xz+3y^2)");
    }

    #[test]
    fn factor_out_leaves_input_untouched() {
        let expr = Expression::new(vec![term(2, vec![sym('a')]), term(4, vec![sym('a').pow(2)])]);
        let before = expr.clone();
        factor_out(&expr, &term(2, vec![sym('a')])).unwrap();
        assert_eq!(expr, before);
    }
}
