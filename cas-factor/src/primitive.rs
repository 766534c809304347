//! Functions to construct [`Integer`]s and compute decimal approximations from various types.

use rug::{Integer, Rational};

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Computes the closest [`f64`] to `numerator / denominator`.
///
/// The division is done exactly before rounding, so large numerators and denominators do not
/// overflow to infinity the way dividing two converted [`f64`]s would. The denominator must not
/// be zero.
pub(crate) fn decimal(numerator: &Integer, denominator: &Integer) -> f64 {
    Rational::from((numerator.clone(), denominator.clone())).to_f64()
}

/// Multiplies all the given integers together. The product of no integers is 1.
pub(crate) fn product<'a>(factors: impl IntoIterator<Item = &'a Integer>) -> Integer {
    factors.into_iter().fold(int(1), |acc, factor| acc * factor)
}
