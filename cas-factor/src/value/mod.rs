//! Exact numeric values.
//!
//! An [`ExactValue`] is either a [`RationalValue`], which supports exact arithmetic, or an
//! [`IrrationalValue`], which is a representation-only value of the form `a ± √b`.
//!
//! # Equality
//!
//! Values have two distinct notions of equality, and algorithms must choose the one they need:
//!
//! - [`ExactValue::exact_eq`] (also used by [`PartialEq`]) compares the exact representation,
//! i.e. numerator and denominator. It is used for structural matching and deduplication.
//! - [`ExactValue::approx_eq`] compares the cached decimal values within
//! [`TOLERANCE`](crate::consts::TOLERANCE). It is used to ask questions such as "is this
//! coefficient 1?" (see [`ExactValue::is_one`]).

mod factors;
mod irrational;
mod rational;

pub use factors::{gcf, lcm, prime_factors};
pub use irrational::{IrrationalValue, Sign};
pub use rational::RationalValue;

use crate::{
    consts::TOLERANCE,
    error::{Error, Unsupported, UnsupportedOperation},
};
use rug::Integer;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An exact numeric value.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExactValue {
    /// A rational number, such as `2`, `-6` or `1/2`.
    Rational(RationalValue),

    /// An irrational number, such as `1 + √3` or `3 ± √2`.
    Irrational(IrrationalValue),
}

impl ExactValue {
    /// Creates the integer `n`.
    pub fn integer(n: impl Into<Integer>) -> Self {
        Self::Rational(RationalValue::integer(n))
    }

    /// Creates the fraction `numerator / denominator`, reduced to lowest terms.
    pub fn rational(
        numerator: impl Into<Integer>,
        denominator: impl Into<Integer>,
    ) -> Result<Self, Error> {
        RationalValue::new(numerator, denominator).map(Self::Rational)
    }

    /// The cached decimal approximation of the value. For an irrational value with sign
    /// [`Sign::Both`], this is the `a + √b` solution.
    pub fn decimal(&self) -> f64 {
        match self {
            Self::Rational(value) => value.decimal(),
            Self::Irrational(value) => value.decimal(),
        }
    }

    /// Returns the value as a [`RationalValue`], if it is one.
    pub fn as_rational(&self) -> Option<&RationalValue> {
        match self {
            Self::Rational(value) => Some(value),
            Self::Irrational(_) => None,
        }
    }

    /// Returns the value as an [`Integer`], if it is one.
    pub fn as_integer(&self) -> Option<&Integer> {
        self.as_rational().and_then(RationalValue::as_integer)
    }

    /// Returns true if the value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.as_rational().map(RationalValue::is_zero).unwrap_or(false)
    }

    /// Returns true if the value is approximately 1.
    pub fn is_one(&self) -> bool {
        (self.decimal() - 1.0).abs() < TOLERANCE
    }

    /// Returns true if both values have the same variant and exactly equal parts.
    pub fn exact_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Rational(lhs), Self::Rational(rhs)) => lhs.exact_eq(rhs),
            (Self::Irrational(lhs), Self::Irrational(rhs)) => lhs.exact_eq(rhs),
            _ => false,
        }
    }

    /// Returns true if the decimal values of both values are within
    /// [`TOLERANCE`](crate::consts::TOLERANCE) of each other, regardless of variant.
    ///
    /// Unlike [`ExactValue::exact_eq`], values with different representations can be considered
    /// equal.
    pub fn approx_eq(&self, other: &Self) -> bool {
        (self.decimal() - other.decimal()).abs() < TOLERANCE
    }

    /// Returns the rational value, or an [`UnsupportedOperation`] error naming the given
    /// operation if the value is irrational.
    fn rational_operand(&self, operation: &'static str) -> Result<&RationalValue, Error> {
        self.as_rational().ok_or_else(|| Error::whole(
            self.to_string(),
            UnsupportedOperation { operation, reason: Unsupported::IrrationalArithmetic },
        ))
    }

    /// Returns `self + rhs`.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, Error> {
        let (lhs, rhs) = (self.rational_operand("add")?, rhs.rational_operand("add")?);
        Ok(Self::Rational(lhs + rhs))
    }

    /// Returns `self - rhs`.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, Error> {
        let (lhs, rhs) = (self.rational_operand("subtract")?, rhs.rational_operand("subtract")?);
        Ok(Self::Rational(lhs - rhs))
    }

    /// Returns `-self`.
    pub fn checked_neg(&self) -> Result<Self, Error> {
        Ok(Self::Rational(-(self.rational_operand("negate")? as &RationalValue)))
    }

    /// Returns `self * rhs`.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, Error> {
        let (lhs, rhs) = (self.rational_operand("multiply")?, rhs.rational_operand("multiply")?);
        Ok(Self::Rational(lhs * rhs))
    }

    /// Returns `self / rhs`.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, Error> {
        let (lhs, rhs) = (self.rational_operand("divide")?, rhs.rational_operand("divide")?);
        lhs.checked_div(rhs).map(Self::Rational)
    }

    /// Returns `1 / self`.
    pub fn checked_recip(&self) -> Result<Self, Error> {
        self.rational_operand("find the reciprocal of")?
            .recip()
            .map(Self::Rational)
    }
}

impl From<RationalValue> for ExactValue {
    fn from(value: RationalValue) -> Self {
        Self::Rational(value)
    }
}

impl From<IrrationalValue> for ExactValue {
    fn from(value: IrrationalValue) -> Self {
        Self::Irrational(value)
    }
}

/// Exact equality. Use [`ExactValue::approx_eq`] for tolerance comparisons.
impl PartialEq for ExactValue {
    fn eq(&self, other: &Self) -> bool {
        self.exact_eq(other)
    }
}

impl fmt::Display for ExactValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rational(value) => write!(f, "{}", value),
            Self::Irrational(value) => write!(f, "{}", value),
        }
    }
}
