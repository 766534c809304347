use crate::{
    consts::TOLERANCE,
    error::{DivisionByZero, Error},
    primitive::{decimal, int},
};
use rug::Integer;
use std::{cmp::Ordering, fmt, ops::{Add, Mul, Neg, Sub}};
use super::factors::prime_factors;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An exact rational number, such as `3`, `-6` or `1/2`.
///
/// A [`RationalValue`] is always stored in lowest terms with a positive denominator. The
/// constructors perform this reduction immediately, folding the sign of the denominator into the
/// numerator, so that two equal fractions always have the same numerator and denominator.
///
/// The decimal approximation of the value is computed once on construction, and is used for
/// tolerance comparisons with [`RationalValue::approx_eq`].
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RationalRepr", into = "RationalRepr")
)]
pub struct RationalValue {
    numerator: Integer,
    denominator: Integer,
    decimal: f64,
}

impl RationalValue {
    /// Creates the fraction `numerator / denominator`, reduced to lowest terms.
    ///
    /// Returns [`DivisionByZero`] if the denominator is zero.
    pub fn new(
        numerator: impl Into<Integer>,
        denominator: impl Into<Integer>,
    ) -> Result<Self, Error> {
        let (numerator, denominator) = (numerator.into(), denominator.into());
        if denominator.is_zero() {
            return Err(Error::whole(format!("{}/{}", numerator, denominator), DivisionByZero));
        }

        Ok(Self::reduced(numerator, denominator))
    }

    /// Creates the integer `n`.
    pub fn integer(n: impl Into<Integer>) -> Self {
        let numerator = n.into();
        let denominator = int(1);
        let decimal = numerator.to_f64();
        Self { numerator, denominator, decimal }
    }

    /// Reduces the fraction to lowest terms. The denominator must not be zero.
    fn reduced(mut numerator: Integer, mut denominator: Integer) -> Self {
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }

        let gcd = Integer::from(numerator.gcd_ref(&denominator));
        if gcd != 1 {
            numerator.div_exact_mut(&gcd);
            denominator.div_exact_mut(&gcd);
        }

        let decimal = decimal(&numerator, &denominator);
        Self { numerator, denominator, decimal }
    }

    /// The numerator, which carries the sign of the value.
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// The denominator, which is always positive.
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// The cached decimal approximation of the value.
    pub fn decimal(&self) -> f64 {
        self.decimal
    }

    /// Returns true if the value is an integer.
    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// Returns the value as an [`Integer`], if it is one.
    pub fn as_integer(&self) -> Option<&Integer> {
        self.is_integer().then_some(&self.numerator)
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Returns true if both values have the same numerator and denominator.
    pub fn exact_eq(&self, other: &Self) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }

    /// Returns true if the decimal values of both values are within [`TOLERANCE`] of each other.
    pub fn approx_eq(&self, other: &Self) -> bool {
        (self.decimal - other.decimal).abs() < TOLERANCE
    }

    /// Returns `1 / self`, or [`DivisionByZero`] if the value is zero.
    pub fn recip(&self) -> Result<Self, Error> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Returns `self / rhs`, or [`DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, Error> {
        if rhs.is_zero() {
            return Err(Error::binary(self, "/", rhs, DivisionByZero));
        }
        Ok(self * &rhs.recip()?)
    }

    /// Returns the prime factors of the value, preceded by the sentinel `1`.
    ///
    /// Factoring fractions is not supported; the prime factors of a non-integer value are just
    /// `[1]`. See [`prime_factors`] for details.
    pub fn prime_factors(&self) -> Vec<Integer> {
        match self.as_integer() {
            Some(n) => prime_factors(n),
            None => vec![int(1)],
        }
    }
}

/// Exact equality. Use [`RationalValue::approx_eq`] for tolerance comparisons.
impl PartialEq for RationalValue {
    fn eq(&self, other: &Self) -> bool {
        self.exact_eq(other)
    }
}

impl Eq for RationalValue {}

impl PartialOrd for RationalValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Denominators are always positive, so cross-multiplying preserves the ordering.
impl Ord for RationalValue {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = Integer::from(&self.numerator * &other.denominator);
        let rhs = Integer::from(&other.numerator * &self.denominator);
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for RationalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "({}/{})", self.numerator, self.denominator)
        }
    }
}

/// Adds two fractions over the least common multiple of their denominators, keeping the
/// intermediate numbers as small as possible.
impl Add<&RationalValue> for &RationalValue {
    type Output = RationalValue;

    fn add(self, rhs: &RationalValue) -> RationalValue {
        let denominator = Integer::from(self.denominator.lcm_ref(&rhs.denominator));
        let lhs_scale = Integer::from(&denominator / &self.denominator);
        let rhs_scale = Integer::from(&denominator / &rhs.denominator);
        let numerator = self.numerator.clone() * lhs_scale + rhs.numerator.clone() * rhs_scale;
        RationalValue::reduced(numerator, denominator)
    }
}

impl Sub<&RationalValue> for &RationalValue {
    type Output = RationalValue;

    fn sub(self, rhs: &RationalValue) -> RationalValue {
        self + &-rhs
    }
}

impl Mul<&RationalValue> for &RationalValue {
    type Output = RationalValue;

    fn mul(self, rhs: &RationalValue) -> RationalValue {
        RationalValue::reduced(
            Integer::from(&self.numerator * &rhs.numerator),
            Integer::from(&self.denominator * &rhs.denominator),
        )
    }
}

impl Neg for &RationalValue {
    type Output = RationalValue;

    fn neg(self) -> RationalValue {
        RationalValue {
            numerator: -self.numerator.clone(),
            denominator: self.denominator.clone(),
            decimal: -self.decimal,
        }
    }
}

/// The serialized form of a [`RationalValue`]. The decimal approximation is recomputed, and the
/// fraction is reduced, on deserialization.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RationalRepr {
    numerator: Integer,
    denominator: Integer,
}

#[cfg(feature = "serde")]
impl TryFrom<RationalRepr> for RationalValue {
    type Error = Error;

    fn try_from(repr: RationalRepr) -> Result<Self, Self::Error> {
        Self::new(repr.numerator, repr.denominator)
    }
}

#[cfg(feature = "serde")]
impl From<RationalValue> for RationalRepr {
    fn from(value: RationalValue) -> Self {
        Self { numerator: value.numerator, denominator: value.denominator }
    }
}
