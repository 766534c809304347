use crate::{
    consts::{PLUS_MINUS, RADICAL, TOLERANCE},
    error::{Error, NegativeRadical},
};
use std::fmt;
use super::rational::RationalValue;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The sign in front of the radical part of an [`IrrationalValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    /// `a + √b`
    Positive,

    /// `a - √b`
    Negative,

    /// `a ± √b`, for example the two solutions produced by the quadratic formula.
    Both,
}

impl Sign {
    /// The factor applied to the radical part in the (first) decimal value.
    fn factor(&self) -> f64 {
        match self {
            Self::Positive | Self::Both => 1.0,
            Self::Negative => -1.0,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "+"),
            Self::Negative => write!(f, "-"),
            Self::Both => write!(f, "{}", PLUS_MINUS),
        }
    }
}

/// An irrational value of the form `coefficient ± √radical`, such as `1 + √3` or `3 ± √2`.
///
/// Irrational values are representation objects only: they can be constructed, compared and
/// displayed, but no arithmetic is defined on them.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "IrrationalRepr", into = "IrrationalRepr")
)]
pub struct IrrationalValue {
    coefficient: RationalValue,
    sign: Sign,
    radical: RationalValue,

    /// `coefficient + √radical`, or `coefficient - √radical` if the sign is negative.
    decimal: f64,

    /// `coefficient - √radical`, present only if the sign is [`Sign::Both`].
    second_decimal: Option<f64>,
}

impl IrrationalValue {
    /// Creates the value `coefficient sign √radical`.
    ///
    /// Returns [`NegativeRadical`] if the radical is negative.
    pub fn new(coefficient: RationalValue, sign: Sign, radical: RationalValue) -> Result<Self, Error> {
        if radical.is_negative() {
            return Err(Error::whole(format!("{}{}", RADICAL, radical), NegativeRadical));
        }

        let root = radical.decimal().sqrt();
        let decimal = coefficient.decimal() + sign.factor() * root;
        let second_decimal = (sign == Sign::Both).then(|| coefficient.decimal() - root);
        Ok(Self { coefficient, sign, radical, decimal, second_decimal })
    }

    /// Creates the value `coefficient ± √radical`, which has two decimal values.
    pub fn both(coefficient: RationalValue, radical: RationalValue) -> Result<Self, Error> {
        Self::new(coefficient, Sign::Both, radical)
    }

    pub fn coefficient(&self) -> &RationalValue {
        &self.coefficient
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn radical(&self) -> &RationalValue {
        &self.radical
    }

    /// The decimal value of `coefficient + √radical` (or `coefficient - √radical` if the sign is
    /// negative).
    pub fn decimal(&self) -> f64 {
        self.decimal
    }

    /// The decimal value of `coefficient - √radical`, if the sign is [`Sign::Both`].
    pub fn second_decimal(&self) -> Option<f64> {
        self.second_decimal
    }

    /// Returns true if both values have exactly equal coefficients, signs and radicals.
    pub fn exact_eq(&self, other: &Self) -> bool {
        self.coefficient.exact_eq(&other.coefficient)
            && self.sign == other.sign
            && self.radical.exact_eq(&other.radical)
    }

    /// Returns true if the decimal values of both values are within [`TOLERANCE`] of each other.
    pub fn approx_eq(&self, other: &Self) -> bool {
        (self.decimal - other.decimal).abs() < TOLERANCE
    }
}

/// Exact equality. Use [`IrrationalValue::approx_eq`] for tolerance comparisons.
impl PartialEq for IrrationalValue {
    fn eq(&self, other: &Self) -> bool {
        self.exact_eq(other)
    }
}

impl fmt::Display for IrrationalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}{}", self.coefficient, self.sign, RADICAL, self.radical)
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct IrrationalRepr {
    coefficient: RationalValue,
    sign: Sign,
    radical: RationalValue,
}

#[cfg(feature = "serde")]
impl TryFrom<IrrationalRepr> for IrrationalValue {
    type Error = Error;

    fn try_from(repr: IrrationalRepr) -> Result<Self, Self::Error> {
        Self::new(repr.coefficient, repr.sign, repr.radical)
    }
}

#[cfg(feature = "serde")]
impl From<IrrationalValue> for IrrationalRepr {
    fn from(value: IrrationalValue) -> Self {
        Self { coefficient: value.coefficient, sign: value.sign, radical: value.radical }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::NegativeRadical;
    use super::*;

    fn int(n: i64) -> RationalValue {
        RationalValue::integer(n)
    }

    #[test]
    fn positive_sign() {
        let value = IrrationalValue::new(int(1), Sign::Positive, int(4)).unwrap();
        assert_eq!(value.decimal(), 3.0);
        assert_eq!(value.second_decimal(), None);
        assert_eq!(value.to_string(), "1+√4");
    }

    #[test]
    fn negative_sign() {
        let value = IrrationalValue::new(int(7), Sign::Negative, int(9)).unwrap();
        assert_eq!(value.decimal(), 4.0);
        assert_eq!(value.to_string(), "7-√9");
    }

    #[test]
    fn both_signs() {
        let value = IrrationalValue::both(int(3), int(16)).unwrap();
        assert_eq!(value.decimal(), 7.0);
        assert_eq!(value.second_decimal(), Some(-1.0));
        assert_eq!(value.to_string(), "3±√16");
    }

    #[test]
    fn fractional_parts() {
        let half = RationalValue::new(1, 2).unwrap();
        let value = IrrationalValue::new(half.clone(), Sign::Positive, int(2)).unwrap();
        assert_eq!(value.to_string(), "(1/2)+√2");
        assert!((value.decimal() - (0.5 + 2f64.sqrt())).abs() < 1e-12);
    }

    #[test]
    fn negative_radical() {
        let err = IrrationalValue::new(int(1), Sign::Positive, int(-2)).unwrap_err();
        assert!(err.is::<NegativeRadical>());
        assert_eq!(err.source, "√-2");
    }

    #[test]
    fn exact_equality_considers_sign() {
        let plus = IrrationalValue::new(int(1), Sign::Positive, int(2)).unwrap();
        let both = IrrationalValue::both(int(1), int(2)).unwrap();
        assert!(!plus.exact_eq(&both));
        assert!(plus.approx_eq(&both));
        assert_eq!(plus, IrrationalValue::new(int(1), Sign::Positive, int(2)).unwrap());
    }
}
