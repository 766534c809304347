//! The kinds of errors that can occur while manipulating values, monomials and polynomials.
//!
//! Every kind derives [`ErrorKind`] and is packaged into a [`cas_error::Error`], along with the
//! rendered text of the operation that failed. Use [`cas_error::Error::downcast_ref`] to recover
//! the kind.

use cas_attrs::ErrorKind;
use std::fmt;

pub use cas_error::Error;

/// The reason an [`UnsupportedOperation`] was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {
    /// An exponent carries factors of its own, such as the `x` in `a^x`.
    SymbolicExponent,

    /// An exponent is a constant, but not an integer, such as the `1/2` in `a^(1/2)`.
    NonIntegerExponent,

    /// Arithmetic was requested on an irrational value, which only supports construction and
    /// display.
    IrrationalArithmetic,

    /// A number theoretic function was given a value that is not an integer.
    NonIntegerOperand,
}

impl Unsupported {
    /// Returns the label pointing at the offending operand.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SymbolicExponent => "this factor has a symbolic exponent",
            Self::NonIntegerExponent => "this factor has a non-integer exponent",
            Self::IrrationalArithmetic => "this value is irrational",
            Self::NonIntegerOperand => "this value is not an integer",
        }
    }

    /// Returns help text describing what is supported instead.
    pub fn help(&self) -> &'static str {
        match self {
            Self::SymbolicExponent | Self::NonIntegerExponent => {
                "only factors with whole number exponents, such as `a^3`, are supported here"
            },
            Self::IrrationalArithmetic => "irrational values can only be constructed and displayed",
            Self::NonIntegerOperand => "only integers, such as `12`, are supported here",
        }
    }
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SymbolicExponent => write!(f, "symbolic exponents are not supported"),
            Self::NonIntegerExponent => write!(f, "non-integer exponents are not supported"),
            Self::IrrationalArithmetic => write!(f, "arithmetic on irrational values is not supported"),
            Self::NonIntegerOperand => write!(f, "non-integer operands are not supported"),
        }
    }
}

/// The operation cannot be applied to an operand of this shape.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot {}: {}", self.operation, self.reason),
    labels = [self.reason.label()],
    help = self.reason.help(),
)]
pub struct UnsupportedOperation {
    /// The operation that was attempted, such as `divide`.
    pub operation: &'static str,

    /// Why the operation is unsupported.
    pub reason: Unsupported,
}

/// Two monomials with different factors were added or subtracted.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot {} terms with different factors", self.operation),
    labels = ["this term", "", "this term"],
    help = "only like terms, such as `3a` and `2a`, can be combined",
)]
pub struct MismatchedTerms {
    /// The operation that was attempted, `add` or `subtract`.
    pub operation: &'static str,
}

/// A value was divided by zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot divide by zero",
    labels = ["this value is zero"],
)]
pub struct DivisionByZero;

/// An irrational value was constructed with a negative radical.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the radical of an irrational value cannot be negative",
    labels = ["this radical is negative"],
)]
pub struct NegativeRadical;

/// A common factor was requested for an expression with no terms.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the expression has no terms",
    labels = ["this expression"],
    help = "a common factor can only be found in an expression with at least one term",
)]
pub struct EmptyExpression;
