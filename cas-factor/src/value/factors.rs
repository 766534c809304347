//! Prime factorisation, and the greatest common factor / lowest common multiple built on it.

use crate::{
    error::{Error, Unsupported, UnsupportedOperation},
    primitive::{int, product},
};
use rug::Integer;
use super::ExactValue;

/// Returns the prime factors of `|n|` in non-decreasing order, preceded by the sentinel `1`.
///
/// - `84` -> `[1, 2, 2, 3, 7]`
/// - `7` -> `[1, 7]`
/// - `1`, `0` -> `[1]`
///
/// The factors are found with trial division: after 2, only odd divisors are tried, and once the
/// divisor passes the square root of what remains, the remainder itself is taken as the last
/// factor.
pub fn prime_factors(n: &Integer) -> Vec<Integer> {
    let mut factors = vec![int(1)];
    let mut value = n.clone().abs();
    let mut divisor = int(2);

    while value > 1 {
        while value.is_divisible(&divisor) {
            value /= &divisor;
            factors.push(divisor.clone());
        }

        if divisor == 2 {
            divisor += 1;
        } else {
            divisor += 2;
        }

        if Integer::from(divisor.square_ref()) > value {
            divisor.clone_from(&value);
        }
    }

    factors
}

/// Returns the integer held by the value, or an [`UnsupportedOperation`] error naming the given
/// operation.
fn integer_operand<'a>(value: &'a ExactValue, operation: &'static str) -> Result<&'a Integer, Error> {
    value.as_integer().ok_or_else(|| {
        let reason = match value {
            ExactValue::Irrational(_) => Unsupported::IrrationalArithmetic,
            ExactValue::Rational(_) => Unsupported::NonIntegerOperand,
        };
        Error::whole(value.to_string(), UnsupportedOperation { operation, reason })
    })
}

/// Finds the greatest common factor of two integers.
///
/// Every prime factor of `a` that can be matched against (and consumed from) the prime factors of
/// `b` is kept, and the kept factors are multiplied together. Since both lists start with the
/// sentinel `1`, the result is at least 1.
///
/// Only integers are supported; anything else is an [`UnsupportedOperation`].
pub fn gcf(a: &ExactValue, b: &ExactValue) -> Result<ExactValue, Error> {
    let a = integer_operand(a, "find the greatest common factor")?;
    let b = integer_operand(b, "find the greatest common factor")?;

    let mut remaining = prime_factors(b);
    let common = prime_factors(a)
        .into_iter()
        .filter(|factor| match remaining.iter().position(|other| other == factor) {
            Some(idx) => {
                remaining.swap_remove(idx);
                true
            },
            None => false,
        })
        .collect::<Vec<_>>();

    Ok(ExactValue::integer(product(&common)))
}

/// Finds the lowest common multiple of two integers.
///
/// All prime factors of `a` are taken, followed by every prime factor of `b` that could not be
/// matched against (and consumed from) a working copy of the prime factors of `a`.
///
/// Only integers are supported; anything else is an [`UnsupportedOperation`].
pub fn lcm(a: &ExactValue, b: &ExactValue) -> Result<ExactValue, Error> {
    let a = integer_operand(a, "find the lowest common multiple")?;
    let b = integer_operand(b, "find the lowest common multiple")?;

    let mut factors = prime_factors(a);
    let mut unmatched = factors.clone();
    for factor in prime_factors(b) {
        match unmatched.iter().position(|other| other == &factor) {
            Some(idx) => {
                unmatched.swap_remove(idx);
            },
            None => factors.push(factor),
        }
    }

    Ok(ExactValue::integer(product(&factors)))
}
