//! Factoring polynomials.
//!
//! An [`Expression`] is factored in three passes:
//!
//! 1. The factors of every term are merged with [`simplify_factors`], so that each base appears
//!    at most once per term. Every later pass depends on this.
//! 2. The common factor of all terms is found with [`has_common_factor`]. Its coefficient is the
//!    greatest common factor of the coefficients, and its factors are those shared by every
//!    term, each to its smallest exponent.
//! 3. If there is a common factor, it is pulled out of each term with [`factor_out`].
//!
//! [`factorise`] runs all three passes and returns a [`Factorisation`]:
//!
//! ```
//! use cas_factor::algebra::{Expression, Factor, Monomial};
//! use cas_factor::polynomial::factorise;
//! use cas_factor::value::ExactValue;
//!
//! // 8x^2yz + 12xy^3
//! let expr = Expression::new(vec![
//!     Monomial::new(ExactValue::integer(8), vec![
//!         Factor::symbol('x').pow(2),
//!         Factor::symbol('y'),
//!         Factor::symbol('z'),
//!     ]),
//!     Monomial::new(ExactValue::integer(12), vec![
//!         Factor::symbol('x'),
//!         Factor::symbol('y').pow(3),
//!     ]),
//! ]);
//!
//! let factored = factorise(&expr).unwrap();
//! assert!(factored.is_factored());
//! assert_eq!(factored.to_string(), "4xy(2xz+3y^2)");
//! ```
//!
//! Use [`factorise_with_steps`] to also record the [`Step`]s taken along the way.
//!
//! None of these functions modify their input; each works on its own copy of the terms it
//! needs.

mod common;
mod simplify;
mod step;

pub use common::{common_factor, common_factors, factor_out, has_common_factor};
pub use simplify::{simplify_factors, simplify_terms};
pub use step::Step;

use crate::{
    algebra::{Expression, Monomial},
    error::Error,
    step_collector::StepCollector,
};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of [`factorise`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Factorisation {
    /// The expression had a common factor, and was rewritten as that factor times a
    /// parenthesized sum, such as `2(a+b)`.
    Factored(Monomial),

    /// The expression had no common factor, and is returned as given.
    Unchanged(Expression),
}

impl Factorisation {
    /// Returns true if a common factor was factored out.
    pub fn is_factored(&self) -> bool {
        matches!(self, Self::Factored(_))
    }
}

impl fmt::Display for Factorisation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Factored(factored) => write!(f, "{}", factored),
            Self::Unchanged(expr) => write!(f, "{}", expr),
        }
    }
}

/// Factors the common factor out of the expression, if there is one.
///
/// Returns [`Factorisation::Factored`] with the factored monomial when the terms share a common
/// factor other than 1, and [`Factorisation::Unchanged`] with the original expression otherwise.
pub fn factorise(expr: &Expression) -> Result<Factorisation, Error> {
    factorise_with_steps(expr, &mut ())
}

/// Factors the common factor out of the expression, if there is one, collecting the steps taken
/// into the given [`StepCollector`].
pub fn factorise_with_steps(
    expr: &Expression,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Factorisation, Error> {
    let simplified = simplify_terms(expr)?;
    if simplified != *expr {
        step_collector.push(Step::SimplifyFactors {
            before: expr.clone(),
            after: simplified.clone(),
        });
    }

    let Some(common) = has_common_factor(&simplified)? else {
        step_collector.push(Step::NoCommonFactor);
        return Ok(Factorisation::Unchanged(expr.clone()));
    };
    step_collector.push(Step::CommonFactor(common.clone()));

    let factored = factor_out(&simplified, &common)?;
    step_collector.push(Step::FactorOut(factored.clone()));
    Ok(Factorisation::Factored(factored))
}
