//! The algebraic data model: factors, monomials and expressions.
//!
//! These types nest recursively. A [`Monomial`] is a coefficient times a list of [`Factor`]s,
//! each factor's exponent is itself a [`Monomial`], and a factor's base can be a parenthesized
//! [`Expression`], which is a sum of [`Monomial`]s. Every level owns the levels below it, so the
//! structure is always a finite tree.

mod expression;
mod factor;
mod monomial;

pub use expression::Expression;
pub use factor::{Base, Factor};
pub use monomial::Monomial;
