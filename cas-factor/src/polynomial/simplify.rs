//! Merging repeated factors within a term.

use crate::{algebra::{Expression, Factor, Monomial}, error::Error};
use log::trace;

/// Merges factors with equal bases, so that each base appears at most once.
///
/// Each factor absorbs every later factor with an equal [base](Factor::base_eq), summing the
/// exponents as monomials. The merged factor stays at the position where its base first
/// appeared.
///
/// - `[a, a]` -> `[a^2]`
/// - `[a^2, b, a]` -> `[a^3, b]`
/// - `[a^x, a^2]` -> `[a^(x+2)]`
///
/// Exponents that are not like terms, such as `x` and `2` above, are kept as a parenthesized sum.
/// If an exponent cannot be summed, the factors are left untouched and the error is returned.
///
/// Every algorithm in this module assumes the factors of each term have been merged first.
pub fn simplify_factors(factors: &mut Vec<Factor>) -> Result<(), Error> {
    let mut merged = factors.clone();

    let mut current_idx = 0;
    while current_idx < merged.len() {
        // look at every factor after `current`
        let mut next_idx = current_idx + 1;
        while next_idx < merged.len() {
            if merged[current_idx].base_eq(&merged[next_idx]) {
                let next = merged.remove(next_idx);
                trace!("merging `{}` into `{}`", next, merged[current_idx]);

                let current = &mut merged[current_idx];
                current.exponent = current.exponent.sum_with(&next.exponent)?;
            } else {
                next_idx += 1;
            }
        }

        current_idx += 1;
    }

    *factors = merged;
    Ok(())
}

/// Returns a copy of the expression with the factors of every term merged with
/// [`simplify_factors`].
pub fn simplify_terms(expr: &Expression) -> Result<Expression, Error> {
    expr.terms
        .iter()
        .map(|term| -> Result<Monomial, Error> {
            let mut term = term.clone();
            simplify_factors(&mut term.factors)?;
            Ok(term)
        })
        .collect()
}
