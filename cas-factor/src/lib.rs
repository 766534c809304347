#![doc = include_str!("../README.md")]

pub mod algebra;
pub mod consts;
pub mod error;
pub mod polynomial;
pub mod primitive;
pub mod step_collector;
pub mod value;

pub use algebra::{Base, Expression, Factor, Monomial};
pub use error::Error;
pub use polynomial::{factorise, factorise_with_steps, Factorisation, Step};
pub use value::{ExactValue, IrrationalValue, RationalValue, Sign};
