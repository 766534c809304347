//! Constants used in the library.

/// Two values are approximately equal if their decimal values differ by less than this amount.
pub const TOLERANCE: f64 = 1e-10;

/// The symbol used to render a radical.
pub const RADICAL: char = '√';

/// The symbol used to render the sign of an irrational value with two solutions.
pub const PLUS_MINUS: char = '±';
