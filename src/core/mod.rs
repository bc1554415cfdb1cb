//! Core summation logic
//!
//! Everything here is pure: no I/O, no logging, no shared state. The CLI layer
//! in [`crate::sum_command`] wraps these functions with logging and output.

pub mod digits;
pub mod number;
pub mod validation;

#[cfg(test)]
mod sum_proptest;


pub use number::NumericString;

use crate::error::{Operand, Result};

/// Adds two numeric strings and returns the canonical decimal sum.
///
/// Both arguments must be one or more ASCII digits. Leading zeros are
/// accepted and dropped from the result. Operands of any length are added
/// exactly.
///
/// ```
/// use numeric_sum::sum;
///
/// assert_eq!(sum("12", "2").unwrap(), "14");
/// assert_eq!(sum("007", "003").unwrap(), "10");
/// assert!(sum("-5", "10").is_err());
/// ```
pub fn sum(a: &str, b: &str) -> Result<String> {
    let left = NumericString::parse_operand(a, Operand::Left)?;
    let right = NumericString::parse_operand(b, Operand::Right)?;
    Ok((left + right).into_string())
}
