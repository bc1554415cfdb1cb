//! Pure validation logic for summation operands
//!
//! An operand is accepted only when the whole string is one or more ASCII
//! decimal digits. Unicode digits from other numeral systems are rejected.

use crate::error::{Operand, Result, SumError};

/// Returns true when `value` is non-empty and every byte is `0`-`9`.
pub fn is_numeric_string(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Validates a single operand, tagging the failure with its position.
pub fn validate_operand(value: &str, operand: Operand) -> Result<()> {
    if is_numeric_string(value) {
        Ok(())
    } else {
        Err(SumError::invalid_argument(operand))
    }
}

/// Validates both operands, left first.
pub fn validate_operands(left: &str, right: &str) -> Result<()> {
    validate_operand(left, Operand::Left)?;
    validate_operand(right, Operand::Right)
}
