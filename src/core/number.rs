use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use super::digits::{add_digits, canonicalize};
use super::validation::validate_operand;
use crate::error::{Operand, SumError};

/// A validated non-negative integer kept in canonical decimal form.
///
/// Parsing is the only way to build one, so every value holds one or more
/// ASCII digits with no leading zeros (except `"0"` itself).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumericString(String);

impl NumericString {
    /// Parses `value`, reporting a failure against `operand`.
    pub fn parse_operand(value: &str, operand: Operand) -> Result<Self, SumError> {
        validate_operand(value, operand)?;
        Ok(Self(canonicalize(value).to_string()))
    }

    pub fn zero() -> Self {
        Self("0".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    /// Number of digits in canonical form.
    pub fn digit_count(&self) -> usize {
        self.0.len()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for NumericString {
    type Err = SumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_operand(s, Operand::Left)
    }
}

impl TryFrom<&str> for NumericString {
    type Error = SumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for NumericString {
    type Error = SumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.as_str().parse()
    }
}

impl From<u64> for NumericString {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<NumericString> for String {
    fn from(value: NumericString) -> Self {
        value.0
    }
}

impl AsRef<str> for NumericString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NumericString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Ord for NumericString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for NumericString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add<&NumericString> for &NumericString {
    type Output = NumericString;

    fn add(self, rhs: &NumericString) -> NumericString {
        NumericString(add_digits(&self.0, &rhs.0))
    }
}

impl Add<&NumericString> for NumericString {
    type Output = NumericString;

    fn add(self, rhs: &NumericString) -> NumericString {
        &self + rhs
    }
}

impl Add for NumericString {
    type Output = NumericString;

    fn add(self, rhs: NumericString) -> NumericString {
        &self + &rhs
    }
}

impl Sum for NumericString {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, n| acc + &n)
    }
}

impl<'a> Sum<&'a NumericString> for NumericString {
    fn sum<I: Iterator<Item = &'a NumericString>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, n| acc + n)
    }
}
