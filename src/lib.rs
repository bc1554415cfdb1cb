//! Exact addition of non-negative integers written as decimal strings.

pub mod core;
pub mod error;
pub mod logging;
pub mod sum_command;

pub use crate::core::{sum, NumericString};
pub use error::{Operand, SumError};
pub use sum_command::SumCommand;
