//! Command wrapper around [`crate::sum`] used by the `numsum` binary.

use colored::Colorize;
use std::any::type_name_of_val;

use crate::core::sum;
use crate::error::Result;
use crate::logging::{log_sum_completed, log_sum_started, log_validation_failure};

pub struct SumCommand {
    verbose: bool,
    show_type: bool,
}

impl SumCommand {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            show_type: false,
        }
    }

    pub fn with_show_type(mut self, show_type: bool) -> Self {
        self.show_type = show_type;
        self
    }

    /// Computes `left + right` and returns the line to print on stdout.
    pub fn execute(&self, left: &str, right: &str) -> Result<String> {
        if self.verbose {
            eprintln!("{} Adding {} + {}", "ℹ".blue(), left.cyan(), right.cyan());
        }
        log_sum_started(left, right);

        let result = sum(left, right).inspect_err(log_validation_failure)?;
        log_sum_completed(&result);

        if self.show_type {
            Ok(format!("{result} {}", type_tag(&result)))
        } else {
            Ok(result)
        }
    }
}

/// Short name of a value's type, e.g. `String` rather than `alloc::string::String`.
fn type_tag<T: ?Sized>(value: &T) -> &'static str {
    let full = type_name_of_val(value);
    full.rsplit("::").next().unwrap_or(full)
}
