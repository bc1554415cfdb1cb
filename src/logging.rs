use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::SumError;

/// Initialize structured logging based on verbosity level
///
/// Log output goes to stderr; stdout is reserved for the computed sum.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("numeric_sum=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("numeric_sum=info,warn"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::info!("Verbose logging enabled");
    }

    Ok(())
}

/// Log the operands of a sum about to be computed
pub fn log_sum_started(left: &str, right: &str) {
    tracing::debug!(
        left = left,
        right = right,
        left_len = left.len(),
        right_len = right.len(),
        "Sum requested"
    );
}

/// Log a successful sum
pub fn log_sum_completed(result: &str) {
    tracing::debug!(result = result, digits = result.len(), "Sum completed");
}

/// Log a rejected operand
pub fn log_validation_failure(error: &SumError) {
    tracing::debug!(operand = %error.operand(), error = %error, "Operand validation failed");
}
