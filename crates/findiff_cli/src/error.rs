//! CLI error types.

use findiff_core::types::EstimatorError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `findiff` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Malformed command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Function name not present in the catalog.
    #[error("Unknown function: {0}. Run `findiff functions` for the catalog")]
    UnknownFunction(String),

    /// Point dimension does not match the function's arity.
    #[error("Function '{function}' takes {expected} coordinate(s), got {actual}")]
    DimensionMismatch {
        /// Catalog function name
        function: &'static str,
        /// Required dimension
        expected: usize,
        /// Supplied dimension
        actual: usize,
    },

    /// Predicted evaluation count is above the configured budget.
    #[error("Estimate needs {predicted} function evaluations, budget is {limit} (raise max_evaluations)")]
    EvaluationBudgetExceeded {
        /// Predicted evaluations, or "overflow"
        predicted: String,
        /// Configured limit
        limit: u64,
    },

    /// Configuration loading failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Estimator configuration rejected.
    #[error(transparent)]
    Estimator(#[from] EstimatorError),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
