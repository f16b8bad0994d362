//! Error types for structured error handling.
//!
//! The estimator itself never fails: degenerate numerics are returned as
//! ordinary values. These errors are produced only by the opt-in
//! validation in [`EstimatorConfig::validate`](crate::math::finite_difference::EstimatorConfig::validate).

use thiserror::Error;

/// Estimator configuration errors.
///
/// # Variants
/// - `ZeroStep`: Step size is exactly zero (every difference divides by zero)
/// - `NonFiniteStep`: Step size is NaN or infinite
/// - `StrategyUnavailable`: Strategy requires a feature that is not compiled in
/// - `UnknownStrategy`: Strategy name could not be parsed
///
/// # Examples
/// ```
/// use findiff_core::types::EstimatorError;
///
/// let err = EstimatorError::NonFiniteStep { step: f64::NAN };
/// assert!(format!("{}", err).contains("NaN"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimatorError {
    /// Step size is exactly zero.
    #[error("Step size is zero: every forward difference divides by zero")]
    ZeroStep,

    /// Step size is NaN or infinite.
    #[error("Step size must be finite, got {step}")]
    NonFiniteStep {
        /// The offending step size
        step: f64,
    },

    /// Strategy needs a cargo feature that this build does not enable.
    #[error("Strategy '{strategy}' requires the '{feature}' feature")]
    StrategyUnavailable {
        /// Strategy name
        strategy: &'static str,
        /// Cargo feature that provides it
        feature: &'static str,
    },

    /// Strategy name could not be parsed.
    #[error("Unknown strategy: {0}. Must be one of: naive, shared-base, parallel")]
    UnknownStrategy(String),
}

impl EstimatorError {
    /// Whether the error describes a degenerate step size.
    ///
    /// Such configurations still evaluate (to inf/NaN/inaccurate values);
    /// callers may choose to warn and proceed.
    pub fn is_degenerate_step(&self) -> bool {
        matches!(
            self,
            EstimatorError::ZeroStep | EstimatorError::NonFiniteStep { .. }
        )
    }
}
