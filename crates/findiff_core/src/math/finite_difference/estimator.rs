//! Configured derivative estimator.

use super::{derivative_n, derivative_n_shared_base, EstimatorConfig, ScalarFunction, Strategy};
use crate::types::EstimatorError;
use num_traits::Float;

/// Derivative estimator bound to an [`EstimatorConfig`].
///
/// Dispatches to the free function matching the configured [`Strategy`].
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use findiff_core::math::finite_difference::{DerivativeEstimator, EstimatorConfig, Strategy};
///
/// let estimator = DerivativeEstimator::new(EstimatorConfig::new(2, 1e-3, Strategy::SharedBase));
///
/// let f = |x: &[f64]| x[0] * x[0] * x[0];
/// let d2 = estimator.estimate(&f, &[1.0]);
/// assert!((d2 - 6.0).abs() < 1e-1);
/// ```
#[derive(Debug, Clone)]
pub struct DerivativeEstimator<T: Float> {
    config: EstimatorConfig<T>,
}

impl<T: Float> DerivativeEstimator<T> {
    /// Create an estimator without validating the configuration.
    ///
    /// A zero or non-finite step is accepted and produces degenerate
    /// estimates. `Strategy::Parallel` without the `parallel` feature runs
    /// the reference recursion, which yields the same value.
    pub fn new(config: EstimatorConfig<T>) -> Self {
        Self { config }
    }

    /// Create an estimator after [`EstimatorConfig::validate`].
    ///
    /// # Errors
    ///
    /// Any error returned by [`EstimatorConfig::validate`].
    pub fn try_new(config: EstimatorConfig<T>) -> Result<Self, EstimatorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create an estimator with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: EstimatorConfig::default(),
        }
    }

    /// Returns a reference to the estimator configuration.
    pub fn config(&self) -> &EstimatorConfig<T> {
        &self.config
    }

    /// Predicted number of evaluations of `f` at a point of dimension `dim`.
    pub fn evaluation_count(&self, dim: usize) -> Option<u128> {
        self.config.evaluation_count(dim)
    }
}

impl<T: Float + Send + Sync> DerivativeEstimator<T> {
    /// Estimate the configured derivative of `f` at `point`.
    ///
    /// The `Sync` bound on `f` is required so that any strategy can be
    /// selected at runtime; call [`derivative_n`] directly for functions
    /// that are not `Sync`.
    pub fn estimate<F>(&self, f: &F, point: &[T]) -> T
    where
        F: ScalarFunction<T> + Sync + ?Sized,
    {
        let EstimatorConfig {
            order,
            step,
            strategy,
        } = self.config;

        match strategy {
            Strategy::Naive => derivative_n(order, f, step, point),
            Strategy::SharedBase => derivative_n_shared_base(order, f, step, point),
            #[cfg(feature = "parallel")]
            Strategy::Parallel => super::derivative_n_parallel(order, f, step, point),
            #[cfg(not(feature = "parallel"))]
            Strategy::Parallel => derivative_n(order, f, step, point),
        }
    }
}

impl<T: Float> Default for DerivativeEstimator<T> {
    fn default() -> Self {
        Self::with_defaults()
    }
}
