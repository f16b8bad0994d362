//! Estimator configuration types.

use crate::types::EstimatorError;
use num_traits::Float;
use std::fmt;
use std::str::FromStr;

/// How the recursive fan-out is evaluated.
///
/// All strategies return the same value for a pure function; they differ in
/// how many times the function is invoked and on which threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// Reference recursion: the unperturbed branch is recomputed for every
    /// coordinate, giving `(2·dim)ⁿ` evaluations.
    #[default]
    Naive,

    /// Opt-in memoisation: the unperturbed branch is evaluated once per
    /// level and reused across coordinates, giving `(dim+1)ⁿ` evaluations.
    SharedBase,

    /// Opt-in rayon fan-out of sibling coordinate branches. Same evaluation
    /// count as [`Strategy::Naive`]; terms are summed in coordinate order.
    Parallel,
}

impl Strategy {
    /// All strategies, in declaration order.
    pub const ALL: [Strategy; 3] = [Strategy::Naive, Strategy::SharedBase, Strategy::Parallel];

    /// Canonical kebab-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::SharedBase => "shared-base",
            Strategy::Parallel => "parallel",
        }
    }

    /// Whether this build can run the strategy.
    pub fn is_available(&self) -> bool {
        match self {
            Strategy::Naive | Strategy::SharedBase => true,
            Strategy::Parallel => cfg!(feature = "parallel"),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "naive" | "reference" => Ok(Strategy::Naive),
            "shared-base" | "shared_base" | "shared" => Ok(Strategy::SharedBase),
            "parallel" | "rayon" => Ok(Strategy::Parallel),
            _ => Err(EstimatorError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Configuration for [`DerivativeEstimator`](super::DerivativeEstimator).
///
/// # Type Parameters
///
/// * `T` - Floating-point type for the step size (e.g., `f64`)
///
/// # Example
///
/// ```
/// use findiff_core::math::finite_difference::{EstimatorConfig, Strategy};
///
/// let config: EstimatorConfig<f64> = EstimatorConfig::default();
/// assert_eq!(config.order, 1);
/// assert_eq!(config.strategy, Strategy::Naive);
///
/// let second = EstimatorConfig::new(2, 1e-3, Strategy::SharedBase);
/// assert!(second.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EstimatorConfig<T: Float> {
    /// Number of times differencing is applied. `0` evaluates the function.
    pub order: u32,

    /// Step size shared by every coordinate and recursion level.
    pub step: T,

    /// Evaluation strategy.
    pub strategy: Strategy,
}

impl<T: Float> Default for EstimatorConfig<T> {
    /// Default values:
    /// - `order`: 1
    /// - `step`: 1e-6
    /// - `strategy`: `Naive`
    fn default() -> Self {
        Self {
            order: 1,
            step: T::from(1e-6).unwrap_or_else(T::epsilon),
            strategy: Strategy::Naive,
        }
    }
}

impl<T: Float> EstimatorConfig<T> {
    /// Create a configuration.
    ///
    /// No validation is performed; a zero or non-finite step is accepted and
    /// yields a degenerate estimate. Call [`validate`](Self::validate) to
    /// reject such configurations up front.
    pub fn new(order: u32, step: T, strategy: Strategy) -> Self {
        Self {
            order,
            step,
            strategy,
        }
    }

    /// Replace the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Replace the order.
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    /// Replace the step size.
    pub fn with_step(mut self, step: T) -> Self {
        self.step = step;
        self
    }

    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// * `EstimatorError::StrategyUnavailable` - Strategy not compiled in
    /// * `EstimatorError::NonFiniteStep` - Step is NaN or infinite
    /// * `EstimatorError::ZeroStep` - Step is zero
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if !self.strategy.is_available() {
            return Err(EstimatorError::StrategyUnavailable {
                strategy: self.strategy.name(),
                feature: "parallel",
            });
        }
        if !self.step.is_finite() {
            return Err(EstimatorError::NonFiniteStep {
                step: self.step.to_f64().unwrap_or(f64::NAN),
            });
        }
        if self.step == T::zero() {
            return Err(EstimatorError::ZeroStep);
        }
        Ok(())
    }

    /// Predicted number of function evaluations at a point of dimension `dim`.
    ///
    /// Returns `None` when the count does not fit in a `u128`.
    pub fn evaluation_count(&self, dim: usize) -> Option<u128> {
        super::evaluation_count(self.order, dim, self.strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config: EstimatorConfig<f64> = EstimatorConfig::default();
        assert_eq!(config.order, 1);
        assert!((config.step - 1e-6).abs() < 1e-20);
        assert_eq!(config.strategy, Strategy::Naive);
    }

    #[test]
    fn test_new_accepts_zero_step() {
        let config: EstimatorConfig<f64> = EstimatorConfig::new(1, 0.0, Strategy::Naive);
        assert_eq!(config.step, 0.0);
    }

    #[test]
    fn test_validate_zero_step() {
        let config: EstimatorConfig<f64> = EstimatorConfig::new(1, 0.0, Strategy::Naive);
        assert_eq!(config.validate(), Err(EstimatorError::ZeroStep));
    }

    #[test]
    fn test_validate_non_finite_step() {
        let config: EstimatorConfig<f64> = EstimatorConfig::new(1, f64::INFINITY, Strategy::Naive);
        assert!(matches!(
            config.validate(),
            Err(EstimatorError::NonFiniteStep { .. })
        ));

        let config: EstimatorConfig<f64> = EstimatorConfig::new(1, f64::NAN, Strategy::Naive);
        assert!(matches!(
            config.validate(),
            Err(EstimatorError::NonFiniteStep { .. })
        ));
    }

    #[test]
    fn test_validate_negative_step_is_ok() {
        // Backward steps are legitimate forward differences with h < 0
        let config: EstimatorConfig<f64> = EstimatorConfig::new(1, -1e-6, Strategy::Naive);
        assert!(config.validate().is_ok());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_validate_parallel_available() {
        let config: EstimatorConfig<f64> = EstimatorConfig::default().with_strategy(Strategy::Parallel);
        assert!(config.validate().is_ok());
    }

    #[cfg(not(feature = "parallel"))]
    #[test]
    fn test_validate_parallel_unavailable() {
        let config: EstimatorConfig<f64> = EstimatorConfig::default().with_strategy(Strategy::Parallel);
        assert!(matches!(
            config.validate(),
            Err(EstimatorError::StrategyUnavailable { .. })
        ));
    }

    #[test]
    fn test_builder_methods() {
        let config: EstimatorConfig<f64> = EstimatorConfig::default()
            .with_order(3)
            .with_step(1e-2)
            .with_strategy(Strategy::SharedBase);
        assert_eq!(config.order, 3);
        assert_eq!(config.step, 1e-2);
        assert_eq!(config.strategy, Strategy::SharedBase);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("naive".parse::<Strategy>().unwrap(), Strategy::Naive);
        assert_eq!("Shared-Base".parse::<Strategy>().unwrap(), Strategy::SharedBase);
        assert_eq!("shared_base".parse::<Strategy>().unwrap(), Strategy::SharedBase);
        assert_eq!("parallel".parse::<Strategy>().unwrap(), Strategy::Parallel);
        assert_eq!(
            "central".parse::<Strategy>(),
            Err(EstimatorError::UnknownStrategy("central".to_string()))
        );
    }

    #[test]
    fn test_strategy_display_round_trips() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn test_evaluation_count_delegates() {
        let config: EstimatorConfig<f64> = EstimatorConfig::new(2, 1e-3, Strategy::Naive);
        assert_eq!(config.evaluation_count(3), Some(36));
    }

    #[test]
    fn test_config_with_f32() {
        let config: EstimatorConfig<f32> = EstimatorConfig::default();
        assert!(config.step > 0.0);
        assert!(config.validate().is_ok());
    }
}
