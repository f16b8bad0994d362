//! Recursive forward-difference derivative estimation.
//!
//! This module estimates the n-th order derivative of a scalar function of
//! one or more real arguments by recursively applying the forward-difference
//! formula along every coordinate.
//!
//! ## Algorithm
//!
//! ```text
//! D⁰f(x) = f(x)
//! Dᵏf(x) = Σᵢ (Dᵏ⁻¹f(x + h·eᵢ) - Dᵏ⁻¹f(x)) / h
//! ```
//!
//! `Dⁿf` approximates `(Σᵢ ∂ᵢ)ⁿ f`. This is not a mixed partial in the strict
//! sense: every recursion level differentiates along every axis again. With
//! a single coordinate it reduces to the ordinary n-th derivative.
//!
//! ## Strategies
//!
//! - [`Strategy::Naive`]: Reference recursion. Recomputes the unperturbed
//!   branch for every coordinate; `(2·dim)ⁿ` evaluations.
//! - [`Strategy::SharedBase`]: Evaluates the unperturbed branch once per
//!   level; `(dim+1)ⁿ` evaluations. Identical results for pure functions.
//! - [`Strategy::Parallel`]: Reference recursion with coordinate branches
//!   fanned out over rayon (`parallel` feature). Identical results.
//!
//! ## Numerical Caveats
//!
//! There is no adaptive step selection. Large steps incur truncation error,
//! steps near the precision floor lose everything to cancellation, and a
//! zero step divides by zero. All of these are returned as ordinary values.
//!
//! ## Examples
//!
//! ```
//! use findiff_core::math::finite_difference::{
//!     CountingFunction, DerivativeEstimator, EstimatorConfig, Strategy,
//! };
//!
//! let f = CountingFunction::new(|x: &[f64]| x[0] * x[0] + x[1] * x[1]);
//!
//! let config = EstimatorConfig::new(1, 1e-6, Strategy::Naive);
//! let estimator = DerivativeEstimator::new(config);
//!
//! // (∂x + ∂y)(x² + y²) = 2x + 2y = 6 at (1, 2)
//! let d = estimator.estimate(&f, &[1.0, 2.0]);
//! assert!((d - 6.0).abs() < 1e-3);
//! assert_eq!(f.calls(), 4);
//! ```

mod config;
mod cost;
mod counting;
mod estimator;
mod function;
mod naive;
#[cfg(feature = "parallel")]
mod parallel;
mod shared;

// Re-export public types at module level
pub use config::{EstimatorConfig, Strategy};
pub use cost::evaluation_count;
pub use counting::CountingFunction;
pub use estimator::DerivativeEstimator;
pub use function::ScalarFunction;
pub use naive::derivative_n;
#[cfg(feature = "parallel")]
pub use parallel::derivative_n_parallel;
pub use shared::derivative_n_shared_base;
