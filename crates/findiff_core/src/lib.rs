//! # findiff_core: Recursive Finite-Difference Derivative Estimation
//!
//! ## Role
//!
//! findiff_core is the numeric kernel of the workspace, providing:
//! - The n-th order forward-difference estimator (`math::finite_difference`)
//! - Estimator configuration and evaluation strategies (`EstimatorConfig`, `Strategy`)
//! - Call-counting instrumentation for functions under test (`CountingFunction`)
//! - Error types: `EstimatorError` (`types::error`)
//!
//! ## What Is Computed
//!
//! For order `n`, the estimator recursively applies the forward difference
//! `(g(x + h·eᵢ) - g(x)) / h` along every coordinate `i` and sums the
//! results, so it approximates `(Σᵢ ∂ᵢ)ⁿ f`. For a single coordinate this
//! is the ordinary n-th derivative.
//!
//! The estimator is a total function: a zero step, an empty point or a step
//! below the precision floor all produce ordinary (possibly infinite or
//! inaccurate) numbers rather than errors.
//!
//! ## Usage Examples
//!
//! ```rust
//! use findiff_core::math::finite_difference::derivative_n;
//!
//! // d/dx x² at x = 2
//! let f = |x: &[f64]| x[0] * x[0];
//! let d = derivative_n(1, &f, 1e-6, &[2.0]);
//! assert!((d - 4.0).abs() < 1e-3);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default): Enable `Strategy::Parallel` via rayon
//! - `serde`: Enable serialisation for `Strategy` and `EstimatorConfig`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
