//! Estimate command implementation
//!
//! Evaluates one derivative estimate of a catalog function and reports it
//! next to the exact value and the number of function evaluations.

use findiff_core::math::finite_difference::{CountingFunction, DerivativeEstimator, EstimatorConfig};
use tracing::info;

use super::preflight;
use crate::catalog::CatalogFunction;
use crate::config::CliConfig;
use crate::Result;

/// Outcome of a single estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateReport {
    /// Function estimated
    pub function: CatalogFunction,
    /// Evaluation point
    pub point: Vec<f64>,
    /// Configuration used
    pub estimator: EstimatorConfig<f64>,
    /// Estimated `(Σᵢ ∂ᵢ)ⁿ f`
    pub estimate: f64,
    /// Exact value, where known
    pub exact: Option<f64>,
    /// Evaluations actually performed
    pub evaluations: usize,
    /// Evaluations predicted before running
    pub predicted: Option<u128>,
}

impl EstimateReport {
    /// Absolute error against the exact value.
    pub fn abs_error(&self) -> Option<f64> {
        self.exact.map(|exact| (self.estimate - exact).abs())
    }
}

/// Compute an estimate without printing.
pub fn compute(config: &CliConfig, function: CatalogFunction, point: &[f64]) -> Result<EstimateReport> {
    let estimator = config.estimator;
    let predicted = preflight(config, &estimator, function, point)?;

    let counted = CountingFunction::new(|x: &[f64]| function.evaluate(x));
    let estimate = DerivativeEstimator::new(estimator).estimate(&counted, point);

    Ok(EstimateReport {
        function,
        point: point.to_vec(),
        estimator,
        estimate,
        exact: function.exact(estimator.order, point),
        evaluations: counted.calls(),
        predicted,
    })
}

/// Run the estimate command
pub fn run(config: &CliConfig, function: CatalogFunction, point: &[f64]) -> Result<()> {
    info!(
        function = %function,
        order = config.estimator.order,
        step = config.estimator.step,
        strategy = %config.estimator.strategy,
        "Starting estimate"
    );

    let report = compute(config, function, point)?;

    println!("Function:    {} = {}", report.function, report.function.formula());
    println!("Point:       {:?}", report.point);
    println!(
        "Order:       {} (step = {:e}, strategy = {})",
        report.estimator.order, report.estimator.step, report.estimator.strategy
    );
    println!("Estimate:    {:.12e}", report.estimate);
    match (report.exact, report.abs_error()) {
        (Some(exact), Some(error)) => {
            println!("Exact:       {:.12e}", exact);
            println!("Abs error:   {:.3e}", error);
        }
        _ => println!("Exact:       unknown"),
    }
    match report.predicted {
        Some(predicted) => println!("Evaluations: {} (predicted {})", report.evaluations, predicted),
        None => println!("Evaluations: {}", report.evaluations),
    }

    info!(evaluations = report.evaluations, "Estimate complete");
    Ok(())
}
