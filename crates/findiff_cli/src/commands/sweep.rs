//! Sweep command implementation
//!
//! Re-runs the estimate for step sizes 1e-from .. 1e-to, one per decade, so
//! the truncation error at large steps and the cancellation error near the
//! precision floor are both visible.

use findiff_core::math::finite_difference::DerivativeEstimator;
use tracing::{debug, info};

use super::preflight;
use crate::catalog::CatalogFunction;
use crate::config::CliConfig;
use crate::{CliError, Result};

/// One step size of a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRow {
    /// Step size
    pub step: f64,
    /// Estimate at this step
    pub estimate: f64,
    /// Absolute error, where the exact value is known
    pub abs_error: Option<f64>,
}

/// Step sizes `10^-from ..= 10^-to`.
pub fn decade_steps(from_exp: u32, to_exp: u32) -> Result<Vec<f64>> {
    if from_exp > to_exp {
        return Err(CliError::InvalidArgument(format!(
            "sweep range is empty: from 1e-{} to 1e-{}",
            from_exp, to_exp
        )));
    }
    (from_exp..=to_exp)
        .map(|k| {
            format!("1e-{}", k)
                .parse::<f64>()
                .map_err(|e| CliError::InvalidArgument(e.to_string()))
        })
        .collect()
}

/// Compute a sweep without printing.
pub fn compute(
    config: &CliConfig,
    function: CatalogFunction,
    point: &[f64],
    from_exp: u32,
    to_exp: u32,
) -> Result<Vec<SweepRow>> {
    function.check_dimension(point)?;
    let steps = decade_steps(from_exp, to_exp)?;
    let exact = function.exact(config.estimator.order, point);
    let f = |x: &[f64]| function.evaluate(x);

    steps
        .into_iter()
        .map(|step| {
            let estimator = config.estimator.with_step(step);
            preflight(config, &estimator, function, point)?;

            let estimate = DerivativeEstimator::new(estimator).estimate(&f, point);
            let abs_error = exact.map(|exact| (estimate - exact).abs());
            debug!(step, estimate, abs_error = ?abs_error, "Sweep row");

            Ok(SweepRow {
                step,
                estimate,
                abs_error,
            })
        })
        .collect()
}

/// Index of the row with the smallest finite error.
pub fn best_row(rows: &[SweepRow]) -> Option<usize> {
    rows.iter()
        .enumerate()
        .filter_map(|(i, row)| row.abs_error.filter(|e| e.is_finite()).map(|e| (i, e)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

/// Run the sweep command
pub fn run(
    config: &CliConfig,
    function: CatalogFunction,
    point: &[f64],
    from_exp: u32,
    to_exp: u32,
) -> Result<()> {
    info!(
        function = %function,
        order = config.estimator.order,
        from_exp,
        to_exp,
        "Starting step-size sweep"
    );

    let rows = compute(config, function, point, from_exp, to_exp)?;
    let best = best_row(&rows);

    println!(
        "{} = {} at {:?}, order {}",
        function,
        function.formula(),
        point,
        config.estimator.order
    );
    println!("----------------------------------------------------");
    println!("{:<10} {:<22} {:<12}", "Step", "Estimate", "Abs error");
    println!("----------------------------------------------------");
    for (i, row) in rows.iter().enumerate() {
        let error = row
            .abs_error
            .map_or_else(|| "-".to_string(), |e| format!("{:.3e}", e));
        let marker = if Some(i) == best { " <- best" } else { "" };
        println!("{:<10.0e} {:<22.12e} {:<12}{}", row.step, row.estimate, error, marker);
    }
    println!("----------------------------------------------------");

    Ok(())
}
