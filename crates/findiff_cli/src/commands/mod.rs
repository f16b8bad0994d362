//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod estimate;
pub mod functions;
pub mod sweep;

use findiff_core::math::finite_difference::EstimatorConfig;
use tracing::{debug, warn};

use crate::catalog::CatalogFunction;
use crate::config::CliConfig;
use crate::{CliError, Result};

/// Checks shared by every estimating command.
///
/// A degenerate step is only warned about so that its inf/NaN or cancelled
/// result stays visible; an unavailable strategy, a dimension mismatch or an
/// evaluation count above `max_evaluations` is an error.
pub(crate) fn preflight(
    config: &CliConfig,
    estimator: &EstimatorConfig<f64>,
    function: CatalogFunction,
    point: &[f64],
) -> Result<Option<u128>> {
    function.check_dimension(point)?;

    if let Err(err) = estimator.validate() {
        if err.is_degenerate_step() {
            warn!(step = estimator.step, "{}", err);
        } else {
            return Err(err.into());
        }
    }

    let predicted = estimator.evaluation_count(point.len());
    debug!(
        function = %function,
        dim = point.len(),
        order = estimator.order,
        strategy = %estimator.strategy,
        predicted = ?predicted,
        "Predicted evaluation count"
    );

    match predicted {
        Some(count) if count <= u128::from(config.max_evaluations) => Ok(predicted),
        _ => Err(CliError::EvaluationBudgetExceeded {
            predicted: predicted.map_or_else(|| "overflow".to_string(), |c| c.to_string()),
            limit: config.max_evaluations,
        }),
    }
}
