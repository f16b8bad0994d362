//! Evaluation-count prediction.

use super::Strategy;

/// Number of function evaluations an estimate of `order` at a point of
/// dimension `dim` performs under `strategy`.
///
/// - `Naive` / `Parallel`: `(2·dim)ⁿ`
/// - `SharedBase`: `(dim+1)ⁿ`, except `0` when `dim == 0` and `n ≥ 1`
///
/// Order `0` always costs exactly one evaluation. Returns `None` when the
/// count overflows `u128`.
///
/// # Example
///
/// ```
/// use findiff_core::math::finite_difference::{evaluation_count, Strategy};
///
/// assert_eq!(evaluation_count(1, 2, Strategy::Naive), Some(4));
/// assert_eq!(evaluation_count(3, 2, Strategy::Naive), Some(64));
/// assert_eq!(evaluation_count(3, 2, Strategy::SharedBase), Some(27));
/// ```
pub fn evaluation_count(order: u32, dim: usize, strategy: Strategy) -> Option<u128> {
    if order == 0 {
        return Some(1);
    }
    if dim == 0 {
        return Some(0);
    }

    let dim = dim as u128;
    let fan_out = match strategy {
        Strategy::Naive | Strategy::Parallel => dim.checked_mul(2)?,
        Strategy::SharedBase => dim.checked_add(1)?,
    };
    fan_out.checked_pow(order)
}
