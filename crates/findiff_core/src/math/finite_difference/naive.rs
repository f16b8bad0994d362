//! Reference recursive forward-difference estimator.

use super::ScalarFunction;
use num_traits::Float;

/// Estimate the `order`-th derivative of `f` at `point` with step `step`.
///
/// For `order == 0` this returns `f(point)`. Otherwise, for every coordinate
/// `i` it perturbs a fresh copy of `point` by `step` along `i`, recurses at
/// `order - 1` on both the perturbed copy and the original point, and
/// accumulates `(perturbed - unperturbed) / step`.
///
/// The unperturbed sub-estimate is recomputed for every coordinate, so the
/// function is evaluated `(2·dim)^order` times. See
/// [`derivative_n_shared_base`](super::derivative_n_shared_base) for the
/// opt-in variant that reuses it.
///
/// # Arguments
///
/// * `order` - Number of differencing passes
/// * `f` - Function under test
/// * `step` - Step size `h`, shared by all coordinates and levels
/// * `point` - Evaluation point; never mutated
///
/// # Degenerate Inputs
///
/// * `step == 0` divides by zero and yields NaN or ±∞
/// * An empty `point` yields `0` for `order ≥ 1` and `f([])` for `order == 0`
/// * A step below the precision of `point` yields an inaccurate result
///   (often exactly `0`) through cancellation
/// * There is no recursion guard; stack depth is `order`
///
/// # Example
///
/// ```
/// use findiff_core::math::finite_difference::derivative_n;
///
/// // Second derivative of x³ at 1 is 6
/// let f = |x: &[f64]| x[0] * x[0] * x[0];
/// let d2 = derivative_n(2, &f, 1e-3, &[1.0]);
/// assert!((d2 - 6.0).abs() < 1e-1);
/// ```
pub fn derivative_n<T, F>(order: u32, f: &F, step: T, point: &[T]) -> T
where
    T: Float,
    F: ScalarFunction<T> + ?Sized,
{
    if order == 0 {
        return f.evaluate(point);
    }

    let mut total = T::zero();

    for i in 0..point.len() {
        let mut perturbed = point.to_vec();
        perturbed[i] = perturbed[i] + step;

        let forward = derivative_n(order - 1, f, step, &perturbed);
        let base = derivative_n(order - 1, f, step, point);

        total = total + (forward - base) / step;
    }

    total
}
