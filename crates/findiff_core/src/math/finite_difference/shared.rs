//! Memoised-base variant of the recursive estimator.

use super::ScalarFunction;
use num_traits::Float;

/// Same recursion as [`derivative_n`](super::derivative_n), but the
/// unperturbed sub-estimate is computed once per level and reused for every
/// coordinate.
///
/// For a deterministic `f` the result is bit-identical to the reference,
/// since the reused value is exactly what each recomputation would produce
/// and terms are accumulated in the same order. The number of evaluations
/// drops from `(2·dim)^order` to `(dim+1)^order`.
///
/// An empty `point` still returns `0` for `order ≥ 1` without evaluating `f`.
///
/// # Example
///
/// ```
/// use findiff_core::math::finite_difference::{
///     derivative_n, derivative_n_shared_base, CountingFunction,
/// };
///
/// let f = CountingFunction::new(|x: &[f64]| x[0] * x[1] * x[2]);
/// let point = [1.0, 2.0, 3.0];
///
/// let shared = derivative_n_shared_base(2, &f, 1e-3, &point);
/// assert_eq!(f.calls(), 16);
///
/// let naive = derivative_n(2, &|x: &[f64]| x[0] * x[1] * x[2], 1e-3, &point);
/// assert_eq!(shared, naive);
/// ```
pub fn derivative_n_shared_base<T, F>(order: u32, f: &F, step: T, point: &[T]) -> T
where
    T: Float,
    F: ScalarFunction<T> + ?Sized,
{
    if order == 0 {
        return f.evaluate(point);
    }
    if point.is_empty() {
        return T::zero();
    }

    let mut total = T::zero();
    let mut base = None;

    for i in 0..point.len() {
        let mut perturbed = point.to_vec();
        perturbed[i] = perturbed[i] + step;

        let forward = derivative_n_shared_base(order - 1, f, step, &perturbed);
        // Evaluated after the first forward branch, matching the reference call order
        let unperturbed =
            *base.get_or_insert_with(|| derivative_n_shared_base(order - 1, f, step, point));

        total = total + (forward - unperturbed) / step;
    }

    total
}
