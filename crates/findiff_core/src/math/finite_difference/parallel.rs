//! Rayon fan-out of the reference recursion.
//!
//! Sibling coordinate branches at each level have no data dependency on one
//! another, so they are evaluated on the rayon pool. The per-coordinate
//! terms are collected in index order and summed sequentially, so the float
//! result does not depend on scheduling.

use super::ScalarFunction;
use num_traits::Float;
use rayon::prelude::*;

/// Parallel form of [`derivative_n`](super::derivative_n).
///
/// Performs the same `(2·dim)^order` evaluations (including the redundant
/// unperturbed branches) and returns a bit-identical result for a pure `f`.
/// The order in which `f` is invoked is unspecified.
///
/// # Example
///
/// ```
/// use findiff_core::math::finite_difference::{derivative_n, derivative_n_parallel};
///
/// let f = |x: &[f64]| x[0].sin() * x[1].cos();
/// let point = [0.4, 1.1];
///
/// assert_eq!(
///     derivative_n_parallel(2, &f, 1e-3, &point),
///     derivative_n(2, &f, 1e-3, &point),
/// );
/// ```
pub fn derivative_n_parallel<T, F>(order: u32, f: &F, step: T, point: &[T]) -> T
where
    T: Float + Send + Sync,
    F: ScalarFunction<T> + Sync + ?Sized,
{
    if order == 0 {
        return f.evaluate(point);
    }

    let terms: Vec<T> = (0..point.len())
        .into_par_iter()
        .map(|i| {
            let mut perturbed = point.to_vec();
            perturbed[i] = perturbed[i] + step;

            let (forward, base) = rayon::join(
                || derivative_n_parallel(order - 1, f, step, &perturbed),
                || derivative_n_parallel(order - 1, f, step, point),
            );

            (forward - base) / step
        })
        .collect();

    terms.into_iter().fold(T::zero(), |total, term| total + term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::finite_difference::{derivative_n, evaluation_count, CountingFunction, Strategy};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_matches_reference_bitwise() {
        let f = |x: &[f64]| (x[0] * x[1]).exp() + x[2].ln();
        let point = [0.2, 0.9, 2.5];
        for order in 0..=3 {
            let naive = derivative_n(order, &f, 1e-2, &point);
            let parallel = derivative_n_parallel(order, &f, 1e-2, &point);
            assert_eq!(naive.to_bits(), parallel.to_bits(), "order {}", order);
        }
    }

    #[test]
    fn test_evaluation_count_matches_reference() {
        let f = CountingFunction::new(|x: &[f64]| x[0] + x[1]);
        let _ = derivative_n_parallel(3, &f, 1e-3, &[1.0, 2.0]);
        assert_eq!(
            Some(f.calls() as u128),
            evaluation_count(3, 2, Strategy::Parallel)
        );
    }

    #[test]
    fn test_first_derivative_of_square() {
        let f = |x: &[f64]| x[0] * x[0];
        assert_abs_diff_eq!(derivative_n_parallel(1, &f, 1e-6, &[2.0]), 4.0, epsilon = 1e-3);
    }

    #[test]
    fn test_empty_point() {
        let f = |_: &[f64]| 9.0;
        assert_eq!(derivative_n_parallel(0, &f, 1e-3, &[]), 9.0);
        assert_eq!(derivative_n_parallel(2, &f, 1e-3, &[]), 0.0);
    }
}
