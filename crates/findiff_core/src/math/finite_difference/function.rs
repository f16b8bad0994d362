//! Function-under-test abstraction.

/// A scalar-valued function of an ordered sequence of reals.
///
/// The estimator treats implementors as opaque and pure: it neither detects
/// nor guards against side effects or non-determinism.
///
/// Every `Fn(&[T]) -> T` closure or function item implements this trait, so
/// callers normally pass a closure directly.
///
/// # Example
///
/// ```
/// use findiff_core::math::finite_difference::ScalarFunction;
///
/// let norm_sq = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
/// assert_eq!(norm_sq.evaluate(&[3.0, 4.0]), 25.0);
/// ```
pub trait ScalarFunction<T> {
    /// Evaluate the function at `point`.
    fn evaluate(&self, point: &[T]) -> T;
}

impl<T, F> ScalarFunction<T> for F
where
    F: Fn(&[T]) -> T + ?Sized,
{
    #[inline]
    fn evaluate(&self, point: &[T]) -> T {
        self(point)
    }
}
