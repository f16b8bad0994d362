//! Call-counting wrapper for functions under test.

use super::ScalarFunction;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Wraps a function and counts how many times it is evaluated.
///
/// The counter is atomic, so the wrapper can be shared with
/// [`Strategy::Parallel`](super::Strategy::Parallel).
///
/// # Example
///
/// ```
/// use findiff_core::math::finite_difference::{derivative_n, CountingFunction};
///
/// let f = CountingFunction::new(|x: &[f64]| x[0] * x[1]);
/// let _ = derivative_n(1, &f, 1e-6, &[1.0, 2.0]);
/// assert_eq!(f.calls(), 4);
///
/// f.reset();
/// assert_eq!(f.calls(), 0);
/// ```
#[derive(Debug)]
pub struct CountingFunction<F> {
    inner: F,
    calls: AtomicUsize,
}

impl<F> CountingFunction<F> {
    /// Wrap `inner` with a zeroed counter.
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of evaluations since construction or the last [`reset`](Self::reset).
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    /// Zero the counter.
    pub fn reset(&self) {
        self.calls.store(0, Ordering::Relaxed);
    }

    /// Returns a reference to the wrapped function.
    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Unwrap, discarding the counter.
    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<T, F> ScalarFunction<T> for CountingFunction<F>
where
    F: ScalarFunction<T>,
{
    fn evaluate(&self, point: &[T]) -> T {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.evaluate(point)
    }
}
