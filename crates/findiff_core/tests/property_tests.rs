//! Property-based tests for the finite-difference estimator.

use findiff_core::math::finite_difference::{
    derivative_n, derivative_n_shared_base, evaluation_count, CountingFunction,
    Strategy as EvalStrategy,
};
use proptest::prelude::*;

// Coordinates in a range where cubic terms stay well conditioned
fn coordinate_strategy() -> impl Strategy<Value = f64> {
    -10.0..10.0
}

fn point_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(coordinate_strategy(), 0..4)
}

fn step_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![1e-6..1e-2, -1e-2..-1e-6]
}

fn mixed(x: &[f64]) -> f64 {
    x.iter()
        .enumerate()
        .map(|(i, v)| (i as f64 + 1.0) * v * v * v - v.sin())
        .sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_zero_order_identity(point in point_strategy(), h in step_strategy()) {
        prop_assert_eq!(derivative_n(0, &mixed, h, &point).to_bits(), mixed(&point).to_bits());
    }

    #[test]
    fn test_shared_base_matches_reference(
        point in point_strategy(),
        h in step_strategy(),
        order in 0u32..4
    ) {
        let naive = derivative_n(order, &mixed, h, &point);
        let shared = derivative_n_shared_base(order, &mixed, h, &point);
        prop_assert_eq!(naive.to_bits(), shared.to_bits());
    }

    #[test]
    fn test_evaluation_count_prediction(point in point_strategy(), order in 0u32..4) {
        let f = CountingFunction::new(mixed);
        let _ = derivative_n(order, &f, 1e-3, &point);
        prop_assert_eq!(
            Some(f.calls() as u128),
            evaluation_count(order, point.len(), EvalStrategy::Naive)
        );
    }

    #[test]
    fn test_linear_function_first_order(
        point in prop::collection::vec(coordinate_strategy(), 1..4),
        slope in -5.0..5.0f64
    ) {
        // (Σᵢ ∂ᵢ)(slope·Σ xᵢ) = slope·dim
        let f = |x: &[f64]| slope * x.iter().sum::<f64>();
        let expected = slope * point.len() as f64;
        let estimate = derivative_n(1, &f, 1e-4, &point);
        prop_assert!((estimate - expected).abs() < 1e-6, "{} vs {}", estimate, expected);
    }

    #[test]
    fn test_empty_point_yields_zero(order in 1u32..6, h in step_strategy()) {
        prop_assert_eq!(derivative_n(order, &mixed, h, &[]), 0.0);
    }
}
