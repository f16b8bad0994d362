//! Named test functions with known derivatives.
//!
//! `exact` returns the quantity the estimator approximates, `(Σᵢ ∂ᵢ)ⁿ f`,
//! so the CLI can print the absolute error of an estimate.

use std::fmt;
use std::str::FromStr;

use crate::CliError;

/// Functions available to `findiff estimate` and `findiff sweep`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFunction {
    /// x²
    Square,
    /// x³
    Cube,
    /// sin(x)
    Sine,
    /// eˣ
    Exp,
    /// Σ xᵢ²
    SumOfSquares,
    /// Π xᵢ
    Product,
    /// (1 - x)² + 100 (y - x²)²
    Rosenbrock,
}

impl CatalogFunction {
    /// Every catalog entry.
    pub const ALL: [CatalogFunction; 7] = [
        CatalogFunction::Square,
        CatalogFunction::Cube,
        CatalogFunction::Sine,
        CatalogFunction::Exp,
        CatalogFunction::SumOfSquares,
        CatalogFunction::Product,
        CatalogFunction::Rosenbrock,
    ];

    /// Command-line name.
    pub fn name(&self) -> &'static str {
        match self {
            CatalogFunction::Square => "square",
            CatalogFunction::Cube => "cube",
            CatalogFunction::Sine => "sine",
            CatalogFunction::Exp => "exp",
            CatalogFunction::SumOfSquares => "sum-of-squares",
            CatalogFunction::Product => "product",
            CatalogFunction::Rosenbrock => "rosenbrock",
        }
    }

    /// Formula shown by `findiff functions`.
    pub fn formula(&self) -> &'static str {
        match self {
            CatalogFunction::Square => "x^2",
            CatalogFunction::Cube => "x^3",
            CatalogFunction::Sine => "sin(x)",
            CatalogFunction::Exp => "exp(x)",
            CatalogFunction::SumOfSquares => "sum_i x_i^2",
            CatalogFunction::Product => "prod_i x_i",
            CatalogFunction::Rosenbrock => "(1 - x)^2 + 100 (y - x^2)^2",
        }
    }

    /// Required dimension, or `None` for any dimension.
    pub fn arity(&self) -> Option<usize> {
        match self {
            CatalogFunction::Square
            | CatalogFunction::Cube
            | CatalogFunction::Sine
            | CatalogFunction::Exp => Some(1),
            CatalogFunction::Rosenbrock => Some(2),
            CatalogFunction::SumOfSquares | CatalogFunction::Product => None,
        }
    }

    /// Reject points whose dimension does not match [`arity`](Self::arity).
    pub fn check_dimension(&self, point: &[f64]) -> Result<(), CliError> {
        match self.arity() {
            Some(expected) if expected != point.len() => Err(CliError::DimensionMismatch {
                function: self.name(),
                expected,
                actual: point.len(),
            }),
            _ => Ok(()),
        }
    }

    /// Evaluate at `x`. The dimension must already have been checked.
    pub fn evaluate(&self, x: &[f64]) -> f64 {
        match self {
            CatalogFunction::Square => x[0] * x[0],
            CatalogFunction::Cube => x[0] * x[0] * x[0],
            CatalogFunction::Sine => x[0].sin(),
            CatalogFunction::Exp => x[0].exp(),
            CatalogFunction::SumOfSquares => x.iter().map(|v| v * v).sum(),
            CatalogFunction::Product => x.iter().product(),
            CatalogFunction::Rosenbrock => {
                (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0] * x[0]).powi(2)
            }
        }
    }

    /// Exact `(Σᵢ ∂ᵢ)^order f` at `x`.
    pub fn exact(&self, order: u32, x: &[f64]) -> Option<f64> {
        if order > 0 && x.is_empty() {
            return Some(0.0);
        }
        let value = match self {
            CatalogFunction::Square => match order {
                0 => x[0] * x[0],
                1 => 2.0 * x[0],
                2 => 2.0,
                _ => 0.0,
            },
            CatalogFunction::Cube => match order {
                0 => x[0] * x[0] * x[0],
                1 => 3.0 * x[0] * x[0],
                2 => 6.0 * x[0],
                3 => 6.0,
                _ => 0.0,
            },
            CatalogFunction::Sine => match order % 4 {
                0 => x[0].sin(),
                1 => x[0].cos(),
                2 => -x[0].sin(),
                _ => -x[0].cos(),
            },
            CatalogFunction::Exp => x[0].exp(),
            CatalogFunction::SumOfSquares => match order {
                0 => x.iter().map(|v| v * v).sum(),
                1 => 2.0 * x.iter().sum::<f64>(),
                2 => 2.0 * x.len() as f64,
                _ => 0.0,
            },
            CatalogFunction::Product => {
                // Multilinear: each ordering of n distinct axes contributes once
                let n = order as usize;
                if n > x.len() {
                    0.0
                } else {
                    factorial(n) * elementary_symmetric(x, x.len() - n)
                }
            }
            CatalogFunction::Rosenbrock => {
                let (a, b) = (x[0], x[1]);
                match order {
                    0 => self.evaluate(x),
                    1 => -2.0 * (1.0 - a) - 400.0 * a * (b - a * a) + 200.0 * (b - a * a),
                    // f_xx + 2 f_xy + f_yy
                    2 => (2.0 - 400.0 * b + 1200.0 * a * a) - 800.0 * a + 200.0,
                    // f_xxx + 3 f_xxy
                    3 => 2400.0 * a - 1200.0,
                    4 => 2400.0,
                    _ => 0.0,
                }
            }
        };
        Some(value)
    }
}

impl fmt::Display for CatalogFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CatalogFunction {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase().replace('_', "-");
        CatalogFunction::ALL
            .into_iter()
            .find(|function| function.name() == normalised)
            .ok_or_else(|| CliError::UnknownFunction(s.to_string()))
    }
}

fn factorial(n: usize) -> f64 {
    (1..=n).map(|k| k as f64).product()
}

/// k-th elementary symmetric polynomial of `x`.
fn elementary_symmetric(x: &[f64], k: usize) -> f64 {
    let mut e = vec![0.0; k + 1];
    e[0] = 1.0;
    for &v in x {
        for j in (1..=k).rev() {
            e[j] += e[j - 1] * v;
        }
    }
    e[k]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use findiff_core::math::finite_difference::derivative_n;

    #[test]
    fn test_from_str() {
        assert_eq!("square".parse::<CatalogFunction>().unwrap(), CatalogFunction::Square);
        assert_eq!(
            "Sum_Of_Squares".parse::<CatalogFunction>().unwrap(),
            CatalogFunction::SumOfSquares
        );
        assert!(matches!(
            "gamma".parse::<CatalogFunction>(),
            Err(CliError::UnknownFunction(_))
        ));
    }

    #[test]
    fn test_names_round_trip() {
        for function in CatalogFunction::ALL {
            assert_eq!(function.name().parse::<CatalogFunction>().unwrap(), function);
        }
    }

    #[test]
    fn test_check_dimension() {
        assert!(CatalogFunction::Square.check_dimension(&[1.0]).is_ok());
        assert!(matches!(
            CatalogFunction::Square.check_dimension(&[1.0, 2.0]),
            Err(CliError::DimensionMismatch {
                expected: 1,
                actual: 2,
                ..
            })
        ));
        assert!(CatalogFunction::Product.check_dimension(&[]).is_ok());
    }

    #[test]
    fn test_order_zero_exact_is_value() {
        let points: [&[f64]; 3] = [&[0.7], &[0.7, -1.3], &[0.7, -1.3, 2.0]];
        for function in CatalogFunction::ALL {
            for point in points {
                if function.check_dimension(point).is_ok() {
                    assert_abs_diff_eq!(
                        function.exact(0, point).unwrap(),
                        function.evaluate(point),
                        epsilon = 1e-12
                    );
                }
            }
        }
    }

    #[test]
    fn test_elementary_symmetric() {
        let x = [1.0, 2.0, 3.0];
        assert_eq!(elementary_symmetric(&x, 0), 1.0);
        assert_eq!(elementary_symmetric(&x, 1), 6.0);
        assert_eq!(elementary_symmetric(&x, 2), 11.0);
        assert_eq!(elementary_symmetric(&x, 3), 6.0);
    }

    #[test]
    fn test_product_exact() {
        // (∂x + ∂y + ∂z) xyz = yz + xz + xy = 6 + 3 + 2 at (1, 2, 3)
        assert_eq!(CatalogFunction::Product.exact(1, &[1.0, 2.0, 3.0]), Some(11.0));
        // 2! (x + y + z)
        assert_eq!(CatalogFunction::Product.exact(2, &[1.0, 2.0, 3.0]), Some(12.0));
        assert_eq!(CatalogFunction::Product.exact(3, &[1.0, 2.0, 3.0]), Some(6.0));
        assert_eq!(CatalogFunction::Product.exact(4, &[1.0, 2.0, 3.0]), Some(0.0));
    }

    #[test]
    fn test_exact_matches_estimates() {
        let cases: [(CatalogFunction, &[f64]); 7] = [
            (CatalogFunction::Square, &[1.5]),
            (CatalogFunction::Cube, &[-0.5]),
            (CatalogFunction::Sine, &[0.9]),
            (CatalogFunction::Exp, &[0.2]),
            (CatalogFunction::SumOfSquares, &[0.4, -1.1, 2.0]),
            (CatalogFunction::Product, &[1.0, 2.0, 3.0]),
            (CatalogFunction::Rosenbrock, &[0.3, 0.8]),
        ];

        for (function, point) in cases {
            let f = |x: &[f64]| function.evaluate(x);
            for (order, step, tolerance) in [(1, 1e-6, 1e-3), (2, 1e-4, 1e-1)] {
                let exact = function.exact(order, point).unwrap();
                let estimate = derivative_n(order, &f, step, point);
                assert!(
                    (estimate - exact).abs() < tolerance * exact.abs().max(1.0),
                    "{} order {}: {} vs {}",
                    function,
                    order,
                    estimate,
                    exact
                );
            }
        }
    }

    #[test]
    fn test_empty_point_exact() {
        assert_eq!(CatalogFunction::Product.exact(0, &[]), Some(1.0));
        assert_eq!(CatalogFunction::Product.exact(2, &[]), Some(0.0));
        assert_eq!(CatalogFunction::SumOfSquares.exact(1, &[]), Some(0.0));
    }
}
