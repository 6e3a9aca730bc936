//! Unimodal test functions
//!
//! A single global optimum, used to check that an optimizer actually
//! converges and that budgets and bounds are honoured.

/// Sphere function - N-dimensional quadratic bowl
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 5]
pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|&xi| xi * xi).sum()
}

/// Shifted quadratic - sphere moved to x = (2, 2, ..., 2)
/// Global minimum: f(x) = 0 at x = (2, 2, ..., 2)
/// Bounds: x_i in [-5, 5]
pub fn shifted_quadratic(x: &[f64]) -> f64 {
    x.iter().map(|&xi| (xi - 2.0).powi(2)).sum()
}

/// Rosenbrock function - N-dimensional banana valley
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-2.048, 2.048]
pub fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minima() {
        assert_eq!(sphere(&[0.0, 0.0, 0.0]), 0.0);
        assert_eq!(shifted_quadratic(&[2.0]), 0.0);
        assert_eq!(rosenbrock(&[1.0, 1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_rosenbrock_known_value() {
        // (1 - 0)^2 + 100 * (0 - 0)^2
        assert_eq!(rosenbrock(&[0.0, 0.0]), 1.0);
        assert_eq!(shifted_quadratic(&[-5.0]), 49.0);
    }
}
