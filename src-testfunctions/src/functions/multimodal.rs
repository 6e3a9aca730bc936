//! Multimodal test functions
//!
//! These functions have multiple local minima and are used to test the global
//! search capabilities and exploration of optimization algorithms.

use std::f64::consts::PI;

/// Sine of the first coordinate
/// Global minimum on [-3, 3]: f(x) = -1 at x = -pi/2
/// Global maximum on [-3, 3]: f(x) = 1 at x = pi/2
pub fn sin(x: &[f64]) -> f64 {
    x[0].sin()
}

/// sin(x^2) / x, oscillating faster as x grows
/// Global minimum on [0, 3.5]: f(x) ~ -0.4633 at x ~ 2.1457
/// Extended by continuity with f(0) = 0.
pub fn sin_squared_over_x(x: &[f64]) -> f64 {
    let t = x[0];
    if t == 0.0 { 0.0 } else { (t * t).sin() / t }
}

/// Rastrigin function - N-dimensional highly multimodal function
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn rastrigin(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    let sum: f64 = x.iter().map(|&xi| xi.powi(2) - 10.0 * (2.0 * PI * xi).cos()).sum();
    10.0 * n + sum
}

/// Himmelblau function - 2D with four global minima
/// Global minimum: f(x) = 0 at (3, 2), (-2.805118, 3.131312),
/// (-3.779310, -3.283186), (3.584428, -1.848126)
/// Bounds: x_i in [-5, 5]
pub fn himmelblau(x: &[f64]) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (x1 * x1 + x2 - 11.0).powi(2) + (x1 + x2 * x2 - 7.0).powi(2)
}
