#![allow(dead_code)]

use hyperopt::OptimizationResult;

/// Assert `|x - y| <= tol`.
pub fn close_to(x: f64, y: f64, tol: f64) {
    assert!((x - y).abs() <= tol, "{} should be close to {} (tol = {})", x, y, tol);
}

/// Assert the result has `n` finite coordinates and a finite value.
pub fn assert_solver_result(result: &OptimizationResult, n: usize) {
    assert_eq!(result.x.len(), n);
    assert!(result.x.iter().all(|v| v.is_finite()), "{:?}", result.x);
    assert!(result.y.is_finite());
}
