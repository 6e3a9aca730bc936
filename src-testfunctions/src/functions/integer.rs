//! Functions for integer and mixed-integer domains

/// Plain sum of the coordinates
/// On an integer box the maximum sits at the upper corner, the minimum at
/// the lower corner.
pub fn integer_sum(x: &[f64]) -> f64 {
    x.iter().sum()
}

/// Distance to the lattice point (3, -2) for the first two coordinates,
/// with every further coordinate contributing its square.
/// Global minimum: f(x) = 0 at x = (3, -2, 0, ..., 0)
/// Bounds: x_i in [-10, 10], first two integer, at least 3 dimensions
pub fn integer_lattice(x: &[f64]) -> f64 {
    let head = (x[0] - 3.0).abs() + (x[1] + 2.0).abs();
    head + x[2..].iter().map(|&xi| xi * xi).sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_functions() {
        assert_eq!(integer_sum(&[3.0, 1.0, 2.0]), 6.0);
        assert_eq!(integer_lattice(&[3.0, -2.0, 0.0]), 0.0);
        assert_eq!(integer_lattice(&[2.0, -2.0]), 1.0);
    }
}
