use ndarray::Array1;

/// Round integer-constrained variables to the nearest whole number, staying inside the bounds.
///
/// Bounds of integer variables are whole numbers (checked when the solver
/// starts), so clamping after rounding keeps the value integral.
pub fn apply_integrality(
    x: &mut Array1<f64>,
    mask: &[bool],
    lower: &Array1<f64>,
    upper: &Array1<f64>,
) {
    for (i, &is_int) in mask.iter().enumerate().take(x.len()) {
        if is_int {
            x[i] = x[i].round().clamp(lower[i], upper[i]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_only_masked() {
        let lower = Array1::from(vec![1.0, -5.0, -1.0]);
        let upper = Array1::from(vec![3.0, 5.0, 2.0]);
        let mut x = Array1::from(vec![2.6, 0.3, 2.4]);
        apply_integrality(&mut x, &[true, false, true], &lower, &upper);
        assert_eq!(x.to_vec(), vec![3.0, 0.3, 2.0]);
    }

    #[test]
    fn test_rounding_stays_in_bounds() {
        let lower = Array1::from(vec![0.0]);
        let upper = Array1::from(vec![1.0]);
        let mut x = Array1::from(vec![1.0]);
        apply_integrality(&mut x, &[true], &lower, &upper);
        assert_eq!(x[0], 1.0);
        let mut x = Array1::from(vec![-0.49]);
        apply_integrality(&mut x, &[true], &lower, &upper);
        assert_eq!(x[0], 0.0);
    }
}
