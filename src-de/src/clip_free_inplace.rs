use ndarray::Array1;

/// Clamp free variables into `[lower, upper]` and pin fixed ones to their bound.
pub(crate) fn clip_free_inplace(
    x: &mut Array1<f64>,
    lower: &Array1<f64>,
    upper: &Array1<f64>,
    is_free: &[bool],
) {
    for i in 0..x.len() {
        if is_free[i] {
            x[i] = x[i].clamp(lower[i], upper[i]);
        } else {
            x[i] = lower[i]; // fixed var equals bound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_free_and_fixed() {
        let lower = Array1::from(vec![-1.0, 2.0, 0.0]);
        let upper = Array1::from(vec![1.0, 2.0, 10.0]);
        let mut x = Array1::from(vec![-3.0, 7.0, 4.5]);
        clip_free_inplace(&mut x, &lower, &upper, &[true, false, true]);
        assert_eq!(x.to_vec(), vec![-1.0, 2.0, 4.5]);
    }
}
