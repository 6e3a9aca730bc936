use ndarray::Array1;
use rand::Rng;

/// Binomial (uniform) crossover: each component comes from the mutant with
/// probability `cr`, and at least one component always does.
pub(crate) fn binomial_crossover<R: Rng + ?Sized>(
    target: &Array1<f64>,
    mutant: &Array1<f64>,
    cr: f64,
    rng: &mut R,
) -> Array1<f64> {
    let n = target.len();
    let forced = rng.random_range(0..n);
    let mut trial = target.clone();
    for j in 0..n {
        if j == forced || rng.random::<f64>() < cr {
            trial[j] = mutant[j];
        }
    }
    trial
}
