use ndarray::{Array1, Array2};
use rand::Rng;

use crate::Strategy;
use crate::distinct_indices::distinct_indices;

/// Build the donor vector for member `i` under `strategy`.
///
/// The random members are drawn once, distinct from each other and from `i`.
pub(crate) fn mutant<R: Rng + ?Sized>(
    strategy: Strategy,
    i: usize,
    pop: &Array2<f64>,
    best_idx: usize,
    f: f64,
    rng: &mut R,
) -> Array1<f64> {
    let k = match strategy {
        Strategy::Rand1Bin => 3,
        Strategy::Best1Bin | Strategy::CurrentToBest1Bin => 2,
    };
    let r = distinct_indices(i, k, pop.nrows(), rng);
    match strategy {
        Strategy::Best1Bin => &pop.row(best_idx) + &((&pop.row(r[0]) - &pop.row(r[1])) * f),
        Strategy::Rand1Bin => &pop.row(r[0]) + &((&pop.row(r[1]) - &pop.row(r[2])) * f),
        Strategy::CurrentToBest1Bin => {
            let x = pop.row(i);
            let pull = &pop.row(best_idx) - &x;
            let diff = &pop.row(r[0]) - &pop.row(r[1]);
            &x + &((pull + &diff) * f)
        }
    }
}
