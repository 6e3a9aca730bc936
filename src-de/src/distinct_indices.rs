use rand::Rng;

/// Pick `k` distinct population indices in `0..npop`, all different from `exclude`.
///
/// Requires `npop > k`.
pub(crate) fn distinct_indices<R: Rng + ?Sized>(
    exclude: usize,
    k: usize,
    npop: usize,
    rng: &mut R,
) -> Vec<usize> {
    debug_assert!(npop > k, "population too small for {} distinct indices", k);
    let mut idxs = Vec::with_capacity(k);
    while idxs.len() < k {
        let r = rng.random_range(0..npop);
        if r != exclude && !idxs.contains(&r) {
            idxs.push(r);
        }
    }
    idxs
}
