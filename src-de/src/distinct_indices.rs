use rand::Rng;
use rand::seq::index;

/// Draw `count` pairwise-distinct indices uniformly from `0..pool_size`.
///
/// The target individual is not excluded: a donor may coincide with it.
pub(crate) fn distinct_indices<R: Rng + ?Sized>(
    count: usize,
    pool_size: usize,
    rng: &mut R,
) -> Vec<usize> {
    debug_assert!(count <= pool_size);
    index::sample(rng, pool_size, count).into_vec()
}
