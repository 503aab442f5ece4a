use ndarray::{Array1, ArrayView1};
use rand::Rng;

/// Binomial crossover of `target` with `mutant`.
///
/// One forced dimension `jrand` always takes the mutant gene. A uniform draw
/// is consumed for every dimension (including `jrand`) so the number of
/// draws per call is fixed at `1 + n`.
pub(crate) fn binomial_crossover<R: Rng + ?Sized>(
    target: ArrayView1<f64>,
    mutant: &Array1<f64>,
    cr: f64,
    rng: &mut R,
) -> Array1<f64> {
    binomial_crossover_with_jrand(target, mutant, cr, rng).0
}

/// Same as [`binomial_crossover`], also returning the forced dimension.
pub(crate) fn binomial_crossover_with_jrand<R: Rng + ?Sized>(
    target: ArrayView1<f64>,
    mutant: &Array1<f64>,
    cr: f64,
    rng: &mut R,
) -> (Array1<f64>, usize) {
    let n = target.len();
    let jrand = rng.random_range(0..n);
    let mut trial = target.to_owned();
    for j in 0..n {
        let u: f64 = rng.random::<f64>();
        if u <= cr || j == jrand {
            trial[j] = mutant[j];
        }
    }
    (trial, jrand)
}
