use ndarray::{Array1, Array2};
use rand::Rng;

/// Uniform population in `[low, high]^n`, drawn row by row.
pub(crate) fn init_random<R: Rng + ?Sized>(
    n: usize,
    npop: usize,
    low: f64,
    high: f64,
    rng: &mut R,
) -> Array2<f64> {
    let mut pop = Array2::<f64>::zeros((npop, n));
    for i in 0..npop {
        for j in 0..n {
            pop[(i, j)] = uniform(low, high, rng);
        }
    }
    pop
}

/// `npop` independent draws from `[low, high]`.
pub(crate) fn init_uniform_vec<R: Rng + ?Sized>(
    npop: usize,
    (low, high): (f64, f64),
    rng: &mut R,
) -> Array1<f64> {
    Array1::from_shape_fn(npop, |_| uniform(low, high, rng))
}

fn uniform<R: Rng + ?Sized>(low: f64, high: f64, rng: &mut R) -> f64 {
    let u: f64 = rng.random::<f64>();
    low + u * (high - low)
}
