//! Per-individual control parameters (CR, F) and the jDE self-adaptation rule.

use ndarray::Array1;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::init_random::init_uniform_vec;

/// Valid interval for a crossover rate after adaptation.
pub const CR_BOUNDS: (f64, f64) = (0.0, 1.0);
/// Valid interval for a scale factor after adaptation.
pub const F_BOUNDS: (f64, f64) = (0.1, 0.9);

/// Crossover rate and scale factor of every individual, co-indexed with the population.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlParameters {
    pub cr: Array1<f64>,
    pub f: Array1<f64>,
}

impl ControlParameters {
    /// Same (CR, F) pair for every individual, as rand/1/bin uses.
    pub fn constant(npop: usize, cr: f64, f: f64) -> Self {
        Self { cr: Array1::from_elem(npop, cr), f: Array1::from_elem(npop, f) }
    }

    /// jDE initialisation: all CR values first, then all F values.
    pub(crate) fn sample<R: Rng + ?Sized>(
        npop: usize,
        cr_range: (f64, f64),
        f_range: (f64, f64),
        rng: &mut R,
    ) -> Self {
        let cr = init_uniform_vec(npop, cr_range, rng);
        let f = init_uniform_vec(npop, f_range, rng);
        Self { cr, f }
    }

    pub fn len(&self) -> usize {
        self.cr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cr.is_empty()
    }

    pub fn mean_cr(&self) -> f64 {
        self.cr.mean().unwrap_or(0.0)
    }

    pub fn mean_f(&self) -> f64 {
        self.f.mean().unwrap_or(0.0)
    }

    /// Log-normal jitter of individual `i`'s pair after a successful selection.
    pub(crate) fn adapt<R: Rng + ?Sized>(&mut self, i: usize, tau1: f64, tau2: f64, rng: &mut R) {
        let (cr, f) = adapt_pair(self.cr[i], self.f[i], tau1, tau2, rng);
        self.cr[i] = cr;
        self.f[i] = f;
    }
}

/// `cr * exp(tau1 * N(0,1))` and `f * exp(tau2 * N(0,1))`, clamped to
/// [`CR_BOUNDS`] and [`F_BOUNDS`]. The CR draw happens before the F draw.
pub(crate) fn adapt_pair<R: Rng + ?Sized>(
    cr: f64,
    f: f64,
    tau1: f64,
    tau2: f64,
    rng: &mut R,
) -> (f64, f64) {
    let z_cr: f64 = StandardNormal.sample(rng);
    let z_f: f64 = StandardNormal.sample(rng);
    let cr = (cr * (tau1 * z_cr).exp()).clamp(CR_BOUNDS.0, CR_BOUNDS.1);
    let f = (f * (tau2 * z_f).exp()).clamp(F_BOUNDS.0, F_BOUNDS.1);
    (cr, f)
}
