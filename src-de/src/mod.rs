//! Differential Evolution (DE) global optimizers in pure Rust using ndarray
//!
//! Two variants share one evolutionary loop:
//! - rand/1/bin with a fixed scale factor F and crossover rate CR
//! - jDE, where every individual carries its own (CR, F) pair that is
//!   jittered log-normally after each successful replacement
//!
//! Features:
//! - Box bounds (one `(low, high)` pair for every dimension), used at initialization
//! - Greedy selection on strict improvement
//! - Fixed generation budget, no early termination
//! - Injectable random source for reproducible runs (`solve_with_rng`)
//! - Donor semantics: in-place ("immediate") or snapshot-before-sweep ("deferred")
//! - Optional clipping of trial vectors to the bounds (off by default)
//! - Fallible objectives: the first objective error aborts the run

#![allow(missing_docs)]
use std::fmt;
use std::str::FromStr;

use log::{debug, info, trace};
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub mod clip_inplace;
pub mod control_parameters;
pub mod crossover_binomial;
pub mod differential_evolution;
pub mod distinct_indices;
pub mod error;
pub mod function_registry;
pub mod impl_helpers;
pub mod init_random;
pub mod mutant_rand1;
pub mod recorder;
pub mod run_recorded;


pub use control_parameters::{CR_BOUNDS, ControlParameters, F_BOUNDS};
pub use differential_evolution::{
	differential_evolution, run_jde, run_rand1bin, try_differential_evolution,
};
pub use error::{DEError, ObjectiveError, Result};
pub use recorder::{OptimizationRecord, OptimizationRecorder};
pub use run_recorded::run_recorded_differential_evolution;

/// Index and value of the smallest entry; the first one wins ties.
pub(crate) fn argmin(v: &Array1<f64>) -> (usize, f64) {
	let mut best_i = 0usize;
	let mut best_v = v[0];
	for (i, &val) in v.iter().enumerate() {
		if val < best_v {
			best_v = val;
			best_i = i;
		}
	}
	(best_i, best_v)
}

/// Differential Evolution variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
	/// Classic DE/rand/1/bin with constant F and CR
	Rand1Bin,
	/// Self-adaptive jDE: rand/1/bin with per-individual, self-adapting F and CR
	Jde,
}

impl FromStr for Strategy {
	type Err = String;
	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		let t = s.to_lowercase();
		match t.as_str() {
			"rand1bin" | "rand1" | "rand/1/bin" | "rand-1-bin" => Ok(Strategy::Rand1Bin),
			"jde" | "self-adaptive" | "self_adaptive" => Ok(Strategy::Jde),
			_ => Err(format!("unknown strategy: {}", s)),
		}
	}
}

impl fmt::Display for Strategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Strategy::Rand1Bin => write!(f, "rand/1/bin"),
			Strategy::Jde => write!(f, "jDE"),
		}
	}
}

/// Which population the donors of a generation are read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Updating {
	/// Donors are read from the population as it is being updated, so a later
	/// individual may pick a donor that was already replaced in this generation.
	#[default]
	Immediate,
	/// Donors are read from a copy of the population taken before the sweep.
	Deferred,
}

/// jDE meta-parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JdeConfig {
	/// Jitter magnitude for CR
	pub tau1: f64,
	/// Jitter magnitude for F
	pub tau2: f64,
	/// Range CR is initially drawn from, inside [`CR_BOUNDS`]
	pub cr_range: (f64, f64),
	/// Range F is initially drawn from, inside [`F_BOUNDS`]
	pub f_range: (f64, f64),
}

impl Default for JdeConfig {
	fn default() -> Self {
		Self { tau1: 0.1, tau2: 0.1, cr_range: (0.0, 1.0), f_range: (0.1, 0.9) }
	}
}

/// Configuration for the Differential Evolution optimizer
pub struct DEConfig {
	pub maxiter: usize,
	/// Number of individuals N (>= 4)
	pub popsize: usize,
	pub strategy: Strategy,
	/// Scale factor F in [0, 2] (rand/1/bin only)
	pub mutation: f64,
	/// Crossover rate CR in [0,1] (rand/1/bin only)
	pub recombination: f64,
	/// jDE meta-parameters (jDE only)
	pub jde: JdeConfig,
	pub updating: Updating,
	/// Clip trial vectors to the bounds before evaluation
	pub clip_to_bounds: bool,
	pub seed: Option<u64>,
	/// Optional per-generation observer
	pub callback: Option<Box<dyn FnMut(&DEIntermediate)>>,
}

impl Default for DEConfig {
	fn default() -> Self {
		Self {
			maxiter: 100,
			popsize: 50,
			strategy: Strategy::Rand1Bin,
			mutation: 0.5,
			recombination: 0.3,
			jde: JdeConfig::default(),
			updating: Updating::default(),
			clip_to_bounds: false,
			seed: None,
			callback: None,
		}
	}
}

impl fmt::Debug for DEConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DEConfig")
			.field("maxiter", &self.maxiter)
			.field("popsize", &self.popsize)
			.field("strategy", &self.strategy)
			.field("mutation", &self.mutation)
			.field("recombination", &self.recombination)
			.field("jde", &self.jde)
			.field("updating", &self.updating)
			.field("clip_to_bounds", &self.clip_to_bounds)
			.field("seed", &self.seed)
			.field("callback", &self.callback.is_some())
			.finish()
	}
}

impl DEConfig {
	/// Check the parameters that do not depend on the problem.
	pub fn validate(&self) -> Result<()> {
		if self.popsize < 4 {
			return Err(DEError::PopulationTooSmall { pop_size: self.popsize });
		}
		match self.strategy {
			Strategy::Rand1Bin => {
				if !(0.0..=1.0).contains(&self.recombination) {
					return Err(DEError::InvalidCrossoverRate { rate: self.recombination });
				}
				if !(0.0..=2.0).contains(&self.mutation) {
					return Err(DEError::InvalidMutationFactor { factor: self.mutation });
				}
			}
			Strategy::Jde => {
				let jde = &self.jde;
				for (name, value) in [("tau1", jde.tau1), ("tau2", jde.tau2)] {
					if !value.is_finite() || value < 0.0 {
						return Err(DEError::InvalidAdaptationRate { name, value });
					}
				}
				for (name, (low, high), (min, max)) in
					[("CR", jde.cr_range, CR_BOUNDS), ("F", jde.f_range, F_BOUNDS)]
				{
					// NaN fails the comparisons as well
					if !(min <= low && low <= high && high <= max) {
						return Err(DEError::InvalidRange { name, low, high });
					}
				}
			}
		}
		Ok(())
	}
}

/// Fluent builder for `DEConfig` for ergonomic configuration.
pub struct DEConfigBuilder {
	cfg: DEConfig,
}

impl Default for DEConfigBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl DEConfigBuilder {
	pub fn new() -> Self {
		Self { cfg: DEConfig::default() }
	}
	pub fn maxiter(mut self, v: usize) -> Self {
		self.cfg.maxiter = v;
		self
	}
	pub fn popsize(mut self, v: usize) -> Self {
		self.cfg.popsize = v;
		self
	}
	pub fn strategy(mut self, v: Strategy) -> Self {
		self.cfg.strategy = v;
		self
	}
	pub fn mutation(mut self, v: f64) -> Self {
		self.cfg.mutation = v;
		self
	}
	pub fn recombination(mut self, v: f64) -> Self {
		self.cfg.recombination = v;
		self
	}
	pub fn jde(mut self, v: JdeConfig) -> Self {
		self.cfg.jde = v;
		self
	}
	pub fn adaptation_rates(mut self, tau1: f64, tau2: f64) -> Self {
		self.cfg.jde.tau1 = tau1;
		self.cfg.jde.tau2 = tau2;
		self
	}
	pub fn updating(mut self, v: Updating) -> Self {
		self.cfg.updating = v;
		self
	}
	pub fn clip_to_bounds(mut self, v: bool) -> Self {
		self.cfg.clip_to_bounds = v;
		self
	}
	pub fn seed(mut self, v: u64) -> Self {
		self.cfg.seed = Some(v);
		self
	}
	pub fn callback(mut self, cb: Box<dyn FnMut(&DEIntermediate)>) -> Self {
		self.cfg.callback = Some(cb);
		self
	}
	/// Validate and return the configuration.
	pub fn build(self) -> Result<DEConfig> {
		self.cfg.validate()?;
		Ok(self.cfg)
	}
}

/// Result/Report of a DE optimization run
#[derive(Clone)]
pub struct DEReport {
	/// Best vector found (the incumbent)
	pub x: Array1<f64>,
	/// Objective value of `x`
	pub fun: f64,
	/// Generations executed
	pub nit: usize,
	/// Objective evaluations
	pub nfev: usize,
	/// Successful selections over the whole run
	pub accepted: usize,
	pub population: Array2<f64>,
	pub population_energies: Array1<f64>,
	/// Final per-individual (CR, F); constant for rand/1/bin
	pub control: ControlParameters,
}

impl fmt::Debug for DEReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DEReport")
			.field("x", &format!("len={}", self.x.len()))
			.field("fun", &self.fun)
			.field("nit", &self.nit)
			.field("nfev", &self.nfev)
			.field("accepted", &self.accepted)
			.field(
				"population",
				&format!("{}x{}", self.population.nrows(), self.population.ncols()),
			)
			.field("population_energies", &format!("len={}", self.population_energies.len()))
			.finish()
	}
}

/// Information passed to the callback after each generation
#[derive(Debug, Clone)]
pub struct DEIntermediate {
	pub x: Array1<f64>,
	pub fun: f64,
	pub convergence: f64, // measured as std(pop_f)
	pub iter: usize,
	/// Successful selections in this generation
	pub accepted: usize,
	pub mean_cr: f64,
	pub mean_f: f64,
	/// Whether this generation beat the previous incumbent (the initial
	/// population's best for generation 1)
	pub improved: bool,
}

/// Differential Evolution optimizer
///
/// `F` is a fallible objective; infallible functions go through
/// [`differential_evolution`].
pub struct DifferentialEvolution<'a, F> {
	func: &'a F,
	dim: usize,
	low: f64,
	high: f64,
	config: DEConfig,
}

impl<'a, F, E> DifferentialEvolution<'a, F>
where
	F: Fn(&Array1<f64>) -> std::result::Result<f64, E>,
	E: Into<ObjectiveError>,
{
	/// Create a new DE optimizer with objective `func` over `[low, high]^dim`
	pub fn new(func: &'a F, dim: usize, (low, high): (f64, f64)) -> Self {
		Self { func, dim, low, high, config: DEConfig::default() }
	}

	/// Mutable access to configuration
	pub fn config_mut(&mut self) -> &mut DEConfig {
		&mut self.config
	}

	/// Check problem and configuration; nothing is drawn or evaluated.
	pub fn validate(&self) -> Result<()> {
		if self.dim < 1 {
			return Err(DEError::InvalidDimension { dim: self.dim });
		}
		if !self.low.is_finite() || !self.high.is_finite() || self.low >= self.high {
			return Err(DEError::InvalidBounds { low: self.low, high: self.high });
		}
		self.config.validate()
	}

	/// Run the optimization with a generator seeded from `config.seed`
	/// (or from the OS when no seed is set).
	pub fn solve(&mut self) -> Result<DEReport> {
		self.validate()?;
		let mut rng: StdRng = match self.config.seed {
			Some(s) => StdRng::seed_from_u64(s),
			None => {
				let mut thread_rng = rand::rng();
				StdRng::from_rng(&mut thread_rng)
			}
		};
		self.solve_with_rng(&mut rng)
	}

	/// Run the optimization drawing every random number from `rng`.
	///
	/// Draw order: initial genes (row by row), then for jDE all CR and all F
	/// values; per individual and generation: the three donors, `jrand`, one
	/// uniform per dimension, and on a successful jDE selection one normal for
	/// CR followed by one for F.
	pub fn solve_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<DEReport> {
		use clip_inplace::clip_inplace;
		use crossover_binomial::binomial_crossover;
		use init_random::init_random;
		use mutant_rand1::mutant_rand1;

		self.validate()?;

		let n = self.dim;
		let npop = self.config.popsize;
		let strategy = self.config.strategy;
		let jde = self.config.jde;

		info!(
			"DE {} start: {} dimensions, population={}, maxiter={}, bounds=[{}, {}]",
			strategy, n, npop, self.config.maxiter, self.low, self.high
		);

		// Initialize population in [low, high] and the control parameters
		let mut pop = init_random(n, npop, self.low, self.high, rng);
		let mut control = match strategy {
			Strategy::Rand1Bin => {
				ControlParameters::constant(npop, self.config.recombination, self.config.mutation)
			}
			Strategy::Jde => ControlParameters::sample(npop, jde.cr_range, jde.f_range, rng),
		};

		let mut nfev: usize = 0;
		let mut energies = Array1::<f64>::zeros(npop);
		for i in 0..npop {
			energies[i] = self.energy(&pop.row(i).to_owned(), 0, i, &mut nfev)?;
		}

		let (best_idx, mut best_f) = argmin(&energies);
		let mut best_x = pop.row(best_idx).to_owned();
		debug!("DE iter {:4}  best_f={:.6e} at index {}", 0, best_f, best_idx);

		let mut accepted_total = 0usize;
		for iter in 1..=self.config.maxiter {
			let snapshot = match self.config.updating {
				Updating::Deferred => Some(pop.clone()),
				Updating::Immediate => None,
			};
			let mut accepted = 0usize;

			for i in 0..npop {
				let trial = {
					let donors = snapshot.as_ref().unwrap_or(&pop);
					let mutant = mutant_rand1(donors, control.f[i], rng);
					let mut trial = binomial_crossover(pop.row(i), &mutant, control.cr[i], rng);
					if self.config.clip_to_bounds {
						clip_inplace(&mut trial, self.low, self.high);
					}
					trial
				};

				// Selection: replace only on strict improvement
				let trial_energy = self.energy(&trial, iter, i, &mut nfev)?;
				if trial_energy < energies[i] {
					trace!("iter {} individual {}: {:.6e} -> {:.6e}", iter, i, energies[i], trial_energy);
					pop.row_mut(i).assign(&trial);
					energies[i] = trial_energy;
					accepted += 1;
					if strategy == Strategy::Jde {
						control.adapt(i, jde.tau1, jde.tau2, rng);
					}
				}
			}
			accepted_total += accepted;

			// Update best solution after generation
			let (new_best_idx, new_best_f) = argmin(&energies);
			let improved = new_best_f < best_f;
			if improved {
				best_f = new_best_f;
				best_x = pop.row(new_best_idx).to_owned();
			}

			let pop_std = energies.std(0.0);
			debug!(
				"DE iter {:4}  best_f={:.6e}  std={:.3e}  accepted={}/{}  mean_cr={:.3} mean_f={:.3}",
				iter,
				best_f,
				pop_std,
				accepted,
				npop,
				control.mean_cr(),
				control.mean_f()
			);

			if let Some(ref mut cb) = self.config.callback {
				let intermediate = DEIntermediate {
					x: best_x.clone(),
					fun: best_f,
					convergence: pop_std,
					iter,
					accepted,
					mean_cr: control.mean_cr(),
					mean_f: control.mean_f(),
					improved,
				};
				cb(&intermediate);
			}
		}

		info!(
			"DE {} finished: best_f={:.6e} after {} generations, nfev={}",
			strategy, best_f, self.config.maxiter, nfev
		);

		Ok(self.finish_report(
			pop,
			energies,
			control,
			best_x,
			best_f,
			self.config.maxiter,
			nfev,
			accepted_total,
		))
	}
}
