use std::convert::Infallible;

use crate::error::{ObjectiveError, Result};
use crate::{DEConfig, DEConfigBuilder, DEReport, DifferentialEvolution, JdeConfig, Strategy};
use ndarray::Array1;
use rand::Rng;

/// Convenience function mirroring SciPy's API shape (simplified):
/// - `func`: objective function mapping x -> f(x)
/// - `dim`, `bounds`: search space `[bounds.0, bounds.1]^dim`
/// - `config`: DE configuration
pub fn differential_evolution<F>(
	func: &F,
	dim: usize,
	bounds: (f64, f64),
	config: DEConfig,
) -> Result<DEReport>
where
	F: Fn(&Array1<f64>) -> f64,
{
	let infallible = |x: &Array1<f64>| -> std::result::Result<f64, Infallible> { Ok(func(x)) };
	try_differential_evolution(&infallible, dim, bounds, config)
}

/// Same as [`differential_evolution`] for an objective that can fail.
///
/// The first error returned by `func` stops the run and comes back as
/// [`crate::DEError::Objective`].
pub fn try_differential_evolution<F, E>(
	func: &F,
	dim: usize,
	bounds: (f64, f64),
	config: DEConfig,
) -> Result<DEReport>
where
	F: Fn(&Array1<f64>) -> std::result::Result<f64, E>,
	E: Into<ObjectiveError>,
{
	let mut de = DifferentialEvolution::new(func, dim, bounds);
	*de.config_mut() = config;
	de.solve()
}

/// DE/rand/1/bin with constant crossover rate `cr` and scale factor `f`.
///
/// Returns the best vector and its objective value after exactly `max_iter`
/// generations.
#[allow(clippy::too_many_arguments)]
pub fn run_rand1bin<F, E, R>(
	pop_size: usize,
	dim: usize,
	bounds: (f64, f64),
	max_iter: usize,
	objective: &F,
	cr: f64,
	f: f64,
	rng: &mut R,
) -> Result<(Array1<f64>, f64)>
where
	F: Fn(&Array1<f64>) -> std::result::Result<f64, E>,
	E: Into<ObjectiveError>,
	R: Rng + ?Sized,
{
	let config = DEConfigBuilder::new()
		.popsize(pop_size)
		.maxiter(max_iter)
		.strategy(Strategy::Rand1Bin)
		.recombination(cr)
		.mutation(f)
		.build()?;
	let mut de = DifferentialEvolution::new(objective, dim, bounds);
	*de.config_mut() = config;
	let report = de.solve_with_rng(rng)?;
	Ok((report.x, report.fun))
}

/// Self-adaptive jDE; `jde` holds tau1, tau2 and the initial CR/F ranges.
///
/// Returns the best vector and its objective value after exactly `max_iter`
/// generations.
pub fn run_jde<F, E, R>(
	pop_size: usize,
	dim: usize,
	bounds: (f64, f64),
	max_iter: usize,
	objective: &F,
	jde: JdeConfig,
	rng: &mut R,
) -> Result<(Array1<f64>, f64)>
where
	F: Fn(&Array1<f64>) -> std::result::Result<f64, E>,
	E: Into<ObjectiveError>,
	R: Rng + ?Sized,
{
	let config = DEConfigBuilder::new()
		.popsize(pop_size)
		.maxiter(max_iter)
		.strategy(Strategy::Jde)
		.jde(jde)
		.build()?;
	let mut de = DifferentialEvolution::new(objective, dim, bounds);
	*de.config_mut() = config;
	let report = de.solve_with_rng(rng)?;
	Ok((report.x, report.fun))
}
