use clap::{Parser, ValueEnum};
use log::{info, warn};
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;

use evolve_de::function_registry::{FunctionRegistry, TestFunction};
use evolve_de::{
	DEConfig, DEConfigBuilder, DEReport, Strategy, differential_evolution,
	run_recorded_differential_evolution,
};
use evolve_testfunctions::get_function_metadata;

/// CLI arguments for running the optimizers on benchmark functions
#[derive(Parser, Debug)]
#[command(name = "run_de")]
#[command(about = "Minimize benchmark functions with rand/1/bin and jDE differential evolution")]
struct Args {
	/// Which optimizer(s) to run
	#[arg(short, long, value_enum, default_value_t = StrategyChoice::Both)]
	strategy: StrategyChoice,

	/// Comma-separated list of functions (use --list-functions to see available options)
	#[arg(short, long, default_value = "sphere,schwefel,rastrigin")]
	functions: String,

	/// Number of individuals
	#[arg(long, default_value_t = 50)]
	pop_size: usize,

	/// Dimensionality of the problem
	#[arg(long, default_value_t = 10)]
	dim: usize,

	/// Lower bound applied to every coordinate
	#[arg(long, default_value_t = -5.12, allow_hyphen_values = true)]
	low: f64,

	/// Upper bound applied to every coordinate
	#[arg(long, default_value_t = 5.12, allow_hyphen_values = true)]
	high: f64,

	/// Number of generations
	#[arg(long, default_value_t = 100)]
	max_iter: usize,

	/// Crossover rate CR for rand/1/bin
	#[arg(long, default_value_t = 0.3)]
	recombination: f64,

	/// Scale factor F for rand/1/bin
	#[arg(long, default_value_t = 0.5)]
	mutation: f64,

	/// Clip trial vectors to [low, high] before evaluation
	#[arg(long)]
	clip_to_bounds: bool,

	/// Optional random seed for reproducibility
	#[arg(long)]
	seed: Option<u64>,

	/// Print one JSON summary per run instead of plain text
	#[arg(long)]
	json: bool,

	/// Write one CSV trace per run
	#[arg(long)]
	record: bool,

	/// Directory for CSV traces (defaults to the records directory)
	#[arg(short, long)]
	output_dir: Option<PathBuf>,

	/// List all available functions and exit
	#[arg(long)]
	list_functions: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyChoice {
	Rand1bin,
	Jde,
	Both,
}

impl StrategyChoice {
	fn strategies(self) -> Vec<Strategy> {
		match self {
			StrategyChoice::Rand1bin => vec![Strategy::Rand1Bin],
			StrategyChoice::Jde => vec![Strategy::Jde],
			StrategyChoice::Both => vec![Strategy::Rand1Bin, Strategy::Jde],
		}
	}
}

#[derive(Debug, Serialize)]
struct RunSummary {
	function: String,
	strategy: String,
	dim: usize,
	best_value: f64,
	best_vector: Vec<f64>,
	nfev: usize,
	accepted: usize,
	#[serde(skip_serializing_if = "Option::is_none")]
	trace: Option<PathBuf>,
}

fn build_config(args: &Args, strategy: Strategy) -> Result<DEConfig, Box<dyn Error>> {
	let mut builder = DEConfigBuilder::new()
		.popsize(args.pop_size)
		.maxiter(args.max_iter)
		.strategy(strategy)
		.recombination(args.recombination)
		.mutation(args.mutation)
		.clip_to_bounds(args.clip_to_bounds);
	if let Some(seed) = args.seed {
		builder = builder.seed(seed);
	}
	Ok(builder.build()?)
}

fn run_one(
	args: &Args,
	name: &str,
	func: TestFunction,
	strategy: Strategy,
) -> Result<RunSummary, Box<dyn Error>> {
	let config = build_config(args, strategy)?;
	let bounds = (args.low, args.high);

	let (report, trace): (DEReport, Option<PathBuf>) = if args.record {
		let label = format!("{}_{}", name, strategy.to_string().replace('/', ""));
		let (report, path) = run_recorded_differential_evolution(
			&label,
			func,
			args.dim,
			bounds,
			config,
			args.output_dir.as_deref(),
		)?;
		(report, Some(path))
	} else {
		(differential_evolution(&func, args.dim, bounds, config)?, None)
	};

	Ok(RunSummary {
		function: name.to_string(),
		strategy: strategy.to_string(),
		dim: args.dim,
		best_value: report.fun,
		best_vector: report.x.to_vec(),
		nfev: report.nfev,
		accepted: report.accepted,
		trace,
	})
}

fn format_vector(x: &[f64]) -> String {
	let parts: Vec<String> = x.iter().map(|v| format!("{:.6}", v)).collect();
	format!("[{}]", parts.join(", "))
}

fn list_available_functions(registry: &FunctionRegistry) {
	let metadata = get_function_metadata();
	println!("Available functions:");
	for name in registry.names() {
		match metadata.get(&name) {
			Some(meta) => println!(
				"  {:<12} bounds=[{}, {}]  {}",
				name, meta.bounds.0, meta.bounds.1, meta.description
			),
			None => println!("  {}", name),
		}
	}
}

fn main() -> Result<(), Box<dyn Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
	let args = Args::parse();
	let registry = FunctionRegistry::new();

	if args.list_functions {
		list_available_functions(&registry);
		return Ok(());
	}

	let names: Vec<&str> =
		args.functions.split(',').map(str::trim).filter(|s| !s.is_empty()).collect();

	let mut summaries = Vec::new();
	for name in names {
		let Some(func) = registry.get(name) else {
			return Err(format!(
				"function '{}' not found; use --list-functions to see available names",
				name
			)
			.into());
		};
		if let Some(meta) = get_function_metadata().get(name) {
			if args.low < meta.bounds.0 || args.high > meta.bounds.1 {
				warn!(
					"{}: bounds [{}, {}] exceed the usual domain [{}, {}]",
					name, args.low, args.high, meta.bounds.0, meta.bounds.1
				);
			}
		}

		for strategy in args.strategy.strategies() {
			info!("running {} on {} ({} dimensions)", strategy, name, args.dim);
			let summary = run_one(&args, name, func, strategy)?;
			if !args.json {
				println!("{} [{}]", summary.function, summary.strategy);
				println!("  best value : {:.6e}", summary.best_value);
				println!("  best vector: {}", format_vector(&summary.best_vector));
				if let Some(path) = &summary.trace {
					println!("  trace      : {}", path.display());
				}
			}
			summaries.push(summary);
		}
	}

	if args.json {
		println!("{}", serde_json::to_string_pretty(&summaries)?);
	}
	Ok(())
}
