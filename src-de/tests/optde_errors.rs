use evolve_de::{
    DEConfigBuilder, DEError, JdeConfig, Strategy, differential_evolution, run_rand1bin,
    try_differential_evolution,
};
use evolve_testfunctions::sphere;
use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

#[test]
fn test_population_of_three_is_rejected() {
    let err = DEConfigBuilder::new().popsize(3).build().unwrap_err();
    assert!(err.is_config_error());
    assert_eq!(err.to_string(), "population size (3) must be >= 4");

    let objective = |x: &Array1<f64>| Ok::<f64, std::convert::Infallible>(sphere(x));
    let mut rng = StdRng::seed_from_u64(0);
    let err = run_rand1bin(3, 2, (-1.0, 1.0), 10, &objective, 0.3, 0.5, &mut rng).unwrap_err();
    assert!(matches!(err, DEError::PopulationTooSmall { pop_size: 3 }));
}

#[test]
fn test_population_of_four_is_enough() {
    let config = DEConfigBuilder::new().seed(1).popsize(4).maxiter(10).build().expect("config");
    let report = differential_evolution(&sphere, 2, (-1.0, 1.0), config).expect("run");
    assert_eq!(report.population.nrows(), 4);
}

#[test]
fn test_invalid_bounds_and_rates() {
    let config = DEConfigBuilder::new().seed(1).build().expect("config");
    let err = differential_evolution(&sphere, 2, (5.0, -5.0), config).unwrap_err();
    assert!(matches!(err, DEError::InvalidBounds { .. }));

    let err = DEConfigBuilder::new()
        .strategy(Strategy::Jde)
        .jde(JdeConfig { cr_range: (f64::NAN, 1.0), ..JdeConfig::default() })
        .build()
        .unwrap_err();
    assert!(matches!(err, DEError::InvalidRange { name: "CR", .. }));
}

#[derive(Debug)]
struct DimensionMismatch(usize);

impl fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "objective expects 2 coordinates, got {}", self.0)
    }
}

impl std::error::Error for DimensionMismatch {}

#[test]
fn test_objective_error_is_propagated() {
    let objective = |x: &Array1<f64>| -> Result<f64, DimensionMismatch> {
        if x.len() != 2 {
            return Err(DimensionMismatch(x.len()));
        }
        Ok(sphere(x))
    };
    let config = DEConfigBuilder::new().seed(2).popsize(5).maxiter(5).build().expect("config");
    let err = try_differential_evolution(&objective, 4, (-1.0, 1.0), config).unwrap_err();

    assert!(err.is_objective_error());
    assert!(err.to_string().contains("objective expects 2 coordinates, got 4"));
    let source = err.into_objective_error().expect("objective error");
    assert_eq!(source.downcast_ref::<DimensionMismatch>().map(|e| e.0), Some(4));
}
