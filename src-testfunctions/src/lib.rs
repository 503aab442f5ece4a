//! Optimization test functions library
//!
//! Benchmark objectives used to exercise the rand/1/bin and jDE optimizers:
//!
//! - **Unimodal**: sphere, quadratic, rosenbrock
//! - **Multimodal**: schwefel, rastrigin, ackley
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use evolve_testfunctions::*;
//!
//! let x = Array1::from_vec(vec![0.0, 0.0]);
//! let result = sphere(&x);
//! assert_eq!(result, 0.0);
//!
//! let bounds = get_function_bounds("rastrigin");
//! assert_eq!(bounds, Some((-5.12, 5.12)));
//! ```

use std::collections::HashMap;

pub mod functions;
pub use functions::*;

/// Metadata for a test function: bounds, global minimum and a short description
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Bounds applied to every dimension (min, max)
    pub bounds: (f64, f64),
    /// Coordinate repeated in every dimension at the global minimum
    pub argmin_coordinate: f64,
    /// Value at the global minimum
    pub global_minimum: f64,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
}

fn entry(
    name: &str,
    bounds: (f64, f64),
    argmin_coordinate: f64,
    description: &str,
    multimodal: bool,
) -> (String, FunctionMetadata) {
    (
        name.to_string(),
        FunctionMetadata {
            name: name.to_string(),
            bounds,
            argmin_coordinate,
            global_minimum: 0.0,
            description: description.to_string(),
            multimodal,
        },
    )
}

/// Get metadata for all available test functions
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    HashMap::from([
        entry("sphere", (-5.12, 5.12), 0.0, "N-dimensional convex bowl", false),
        entry("quadratic", (-5.0, 5.0), 1.0, "N-dimensional shifted bowl", false),
        entry("rosenbrock", (-2.048, 2.048), 1.0, "N-dimensional banana function", false),
        entry(
            "schwefel",
            (-500.0, 500.0),
            420.968_746,
            "N-dimensional deceptive multimodal function",
            true,
        ),
        entry("rastrigin", (-5.12, 5.12), 0.0, "N-dimensional highly multimodal function", true),
        entry("ackley", (-32.768, 32.768), 0.0, "N-dimensional multimodal function", true),
    ])
}

/// Helper function to get bounds for a specific function from metadata
/// Returns None if function is not found in metadata
pub fn get_function_bounds(function_name: &str) -> Option<(f64, f64)> {
    get_function_metadata().get(function_name).map(|meta| meta.bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    fn call_function(name: &str, x: &Array1<f64>) -> Option<f64> {
        match name {
            "sphere" => Some(sphere(x)),
            "quadratic" => Some(quadratic(x)),
            "rosenbrock" => Some(rosenbrock(x)),
            "schwefel" => Some(schwefel(x)),
            "rastrigin" => Some(rastrigin(x)),
            "ackley" => Some(ackley(x)),
            _ => None,
        }
    }

    #[test]
    fn test_global_minima_from_metadata() {
        for (name, meta) in get_function_metadata() {
            for dim in [1, 2, 5] {
                let x = Array1::from_elem(dim, meta.argmin_coordinate);
                let f = call_function(&name, &x).expect("function registered");
                // schwefel's constant is only given to 4 decimals
                let tol = if name == "schwefel" { 1e-3 * dim as f64 } else { 1e-12 };
                assert!(
                    (f - meta.global_minimum).abs() < tol,
                    "{} at its minimum gives {} (dim {})",
                    name,
                    f,
                    dim
                );
            }
        }
    }

    #[test]
    fn test_values_away_from_minimum() {
        let x = Array1::from(vec![1.0, 2.0]);
        assert_eq!(sphere(&x), 5.0);
        assert_eq!(rosenbrock(&Array1::from(vec![0.0, 0.0])), 1.0);
        assert!((rastrigin(&x) - 5.0).abs() < 1e-12);
        assert!(schwefel(&x) > 0.0);
        assert!(ackley(&x) > 0.0);
    }

    #[test]
    fn test_bounds_lookup() {
        assert_eq!(get_function_bounds("schwefel"), Some((-500.0, 500.0)));
        assert_eq!(get_function_bounds("unknown"), None);
    }
}
