/// Shared function registry for the benchmark driver
use evolve_testfunctions::*;
use ndarray::Array1;
use std::collections::HashMap;

/// Test function type definition
pub type TestFunction = fn(&Array1<f64>) -> f64;

/// Function registry mapping names to actual function pointers.
pub struct FunctionRegistry {
    functions: HashMap<String, TestFunction>,
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionRegistry {
    /// Creates a new registry with all standard test functions.
    pub fn new() -> Self {
        let mut functions = HashMap::new();

        // Unimodal functions
        functions.insert("sphere".to_string(), sphere as TestFunction);
        functions.insert("quadratic".to_string(), quadratic as TestFunction);
        functions.insert("rosenbrock".to_string(), rosenbrock as TestFunction);

        // Multimodal functions
        functions.insert("schwefel".to_string(), schwefel as TestFunction);
        functions.insert("rastrigin".to_string(), rastrigin as TestFunction);
        functions.insert("ackley".to_string(), ackley as TestFunction);

        Self { functions }
    }

    /// Look up a function by name.
    pub fn get(&self, name: &str) -> Option<TestFunction> {
        self.functions.get(name).copied()
    }

    /// Sorted list of registered names.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.functions.keys().cloned().collect();
        names.sort();
        names
    }
}
