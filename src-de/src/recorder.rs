use std::cell::RefCell;
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::Serialize;

use crate::DEIntermediate;

/// Records optimization progress via the per-generation DE callback
#[derive(Debug, Clone)]
pub struct OptimizationRecorder {
    /// Function name (used for CSV filename)
    function_name: String,
    /// Shared records storage
    records: Rc<RefCell<Vec<OptimizationRecord>>>,
}

/// A single generation record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationRecord {
    /// Generation number
    pub iteration: usize,
    /// Best x found so far
    pub x: Vec<f64>,
    /// Best function result so far
    pub best_result: f64,
    /// Convergence measure (standard deviation of population fitness)
    pub convergence: f64,
    /// Successful selections during the generation
    pub accepted: usize,
    pub mean_cr: f64,
    pub mean_f: f64,
    /// Whether this generation improved the best known result; generation 1
    /// is compared with the initial population
    pub is_improvement: bool,
}

impl OptimizationRecorder {
    /// Create a new optimization recorder for the given function
    pub fn new(function_name: impl Into<String>) -> Self {
        Self { function_name: function_name.into(), records: Rc::new(RefCell::new(Vec::new())) }
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    /// Create a callback function that records optimization progress
    pub fn create_callback(&self) -> Box<dyn FnMut(&DEIntermediate)> {
        let records = self.records.clone();

        Box::new(move |intermediate: &DEIntermediate| {
            records.borrow_mut().push(OptimizationRecord {
                iteration: intermediate.iter,
                x: intermediate.x.to_vec(),
                best_result: intermediate.fun,
                convergence: intermediate.convergence,
                accepted: intermediate.accepted,
                mean_cr: intermediate.mean_cr,
                mean_f: intermediate.mean_f,
                is_improvement: intermediate.improved,
            });
        })
    }

    /// Save all recorded generations to `<output_dir>/<function_name>.csv`
    pub fn save_to_csv(&self, output_dir: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
        create_dir_all(output_dir)?;

        let filename = output_dir.join(format!("{}.csv", self.function_name));
        let mut writer = csv::Writer::from_path(&filename)?;

        let records = self.records.borrow();
        let Some(first) = records.first() else {
            writer.flush()?;
            return Ok(filename);
        };

        let mut header = vec!["iteration".to_string()];
        header.extend((0..first.x.len()).map(|i| format!("x{}", i)));
        header.extend(
            ["best_result", "convergence", "accepted", "mean_cr", "mean_f", "is_improvement"]
                .iter()
                .map(|s| s.to_string()),
        );
        writer.write_record(&header)?;

        for record in records.iter() {
            let mut row = vec![record.iteration.to_string()];
            row.extend(record.x.iter().map(|xi| format!("{:.16}", xi)));
            row.push(format!("{:.16}", record.best_result));
            row.push(format!("{:.16}", record.convergence));
            row.push(record.accepted.to_string());
            row.push(format!("{:.6}", record.mean_cr));
            row.push(format!("{:.6}", record.mean_f));
            row.push(record.is_improvement.to_string());
            writer.write_record(&row)?;
        }
        writer.flush()?;

        Ok(filename)
    }

    /// All recorded generations as a JSON array
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&*self.records.borrow())
    }

    /// Get a copy of all recorded generations
    pub fn get_records(&self) -> Vec<OptimizationRecord> {
        self.records.borrow().clone()
    }

    /// Get the number of generations recorded
    pub fn num_iterations(&self) -> usize {
        self.records.borrow().len()
    }

    /// Clear all recorded generations
    pub fn clear(&self) {
        self.records.borrow_mut().clear();
    }

    /// Get the final best solution if any generation was recorded
    pub fn get_best_solution(&self) -> Option<(Vec<f64>, f64)> {
        self.records.borrow().last().map(|r| (r.x.clone(), r.best_result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    fn intermediate(iter: usize, x: Vec<f64>, fun: f64, improved: bool) -> DEIntermediate {
        DEIntermediate {
            x: Array1::from(x),
            fun,
            convergence: 0.1,
            iter,
            accepted: 3,
            mean_cr: 0.3,
            mean_f: 0.5,
            improved,
        }
    }

    #[test]
    fn test_optimization_recorder() {
        let recorder = OptimizationRecorder::new("test_function");
        let mut callback = recorder.create_callback();

        callback(&intermediate(1, vec![1.0, 2.0], 5.0, true));
        callback(&intermediate(2, vec![0.5, 1.0], 1.25, true));
        callback(&intermediate(3, vec![0.5, 1.0], 1.25, false));

        let records = recorder.get_records();
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].iteration, 1);
        assert_eq!(records[0].x, vec![1.0, 2.0]);
        assert_eq!(records[0].best_result, 5.0);
        assert!(records[0].is_improvement);

        assert!(records[1].is_improvement);
        assert!(!records[2].is_improvement);

        assert_eq!(recorder.get_best_solution(), Some((vec![0.5, 1.0], 1.25)));
        recorder.clear();
        assert_eq!(recorder.num_iterations(), 0);
    }

    #[test]
    fn test_save_to_csv() {
        let dir = tempfile::tempdir().expect("tempdir");
        let recorder = OptimizationRecorder::new("sphere_2d");
        let mut callback = recorder.create_callback();
        callback(&intermediate(1, vec![1.0, 2.0], 5.0, false));
        callback(&intermediate(2, vec![0.5, 1.0], 1.25, true));

        let path = recorder.save_to_csv(dir.path()).expect("csv written");
        let content = std::fs::read_to_string(&path).expect("csv readable");
        let lines: Vec<&str> = content.trim().lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "iteration,x0,x1,best_result,convergence,accepted,mean_cr,mean_f,is_improvement"
        );
        assert!(lines[1].starts_with("1,"));
        assert!(lines[1].ends_with(",false"));
        assert!(lines[2].ends_with(",true"));
    }

    #[test]
    fn test_to_json() {
        let recorder = OptimizationRecorder::new("f");
        let mut callback = recorder.create_callback();
        callback(&intermediate(1, vec![0.0], 0.0, true));
        let json = recorder.to_json().expect("json");
        assert!(json.contains("\"best_result\": 0.0"));
    }

    #[test]
    fn test_first_generation_compared_with_initial_population() {
        use crate::{DEConfigBuilder, differential_evolution};

        // a flat objective never improves, not even in generation 1
        let recorder = OptimizationRecorder::new("flat");
        let config = DEConfigBuilder::new()
            .seed(3)
            .popsize(5)
            .maxiter(4)
            .callback(recorder.create_callback())
            .build()
            .expect("config");
        differential_evolution(&|_: &Array1<f64>| 2.0, 2, (-1.0, 1.0), config).expect("run");
        let records = recorder.get_records();
        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|r| !r.is_improvement));

        let recorder = OptimizationRecorder::new("sphere");
        let config = DEConfigBuilder::new()
            .seed(3)
            .popsize(10)
            .maxiter(30)
            .callback(recorder.create_callback())
            .build()
            .expect("config");
        let sphere = |x: &Array1<f64>| x.iter().map(|v| v * v).sum::<f64>();
        differential_evolution(&sphere, 2, (-5.0, 5.0), config).expect("run");
        let records = recorder.get_records();
        for w in records.windows(2) {
            assert_eq!(w[1].is_improvement, w[1].best_result < w[0].best_result);
        }
        assert!(records.iter().any(|r| r.is_improvement));
    }
}
