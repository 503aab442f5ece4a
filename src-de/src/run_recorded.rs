//! Recording wrapper for differential evolution

use std::path::{Path, PathBuf};

use evolve_env::records_dir_or_default;
use ndarray::Array1;

use crate::recorder::OptimizationRecorder;
use crate::{DEConfig, DEReport, differential_evolution};

/// Run differential evolution and save one CSV row per generation.
///
/// Rows go to `<output_dir>/<function_name>.csv`; without `output_dir` the
/// records directory under EVOLVE_DIR is used (or `./data_generated/records`).
/// Any callback already set in `config` is replaced by the recorder.
pub fn run_recorded_differential_evolution<F>(
    function_name: &str,
    func: F,
    dim: usize,
    bounds: (f64, f64),
    mut config: DEConfig,
    output_dir: Option<&Path>,
) -> Result<(DEReport, PathBuf), Box<dyn std::error::Error>>
where
    F: Fn(&Array1<f64>) -> f64,
{
    let output_dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => records_dir_or_default(Path::new("."))?,
    };

    let recorder = OptimizationRecorder::new(function_name);
    config.callback = Some(recorder.create_callback());

    let report = differential_evolution(&func, dim, bounds, config)?;
    let csv_path = recorder.save_to_csv(&output_dir)?;
    log::info!("{}: {} generations recorded to {}", function_name, recorder.num_iterations(), csv_path.display());

    Ok((report, csv_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEConfigBuilder;

    #[test]
    fn test_run_recorded_basic() {
        let quadratic = |x: &Array1<f64>| -> f64 { x.iter().map(|&xi| xi * xi).sum() };
        let dir = tempfile::tempdir().expect("tempdir");

        let config = DEConfigBuilder::new().seed(42).maxiter(20).popsize(10).build().expect("config");

        let result = run_recorded_differential_evolution(
            "test_quadratic",
            quadratic,
            2,
            (-5.0, 5.0),
            config,
            Some(dir.path()),
        );

        assert!(result.is_ok());
        let (report, csv_path) = result.unwrap();
        assert_eq!(report.nit, 20);

        let content = std::fs::read_to_string(&csv_path).expect("csv readable");
        // header + one row per generation
        assert_eq!(content.trim().lines().count(), 21);
    }
}
