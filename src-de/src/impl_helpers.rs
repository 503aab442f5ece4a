use crate::error::{DEError, ObjectiveError, Result};
use crate::{ControlParameters, DEReport, DifferentialEvolution};
use ndarray::{Array1, Array2};

// ------------------------------ Internal helpers ------------------------------

impl<'a, F, E> DifferentialEvolution<'a, F>
where
    F: Fn(&Array1<f64>) -> std::result::Result<f64, E>,
    E: Into<ObjectiveError>,
{
    /// Evaluate the objective, counting the call. A failure is tagged with
    /// the generation and individual and handed back as-is.
    pub(crate) fn energy(
        &self,
        x: &Array1<f64>,
        generation: usize,
        index: usize,
        nfev: &mut usize,
    ) -> Result<f64> {
        *nfev += 1;
        (self.func)(x).map_err(|e| DEError::Objective { generation, index, source: e.into() })
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn finish_report(
        &self,
        pop: Array2<f64>,
        energies: Array1<f64>,
        control: ControlParameters,
        x: Array1<f64>,
        fun: f64,
        nit: usize,
        nfev: usize,
        accepted: usize,
    ) -> DEReport {
        DEReport {
            x,
            fun,
            nit,
            nfev,
            accepted,
            population: pop,
            population_energies: energies,
            control,
        }
    }
}
