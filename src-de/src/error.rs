//! Error types for the Differential Evolution optimizers.
//!
//! Configuration problems are reported before any random number is drawn.
//! A failing objective aborts the run and its error is carried unchanged as
//! the `source` of [`DEError::Objective`].

use thiserror::Error;

/// Boxed error produced by a fallible objective function.
pub type ObjectiveError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during Differential Evolution optimization.
#[derive(Debug, Error)]
pub enum DEError {
    /// Population size is too small (three distinct donors plus the target).
    #[error("population size ({pop_size}) must be >= 4")]
    PopulationTooSmall {
        /// The invalid population size
        pop_size: usize,
    },

    /// Problem dimension must be at least one.
    #[error("dimension ({dim}) must be >= 1")]
    InvalidDimension {
        /// The invalid dimension
        dim: usize,
    },

    /// Lower bound is not strictly below the upper bound, or a bound is not finite.
    #[error("invalid bounds: low ({low}) must be finite and < high ({high})")]
    InvalidBounds {
        /// The lower bound value
        low: f64,
        /// The upper bound value
        high: f64,
    },

    /// A sampling range for a control parameter has low > high or reaches
    /// outside [0, 1] (CR) or [0.1, 0.9] (F).
    #[error("invalid {name} range: [{low}, {high}] is empty or leaves the valid interval")]
    InvalidRange {
        /// Which range is invalid ("CR" or "F")
        name: &'static str,
        /// The lower end of the range
        low: f64,
        /// The upper end of the range
        high: f64,
    },

    /// Mutation factor is out of valid range [0, 2].
    #[error("invalid mutation factor: {factor} (must be in [0, 2])")]
    InvalidMutationFactor {
        /// The invalid mutation factor
        factor: f64,
    },

    /// Crossover rate is out of valid range [0, 1].
    #[error("invalid crossover rate: {rate} (must be in [0, 1])")]
    InvalidCrossoverRate {
        /// The invalid crossover rate
        rate: f64,
    },

    /// A jDE adaptation rate (tau1 / tau2) is negative or not finite.
    #[error("invalid adaptation rate {name}: {value} (must be finite and >= 0)")]
    InvalidAdaptationRate {
        /// Which rate is invalid ("tau1" or "tau2")
        name: &'static str,
        /// The invalid value
        value: f64,
    },

    /// The objective function failed; the run was aborted.
    #[error("objective evaluation failed at generation {generation} (individual {index}): {source}")]
    Objective {
        /// Generation during which the failure happened (0 = initial population)
        generation: usize,
        /// Index of the individual whose (trial) vector was being evaluated
        index: usize,
        /// The error returned by the objective, untouched
        #[source]
        source: ObjectiveError,
    },
}

/// A specialized `Result` type for DE operations.
pub type Result<T> = std::result::Result<T, DEError>;

impl DEError {
    /// Returns `true` if this is a bounds-related error.
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, DEError::InvalidBounds { .. })
    }

    /// Returns `true` if the configuration was rejected before the run started.
    pub fn is_config_error(&self) -> bool {
        !self.is_objective_error()
    }

    /// Returns `true` if the objective function failed during the run.
    pub fn is_objective_error(&self) -> bool {
        matches!(self, DEError::Objective { .. })
    }

    /// Hands back the objective's own error, e.g. to downcast it.
    ///
    /// Returns `None` for configuration errors.
    pub fn into_objective_error(self) -> Option<ObjectiveError> {
        match self {
            DEError::Objective { source, .. } => Some(source),
            _ => None,
        }
    }
}
