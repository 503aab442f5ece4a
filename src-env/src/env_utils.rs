//! Environment variable utilities for evolve
//!
//! This module provides utilities for handling environment variables,
//! particularly the EVOLVE_DIR variable that points to the project root.

use crate::constants::{DATA_GENERATED, EVOLVE_DIR_VAR, RECORDS};
use std::env;
use std::path::{Path, PathBuf};

/// Error type for environment variable issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "EVOLVE_DIR environment variable is not set. Please set it to the project root directory (e.g., export EVOLVE_DIR=/path/to/evolve)"
    )]
    EvolveDirNotSet,

    #[error("EVOLVE_DIR points to a non-existent directory: {0}")]
    EvolveDirNotFound(PathBuf),

    #[error("Failed to create data_generated directory: {0}")]
    DataGeneratedCreationFailed(std::io::Error),
}

/// Get the EVOLVE_DIR environment variable and validate it exists
///
/// # Errors
///
/// Returns an error if:
/// - EVOLVE_DIR is not set
/// - EVOLVE_DIR points to a non-existent directory
///
/// # Example
///
/// ```no_run
/// use evolve_env::env_utils::get_evolve_dir;
///
/// let evolve_dir = get_evolve_dir()?;
/// println!("evolve directory: {}", evolve_dir.display());
/// # Ok::<(), evolve_env::env_utils::EnvError>(())
/// ```
pub fn get_evolve_dir() -> Result<PathBuf, EnvError> {
    resolve_evolve_dir(env::var(EVOLVE_DIR_VAR).ok())
}

/// Validate a candidate project root, as read from EVOLVE_DIR.
pub fn resolve_evolve_dir(value: Option<String>) -> Result<PathBuf, EnvError> {
    let path = PathBuf::from(value.ok_or(EnvError::EvolveDirNotSet)?);

    if !path.exists() {
        return Err(EnvError::EvolveDirNotFound(path));
    }

    Ok(path)
}

/// Get the path to the data_generated directory, creating it if necessary
pub fn get_data_generated_dir() -> Result<PathBuf, EnvError> {
    let evolve_dir = get_evolve_dir()?;
    ensure_dir(evolve_dir.join(DATA_GENERATED))
}

/// Get the path to the records subdirectory within data_generated
///
/// # Errors
///
/// Returns an error if EVOLVE_DIR is not set or invalid, or if the
/// directories cannot be created.
pub fn get_records_dir() -> Result<PathBuf, EnvError> {
    let data_generated = get_data_generated_dir()?;
    ensure_dir(data_generated.join(RECORDS))
}

/// Records directory under EVOLVE_DIR, or `<fallback>/data_generated/records`
/// when EVOLVE_DIR is not configured.
pub fn records_dir_or_default(fallback: &Path) -> Result<PathBuf, EnvError> {
    match get_records_dir() {
        Ok(dir) => Ok(dir),
        Err(EnvError::EvolveDirNotSet) => ensure_dir(fallback.join(DATA_GENERATED).join(RECORDS)),
        Err(e) => Err(e),
    }
}

fn ensure_dir(dir: PathBuf) -> Result<PathBuf, EnvError> {
    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(EnvError::DataGeneratedCreationFailed)?;
    }
    Ok(dir)
}
