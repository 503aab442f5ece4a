//! Environment utilities and shared constants for the evolve crates

pub mod constants;
pub mod env_utils;

pub use constants::*;
pub use env_utils::{
    EnvError, get_data_generated_dir, get_evolve_dir, get_records_dir, records_dir_or_default,
};
