/// Environment variable pointing at the project root
pub const EVOLVE_DIR_VAR: &str = "EVOLVE_DIR";

/// Directory (relative to the project root) for generated artefacts
pub const DATA_GENERATED: &str = "data_generated";

/// Subdirectory of [`DATA_GENERATED`] holding optimization traces
pub const RECORDS: &str = "records";
