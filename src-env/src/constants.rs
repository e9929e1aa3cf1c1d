/// Environment variable pointing to the fbench project root
pub const FBENCH_DIR_VAR: &str = "FBENCH_DIR";

/// Directory (relative to the project root) for generated artefacts
pub const DATA_GENERATED: &str = "data_generated";

/// Subdirectory of [`DATA_GENERATED`] receiving plots
pub const PLOTS: &str = "plots";

/// Fallback output directory when `FBENCH_DIR` is not set
pub const DEFAULT_PLOTS_DIR: &str = "plots";
