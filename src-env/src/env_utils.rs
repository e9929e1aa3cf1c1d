//! Environment variable utilities for fbench
//!
//! This module provides utilities for handling environment variables,
//! particularly the FBENCH_DIR variable that points to the fbench project root.

use crate::constants::{DATA_GENERATED, DEFAULT_PLOTS_DIR, FBENCH_DIR_VAR, PLOTS};
use std::env;
use std::path::{Path, PathBuf};

/// Error type for environment variable issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "FBENCH_DIR environment variable is not set. Please set it to the fbench project root directory (e.g., export FBENCH_DIR=/path/to/fbench)"
    )]
    FbenchDirNotSet,

    #[error("FBENCH_DIR points to a non-existent directory: {0}")]
    FbenchDirNotFound(PathBuf),

    #[error("Failed to create directory {0}: {1}")]
    DirectoryCreationFailed(PathBuf, std::io::Error),
}

/// Get the FBENCH_DIR environment variable and validate it exists
///
/// # Errors
///
/// Returns an error if:
/// - FBENCH_DIR is not set
/// - FBENCH_DIR points to a non-existent directory
///
/// # Example
///
/// ```no_run
/// use fbench_env::env_utils::get_fbench_dir;
///
/// let fbench_dir = get_fbench_dir()?;
/// println!("fbench directory: {}", fbench_dir.display());
/// # Ok::<(), fbench_env::env_utils::EnvError>(())
/// ```
pub fn get_fbench_dir() -> Result<PathBuf, EnvError> {
    let fbench_dir = env::var(FBENCH_DIR_VAR).map_err(|_| EnvError::FbenchDirNotSet)?;
    fbench_dir_from(PathBuf::from(fbench_dir))
}

fn fbench_dir_from(path: PathBuf) -> Result<PathBuf, EnvError> {
    if !path.exists() {
        return Err(EnvError::FbenchDirNotFound(path));
    }
    Ok(path)
}

/// Create `dir` (and its parents) if it does not exist yet
pub fn ensure_dir(dir: &Path) -> Result<(), EnvError> {
    if !dir.exists() {
        log::debug!("creating directory {}", dir.display());
        std::fs::create_dir_all(dir)
            .map_err(|e| EnvError::DirectoryCreationFailed(dir.to_path_buf(), e))?;
    }
    Ok(())
}

/// Get the path to the data_generated directory, creating it if necessary
///
/// # Errors
///
/// Returns an error if:
/// - FBENCH_DIR is not set or invalid
/// - Cannot create the data_generated directory
pub fn get_data_generated_dir() -> Result<PathBuf, EnvError> {
    let data_generated = get_fbench_dir()?.join(DATA_GENERATED);
    ensure_dir(&data_generated)?;
    Ok(data_generated)
}

/// Get the directory receiving plots
///
/// Uses `$FBENCH_DIR/data_generated/plots` when FBENCH_DIR is set, and
/// `./plots` otherwise. The directory is created if necessary.
///
/// # Errors
///
/// Returns an error if FBENCH_DIR points to a non-existent directory or if
/// the plots directory cannot be created.
pub fn get_plots_dir() -> Result<PathBuf, EnvError> {
    let plots_dir = match get_data_generated_dir() {
        Ok(data_generated) => data_generated.join(PLOTS),
        Err(EnvError::FbenchDirNotSet) => {
            log::info!("{FBENCH_DIR_VAR} is not set, writing plots to ./{DEFAULT_PLOTS_DIR}");
            PathBuf::from(DEFAULT_PLOTS_DIR)
        }
        Err(e) => return Err(e),
    };
    ensure_dir(&plots_dir)?;
    Ok(plots_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fbench_dir_nonexistent() {
        let result = fbench_dir_from(PathBuf::from("/this/path/should/not/exist"));
        assert!(matches!(result, Err(EnvError::FbenchDirNotFound(_))));
    }

    #[test]
    fn test_fbench_dir_existing() {
        let dir = tempfile::tempdir().unwrap();
        let result = fbench_dir_from(dir.path().to_path_buf());
        assert_eq!(result.unwrap(), dir.path());
    }

    #[test]
    fn test_ensure_dir_creates_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join(DATA_GENERATED).join(PLOTS);
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // idempotent
        ensure_dir(&nested).unwrap();
    }

    #[test]
    fn test_error_messages_name_the_variable() {
        assert!(EnvError::FbenchDirNotSet.to_string().contains("FBENCH_DIR"));
        let err = EnvError::FbenchDirNotFound(PathBuf::from("/nowhere"));
        assert!(err.to_string().contains("/nowhere"));
    }
}
