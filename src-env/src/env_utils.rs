//! Environment variable utilities for optbench
//!
//! This module provides utilities for handling environment variables,
//! particularly the OPTBENCH_DATA_DIR variable that points to the directory
//! holding the published benchmark support data.

use std::env;
use std::path::PathBuf;

/// Name of the environment variable pointing at the benchmark data directory
pub const DATA_DIR_VAR: &str = "OPTBENCH_DATA_DIR";

/// Error type for environment variable issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "OPTBENCH_DATA_DIR environment variable is not set. Please set it to the directory holding the benchmark data files (e.g., export OPTBENCH_DATA_DIR=/path/to/data)"
    )]
    DataDirNotSet,

    #[error("OPTBENCH_DATA_DIR points to a non-existent directory: {0}")]
    DataDirNotFound(PathBuf),
}

/// Get the OPTBENCH_DATA_DIR environment variable and validate it exists
///
/// # Errors
///
/// Returns an error if:
/// - OPTBENCH_DATA_DIR is not set
/// - OPTBENCH_DATA_DIR points to a non-existent directory
pub fn data_dir_from_env() -> Result<PathBuf, EnvError> {
    let data_dir = env::var(DATA_DIR_VAR).map_err(|_| EnvError::DataDirNotSet)?;

    let path = PathBuf::from(data_dir);

    if !path.exists() {
        return Err(EnvError::DataDirNotFound(path));
    }

    Ok(path)
}
