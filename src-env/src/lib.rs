//! Environment utilities for optbench
//!
//! Resolution of the benchmark data directory (shift vectors, rotation
//! matrices, shuffle tables) from the `OPTBENCH_DATA_DIR` environment
//! variable.

pub mod env_utils;

pub use env_utils::{DATA_DIR_VAR, EnvError, data_dir_from_env};
