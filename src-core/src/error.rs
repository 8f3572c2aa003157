//! Error taxonomy for benchmark construction and evaluation
//!
//! All of these are local validation failures: they surface immediately,
//! are never retried, and never coerce (a mismatched input vector is
//! rejected, not truncated or padded).

use optbench_data::DataError;

/// Error type for benchmark construction, lookup and evaluation
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// Requested dimension unsupported or above the maximum; fatal at
    /// construction time.
    #[error("dimension {requested} is not supported (max {max}, supported {supported:?})")]
    Dimension { requested: usize, max: usize, supported: Vec<usize> },

    /// Supplied bounds length mismatches the resolved dimension; fatal at
    /// construction time.
    #[error("bounds length {got} does not match dimension {expected}")]
    Bounds { expected: usize, got: usize },

    /// `evaluate` called with a vector of the wrong length; fatal per
    /// call, instance state (including the evaluation counter) untouched.
    #[error("input vector has length {got}, expected {expected}")]
    Input { expected: usize, got: usize },

    /// Registry lookup matched nothing.
    #[error("no benchmark matches '{query}'")]
    Catalog { query: String },

    /// Auxiliary data could not be located or shape-validated; fatal at
    /// construction time.
    #[error(transparent)]
    Data(#[from] DataError),
}
