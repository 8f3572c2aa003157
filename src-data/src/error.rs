//! Error type for data-provider failures

/// Error type for auxiliary-data lookup and validation issues
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("no data found for identifier '{id}' (dimension {ndim})")]
    NotFound { id: String, ndim: usize },

    #[error("data '{id}' has shape {got}, expected {expected}")]
    Shape { id: String, expected: String, got: String },

    #[error("data '{id}' is not numeric: {detail}")]
    Parse { id: String, detail: String },

    #[error("data '{id}' is not a permutation of 1..={ndim}")]
    Permutation { id: String, ndim: usize },

    #[error("failed to read data for '{id}': {source}")]
    Io {
        id: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Env(#[from] optbench_env::EnvError),
}
