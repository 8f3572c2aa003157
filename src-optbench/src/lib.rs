//! optbench: a catalog of benchmark functions for evaluating optimizers
//!
//! Each benchmark function pairs a closed-form formula with a domain, a
//! known global optimum and a descriptor of its mathematical properties.
//! Functions come in two families:
//!
//! - **CEC families** ([`cec_based`]): shifted/rotated, hybrid and
//!   composition functions keyed by competition year and index
//! - **Name-based** ([`name_based`]): classic closed-form functions keyed
//!   by common name
//!
//! The [`registry`] module is the discovery surface over both.
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use optbench::{BenchmarkFunction, SUCCESS_TOL, registry};
//!
//! let f = registry::cec(2015, 1, Some(10)).unwrap();
//! assert_eq!(f.evaluate(f.x_global()).unwrap(), 100.0);
//! assert!(f.is_succeed(f.x_global(), SUCCESS_TOL).unwrap());
//!
//! let ones = Array1::ones(10);
//! assert!(f.evaluate(&ones).unwrap() > 100.0);
//! ```

pub use optbench_core::{
    BenchError, BenchmarkFunction, DimensionDefaults, EvalCounter, FunctionProperties,
    SUCCESS_TOL, check_solution, resolve_ndim_and_bounds,
};
pub use optbench_data::{DataError, DataSource, FileStore, SyntheticStore};

pub use optbench_cec as cec_based;
pub use optbench_named as name_based;
pub use optbench_operators as operators;

pub mod registry;
