//! Benchmark function abstraction
//!
//! The pieces every concrete benchmark family shares:
//!
//! - [`BenchmarkFunction`]: the polymorphic contract (evaluate, success
//!   test, metadata accessors, evaluation counter)
//! - [`FunctionProperties`]: immutable descriptor of the mathematical
//!   properties of a function
//! - [`DimensionDefaults`] and the construction/evaluation validation
//!   helpers
//! - [`BenchError`]: the error taxonomy
//!
//! # Example
//!
//! ```rust,ignore
//! use optbench_core::{BenchmarkFunction, SUCCESS_TOL};
//!
//! let f = some_benchmark();
//! let fitness = f.evaluate(&candidate)?;
//! let solved = f.is_succeed(&candidate, SUCCESS_TOL)?;
//! ```

pub mod counter;
pub mod error;
pub mod function;
pub mod properties;
pub mod validate;

pub use counter::EvalCounter;
pub use error::BenchError;
pub use function::{BenchmarkFunction, SUCCESS_TOL};
pub use properties::FunctionProperties;
pub use validate::{DimensionDefaults, check_solution, resolve_ndim_and_bounds};
